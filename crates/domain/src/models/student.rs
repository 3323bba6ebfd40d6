//! Student domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: String,
    pub email: String,
}

/// Request payload for creating a student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    pub first_name: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    pub last_name: String,

    #[validate(custom(function = "shared::validation::validate_social_security_number"))]
    #[validate(length(
        max = 13,
        message = "Social security number must be at most 13 characters"
    ))]
    pub social_security_number: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 50, message = "Email must be at most 50 characters"))]
    pub email: String,
}

/// Request payload for replacing a student.
///
/// Carries the id so it can be checked against the path parameter.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub id: i32,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    pub first_name: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    pub last_name: String,

    #[validate(custom(function = "shared::validation::validate_social_security_number"))]
    #[validate(length(
        max = 13,
        message = "Social security number must be at most 13 characters"
    ))]
    pub social_security_number: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 50, message = "Email must be at most 50 characters"))]
    pub email: String,
}

/// Response payload for student operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: String,
    pub email: String,
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            social_security_number: s.social_security_number,
            email: s.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    fn valid_create_request() -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            social_security_number: "19900101-2020".to_string(),
            email: "jane@doe.com".to_string(),
        }
    }

    #[test]
    fn test_create_student_request_deserialization() {
        let json = r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "socialSecurityNumber": "19900101-2020",
            "email": "jane@doe.com"
        }"#;

        let request: CreateStudentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name, "Jane");
        assert_eq!(request.last_name, "Doe");
        assert_eq!(request.social_security_number, "19900101-2020");
        assert_eq!(request.email, "jane@doe.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_student_request_missing_field() {
        let json = r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@doe.com"
        }"#;

        let result: Result<CreateStudentRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_student_request_blank_field() {
        let mut request = valid_create_request();
        request.first_name = "  ".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_create_student_request_ssn_too_long() {
        let mut request = valid_create_request();
        request.social_security_number = "19900101-20201".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors
            .field_errors()
            .contains_key("social_security_number"));
    }

    #[test]
    fn test_create_student_request_ssn_trailing_space() {
        let mut request = valid_create_request();
        request.social_security_number = "19900101-202 ".to_string();

        let errors = request.validate().unwrap_err();
        let ssn_errors = &errors.field_errors()["social_security_number"];
        assert_eq!(ssn_errors[0].code, "whitespace");
    }

    #[test]
    fn test_create_student_request_nul_in_name() {
        let mut request = valid_create_request();
        request.first_name = "Ja\0ne".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_create_student_request_ssn_exactly_thirteen() {
        let request = valid_create_request();
        assert_eq!(request.social_security_number.len(), 13);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_student_request_email_too_long() {
        let mut request = valid_create_request();
        request.email = format!("{}@example.com", "a".repeat(45));

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_create_student_request_fake_names_valid() {
        for _ in 0..10 {
            let mut request = valid_create_request();
            request.email = SafeEmail().fake();
            assert!(request.validate().is_ok(), "{:?}", request);
        }
    }

    #[test]
    fn test_update_student_request_deserialization() {
        let json = r#"{
            "id": 1,
            "firstName": "Jane",
            "lastName": "Doe",
            "socialSecurityNumber": "19900101-2010",
            "email": "jane@outlook.com"
        }"#;

        let request: UpdateStudentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, 1);
        assert_eq!(request.social_security_number, "19900101-2010");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_student_request_requires_id() {
        let json = r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "socialSecurityNumber": "19900101-2010",
            "email": "jane@outlook.com"
        }"#;

        let result: Result<UpdateStudentRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_student_request_blank_email() {
        let json = r#"{
            "id": 1,
            "firstName": "Jane",
            "lastName": "Doe",
            "socialSecurityNumber": "19900101-2010",
            "email": ""
        }"#;

        let request: UpdateStudentRequest = serde_json::from_str(json).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_update_student_request_ssn_leading_space() {
        let json = r#"{
            "id": 1,
            "firstName": "Jane",
            "lastName": "Doe",
            "socialSecurityNumber": " 19900101-201",
            "email": "jane@outlook.com"
        }"#;

        let request: UpdateStudentRequest = serde_json::from_str(json).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors
            .field_errors()
            .contains_key("social_security_number"));
    }

    #[test]
    fn test_student_dto_serialization() {
        let dto = StudentDto {
            id: 7,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            social_security_number: "19900101-2020".to_string(),
            email: "jane@doe.com".to_string(),
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"firstName\":\"Jane\""));
        assert!(json.contains("\"lastName\":\"Doe\""));
        assert!(json.contains("\"socialSecurityNumber\":\"19900101-2020\""));
        assert!(json.contains("\"email\":\"jane@doe.com\""));
    }

    #[test]
    fn test_student_dto_from_student() {
        let student = Student {
            id: 3,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            social_security_number: "19850505-1234".to_string(),
            email: "john@smith.com".to_string(),
        };

        let dto: StudentDto = student.clone().into();
        assert_eq!(dto.id, student.id);
        assert_eq!(dto.first_name, student.first_name);
        assert_eq!(dto.last_name, student.last_name);
        assert_eq!(dto.social_security_number, student.social_security_number);
        assert_eq!(dto.email, student.email);
    }
}
