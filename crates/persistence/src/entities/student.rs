//! Student database entity.

use sqlx::FromRow;

/// Database entity for the students table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StudentEntity {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: String,
    pub email: String,
}

/// A student row that has not been inserted yet; the id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: String,
    pub email: String,
}

impl From<StudentEntity> for domain::models::Student {
    fn from(entity: StudentEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            social_security_number: entity.social_security_number,
            email: entity.email,
        }
    }
}

impl From<domain::models::CreateStudentRequest> for NewStudent {
    fn from(request: domain::models::CreateStudentRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            social_security_number: request.social_security_number,
            email: request.email,
        }
    }
}

impl StudentEntity {
    /// Overwrites every business field from an update payload. The id is kept.
    pub fn apply(&mut self, request: domain::models::UpdateStudentRequest) {
        self.first_name = request.first_name;
        self.last_name = request.last_name;
        self.social_security_number = request.social_security_number;
        self.email = request.email;
    }
}
