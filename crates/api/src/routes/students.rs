//! Students resource handlers.
//!
//! Every write ends with exactly one `save()` on the request's context.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use domain::models::{CreateStudentRequest, Student, StudentDto, UpdateStudentRequest};
use persistence::entities::{NewStudent, StudentEntity};
use tracing::info;

use crate::error::ApiError;
use crate::extractors::{Path, Students, ValidatedJson};
use crate::middleware::record_student_write;

fn to_dto(entity: StudentEntity) -> StudentDto {
    let student: Student = entity.into();
    student.into()
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Student {} not found", id))
}

/// Create a new student.
///
/// POST /students
pub async fn create_student(
    Students(mut ctx): Students,
    ValidatedJson(request): ValidatedJson<CreateStudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    ctx.add(NewStudent::from(request));

    let entity = ctx
        .save()
        .await?
        .inserted
        .pop()
        .ok_or_else(|| ApiError::Internal("Insert returned no row".to_string()))?;

    info!(student_id = entity.id, "Student created");
    record_student_write("created");

    let location = format!("/students/{}", entity.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(to_dto(entity)),
    ))
}

/// List all students.
///
/// GET /students
pub async fn list_students(
    Students(ctx): Students,
) -> Result<Json<Vec<StudentDto>>, ApiError> {
    let students = ctx.all().await?.into_iter().map(to_dto).collect();
    Ok(Json(students))
}

/// Get a single student by ID.
///
/// GET /students/:id
pub async fn get_student(
    Students(ctx): Students,
    Path(id): Path<i32>,
) -> Result<Json<StudentDto>, ApiError> {
    let entity = ctx.find(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(to_dto(entity)))
}

/// Replace all fields of a student.
///
/// PUT /students/:id
pub async fn update_student(
    Students(mut ctx): Students,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateStudentRequest>,
) -> Result<StatusCode, ApiError> {
    if request.id != id {
        return Err(ApiError::Validation(format!(
            "Body id {} does not match path id {}",
            request.id, id
        )));
    }

    let mut entity = ctx.find(id).await?.ok_or_else(|| not_found(id))?;
    entity.apply(request);
    ctx.update(entity);
    ctx.save().await?;

    info!(student_id = id, "Student updated");
    record_student_write("updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a student.
///
/// DELETE /students/:id
pub async fn delete_student(
    Students(mut ctx): Students,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let entity = ctx.find(id).await?.ok_or_else(|| not_found(id))?;
    ctx.remove(entity);
    ctx.save().await?;

    info!(student_id = id, "Student deleted");
    record_student_write("deleted");

    Ok(StatusCode::NO_CONTENT)
}
