use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use hostel_core::AppError;
use hostel_core::errors::ErrorResponse;
use hostel_models::{CreateStudentDto, MessageResponse, StudentDetail, UpdatePasswordDto};

use super::service::StudentService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

/// List the names of all students
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "Student names", body = Vec<String>)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = StudentService::list_names(&state.db).await?;
    Ok(Json(names))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created successfully", body = MessageResponse),
        (status = 400, description = "Missing field or unknown block/parent", body = ErrorResponse),
        (status = 409, description = "Duplicate reg_no or cnic", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    StudentService::create_student(&state.db, dto, state.security_config.bcrypt_cost).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Student created successfully")),
    ))
}

/// Look up a student by registration number
#[utoipa::path(
    get,
    path = "/api/students/{reg_no}",
    params(
        ("reg_no" = String, Path, description = "Student registration number")
    ),
    responses(
        (status = 200, description = "Student details", body = StudentDetail),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    ValidatedPath(reg_no): ValidatedPath<String>,
) -> Result<Json<StudentDetail>, AppError> {
    let student = StudentService::get_student(&state.db, &reg_no).await?;
    Ok(Json(student))
}

/// Replace a student's password
#[utoipa::path(
    post,
    path = "/api/students/update_password",
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated successfully", body = MessageResponse),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 401, description = "Current password is incorrect", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdatePasswordDto>,
) -> Result<Json<MessageResponse>, AppError> {
    StudentService::update_password(&state.db, dto, state.security_config.bcrypt_cost).await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}
