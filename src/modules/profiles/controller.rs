use axum::{Json, extract::State};
use tracing::instrument;

use hostel_core::AppError;
use hostel_core::errors::ErrorResponse;
use hostel_models::ProfileResponse;

use super::service::ProfileService;
use crate::state::AppState;
use crate::validator::ValidatedPath;

/// Fetch a student's profile
#[utoipa::path(
    get,
    path = "/api/profiles/{reg_no}",
    params(
        ("reg_no" = String, Path, description = "Student registration number")
    ),
    responses(
        (status = 200, description = "Profile with base64 picture", body = ProfileResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    ValidatedPath(reg_no): ValidatedPath<String>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = ProfileService::get_for_student(&state.db, &reg_no).await?;
    Ok(Json(profile.into()))
}
