use axum::{Json, extract::State};
use tracing::instrument;

use hostel_core::AppError;
use hostel_models::WarningSummary;

use super::service::WarningService;
use crate::state::AppState;
use crate::validator::ValidatedPath;

/// List the warnings issued to a student
#[utoipa::path(
    get,
    path = "/api/warnings/{reg_no}",
    params(
        ("reg_no" = String, Path, description = "Student registration number")
    ),
    responses(
        (status = 200, description = "Warnings, possibly empty", body = Vec<WarningSummary>)
    ),
    tag = "Warnings"
)]
#[instrument(skip(state))]
pub async fn get_warnings(
    State(state): State<AppState>,
    ValidatedPath(reg_no): ValidatedPath<String>,
) -> Result<Json<Vec<WarningSummary>>, AppError> {
    let warnings = WarningService::list_for_student(&state.db, &reg_no).await?;
    Ok(Json(warnings))
}
