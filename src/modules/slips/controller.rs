use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use hostel_core::AppError;
use hostel_core::errors::ErrorResponse;
use hostel_models::{CreateSlipDto, MessageResponse, SlipSummary};

use super::service::SlipService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List every slip with its status
#[utoipa::path(
    get,
    path = "/api/slips",
    responses(
        (status = 200, description = "All slips", body = Vec<SlipSummary>)
    ),
    tag = "Slips"
)]
#[instrument(skip(state))]
pub async fn get_slips(State(state): State<AppState>) -> Result<Json<Vec<SlipSummary>>, AppError> {
    let slips = SlipService::list_slips(&state.db).await?;
    Ok(Json(slips))
}

/// File a leave or gate-pass slip
#[utoipa::path(
    post,
    path = "/api/slips",
    request_body = CreateSlipDto,
    responses(
        (status = 201, description = "Slip created successfully", body = MessageResponse),
        (status = 400, description = "Missing field or unknown student", body = ErrorResponse)
    ),
    tag = "Slips"
)]
#[instrument(skip(state, dto))]
pub async fn create_slip(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSlipDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    SlipService::create_slip(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Slip created successfully")),
    ))
}
