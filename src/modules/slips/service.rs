use sqlx::PgPool;
use tracing::{info, instrument};

use hostel_core::AppError;
use hostel_models::{CreateSlipDto, SlipSummary};

use crate::metrics::track_slip_created;

pub struct SlipService;

impl SlipService {
    #[instrument(skip(db))]
    pub async fn list_slips(db: &PgPool) -> Result<Vec<SlipSummary>, AppError> {
        let slips = sqlx::query_as::<_, SlipSummary>(
            "SELECT slip_id, reg_no, status FROM slips ORDER BY slip_id",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(slips)
    }

    /// Files a slip; `status` comes from the column default.
    #[instrument(skip(db, dto), fields(reg_no = %dto.reg_no))]
    pub async fn create_slip(db: &PgPool, dto: CreateSlipDto) -> Result<i32, AppError> {
        let slip_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO slips (reg_no, type, address, reason, date, time, room_no)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING slip_id",
        )
        .bind(&dto.reg_no)
        .bind(&dto.slip_type)
        .bind(&dto.address)
        .bind(&dto.reason)
        .bind(dto.date)
        .bind(dto.time)
        .bind(dto.room_no)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        info!(slip_id, "Slip created");
        track_slip_created();
        Ok(slip_id)
    }
}
