use sqlx::PgPool;
use tracing::instrument;

use hostel_core::AppError;
use hostel_models::WarningSummary;

pub struct WarningService;

impl WarningService {
    /// Warnings issued to `reg_no`, oldest first. An unknown student simply
    /// has no warnings.
    #[instrument(skip(db))]
    pub async fn list_for_student(
        db: &PgPool,
        reg_no: &str,
    ) -> Result<Vec<WarningSummary>, AppError> {
        let warnings = sqlx::query_as::<_, WarningSummary>(
            "SELECT warning_id, reason, issued_at
             FROM warnings
             WHERE reg_no = $1
             ORDER BY issued_at, warning_id",
        )
        .bind(reg_no)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(warnings)
    }
}
