use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Warning {
    pub warning_id: i32,
    pub reg_no: String,
    pub issued_by: Option<String>,
    pub reason: Option<String>,
    pub issued_at: DateTime<Utc>,
}

/// Warning as listed for a student.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct WarningSummary {
    pub warning_id: i32,
    pub reason: Option<String>,
    pub issued_at: DateTime<Utc>,
}
