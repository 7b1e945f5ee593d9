use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SlipHistory {
    pub history_id: i32,
    pub slip_id: i32,
    pub action: String,
    pub comment: Option<String>,
    pub action_date: DateTime<Utc>,
}
