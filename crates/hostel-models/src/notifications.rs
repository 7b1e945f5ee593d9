use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A message queued for a parent about one of their child's slips.
/// Delivery happens outside this service; `sent` records the outcome.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub notification_id: i32,
    pub slip_id: i32,
    pub parent_id: i32,
    pub message: String,
    pub sent_at: DateTime<Utc>,
    pub sent: bool,
}
