use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A physical subdivision of a hostel.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Block {
    pub block_id: i32,
    pub block_name: String,
    pub hostel_number: i32,
}
