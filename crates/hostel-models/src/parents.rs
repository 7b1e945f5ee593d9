use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Parent {
    pub parent_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub relationship: Option<String>,
}
