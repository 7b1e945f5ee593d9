use serde::Serialize;
use sqlx::FromRow;

/// Role value that marks the elevated hostel administrator.
pub const MAIN_ADMIN_ROLE: &str = "Main Admin";

/// A staff admin. Keyed by email; `password` holds a bcrypt hash.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub email: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub block_id: Option<i32>,
}

impl Admin {
    pub fn is_main_admin(&self) -> bool {
        self.role == MAIN_ADMIN_ROLE
    }
}
