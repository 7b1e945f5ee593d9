//! Login models.
//!
//! The hostel API checks credentials without issuing a session or token; a
//! successful login only reports who the caller is.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "warden@hostel.edu")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Role reported to the client after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum LoginRole {
    /// An admin whose role is "Main Admin".
    Admin,
    /// Any other admin.
    SubAdmin,
    /// A student.
    Resident,
}

impl LoginRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginRole::Admin => "admin",
            LoginRole::SubAdmin => "subAdmin",
            LoginRole::Resident => "resident",
        }
    }
}

/// Successful login. `reg_no` is only present for residents.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub role: LoginRole,
    pub name: String,
    pub block_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_no: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_value(LoginRole::Admin).unwrap(), "admin");
        assert_eq!(serde_json::to_value(LoginRole::SubAdmin).unwrap(), "subAdmin");
        assert_eq!(serde_json::to_value(LoginRole::Resident).unwrap(), "resident");
        assert_eq!(LoginRole::SubAdmin.as_str(), "subAdmin");
    }

    #[test]
    fn test_admin_response_omits_reg_no() {
        let response = LoginResponse {
            role: LoginRole::SubAdmin,
            name: "Block Warden".to_string(),
            block_id: None,
            reg_no: None,
        };
        let json = serde_json::to_value(response).unwrap();
        assert!(json.get("reg_no").is_none());
        assert!(json["block_id"].is_null());
    }

    #[test]
    fn test_empty_credentials_fail_validation() {
        let request = LoginRequest {
            email: String::new(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
