//! Student domain models and DTOs.
//!
//! A student is a hostel resident keyed by registration number (`reg_no`).
//! The stored password is always a bcrypt hash and never leaves the service.

use chrono::{DateTime, Utc};
use hostel_core::serde::empty_string_as_none;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::not_blank;

/// A student row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub reg_no: String,
    pub cnic: String,
    pub name: String,
    pub email: Option<String>,
    pub block_id: i32,
    pub password: String,
    pub parent_id: Option<i32>,
    pub room: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a student returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct StudentDetail {
    #[schema(example = "2021-CS-1")]
    pub reg_no: String,
    pub name: String,
    pub cnic: String,
    pub block_id: i32,
    pub email: Option<String>,
}

/// DTO for registering a new student.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(
        length(min = 1, max = 20, message = "reg_no must be 1 to 20 characters"),
        custom(function = "not_blank", message = "reg_no is required")
    )]
    #[schema(example = "2021-CS-1")]
    pub reg_no: String,
    #[validate(
        length(min = 1, max = 100, message = "name must be 1 to 100 characters"),
        custom(function = "not_blank", message = "name is required")
    )]
    pub name: String,
    #[validate(
        length(min = 1, max = 15, message = "cnic must be 1 to 15 characters"),
        custom(function = "not_blank", message = "cnic is required")
    )]
    #[schema(example = "3520212345671")]
    pub cnic: String,
    pub block_id: i32,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 10, message = "room must be at most 10 characters"))]
    pub room: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 15, message = "emergency_contact must be at most 15 characters"))]
    pub emergency_contact: Option<String>,
}

/// DTO for replacing a student's password.
///
/// When `current_password` is supplied it must match the stored password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordDto {
    #[validate(
        length(min = 1, message = "reg_no is required"),
        custom(function = "not_blank", message = "reg_no is required")
    )]
    pub reg_no: String,
    #[validate(length(min = 1, message = "new_password is required"))]
    pub new_password: String,
    #[serde(default)]
    pub current_password: Option<String>,
}
