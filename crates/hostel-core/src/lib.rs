//! # Hostel Core
//!
//! Core types, errors, and utilities for the Hostel API.
//!
//! - [`errors`]: Application error type rendered as the shared JSON error envelope
//! - [`password`]: bcrypt password hashing and verification
//! - [`serde`]: Custom serde deserialization helpers for request bodies
//!
//! # Example
//!
//! ```ignore
//! use hostel_core::errors::AppError;
//! use hostel_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//! let hash = hash_password("secure_password", bcrypt::DEFAULT_COST)?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod password;
pub mod serde;

pub use errors::{AppError, ErrorKind};
pub use password::{hash_password, verify_password};
