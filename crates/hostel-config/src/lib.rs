//! # Hostel Config
//!
//! Configuration types for the Hostel API, loaded from environment variables:
//!
//! - [`cors`]: Cross-origin policy
//! - [`database`]: PostgreSQL connection settings
//! - [`security`]: Password hashing cost
//! - [`server`]: Listen addresses for the API and metrics servers
//!
//! # Example
//!
//! ```ignore
//! use hostel_config::{CorsConfig, DatabaseConfig, SecurityConfig, ServerConfig};
//!
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod security;
pub mod server;

pub use cors::{AllowedOrigins, CorsConfig};
pub use database::DatabaseConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;
