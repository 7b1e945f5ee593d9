//! # Hostel CLI
//!
//! Administrative tools for the tables the HTTP API never writes (blocks,
//! admins) plus fake-data seeding for local development.
//!
//! ```ignore
//! use hostel_cli::admin::{create_admin, NewAdmin};
//! use hostel_cli::seeder::{seed_all, SeedConfig};
//!
//! let block = create_block(&pool, "Iqbal Block", 1).await?;
//! seed_all(&pool, SeedConfig { blocks: 2, students_per_block: 50 }, bcrypt_cost).await?;
//! ```

pub mod admin;
pub mod seeder;
