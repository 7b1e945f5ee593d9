//! Creation of blocks and admins.

use anyhow::{Context, bail};
use sqlx::PgPool;

use hostel_core::hash_password;
use hostel_models::{Admin, Block};

pub struct NewAdmin<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
    pub block_id: Option<i32>,
}

pub async fn create_block(
    db: &PgPool,
    block_name: &str,
    hostel_number: i32,
) -> anyhow::Result<Block> {
    if block_name.trim().is_empty() {
        bail!("Block name must not be empty");
    }

    let block = sqlx::query_as::<_, Block>(
        "INSERT INTO blocks (block_name, hostel_number)
         VALUES ($1, $2)
         RETURNING block_id, block_name, hostel_number",
    )
    .bind(block_name.trim())
    .bind(hostel_number)
    .fetch_one(db)
    .await
    .context("Failed to insert block")?;

    Ok(block)
}

/// Inserts an admin with a bcrypt-hashed password.
pub async fn create_admin(
    db: &PgPool,
    admin: NewAdmin<'_>,
    bcrypt_cost: u32,
) -> anyhow::Result<Admin> {
    if admin.email.trim().is_empty() || admin.name.trim().is_empty() {
        bail!("Name and email are required");
    }
    if admin.password.is_empty() {
        bail!("Password must not be empty");
    }

    let existing: Option<String> =
        sqlx::query_scalar("SELECT email FROM admins WHERE email = $1")
            .bind(admin.email)
            .fetch_optional(db)
            .await?;

    if existing.is_some() {
        bail!("An admin with email {} already exists", admin.email);
    }

    let hashed = hash_password(admin.password, bcrypt_cost).map_err(|e| e.error)?;

    let created = sqlx::query_as::<_, Admin>(
        "INSERT INTO admins (email, name, role, password, block_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING email, name, role, password, block_id",
    )
    .bind(admin.email.trim())
    .bind(admin.name.trim())
    .bind(admin.role)
    .bind(&hashed)
    .bind(admin.block_id)
    .fetch_one(db)
    .await
    .context("Failed to insert admin")?;

    Ok(created)
}
