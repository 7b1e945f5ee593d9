//! Fake data for local development.
//!
//! Every seeded student shares one password so the seeded accounts can be
//! used against `/api/login`.

use std::collections::HashSet;
use std::time::Instant;

use anyhow::Context;
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::name::en::Name;
use sqlx::PgPool;

use hostel_core::hash_password;

pub const SEEDED_STUDENT_PASSWORD: &str = "password123";

const DEPARTMENTS: [&str; 5] = ["CS", "EE", "ME", "CE", "BBA"];

#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub blocks: usize,
    pub students_per_block: usize,
}

#[derive(Debug, Clone)]
pub struct StudentSeed {
    pub reg_no: String,
    pub cnic: String,
    pub name: String,
    pub email: String,
    pub block_id: i32,
    pub room: String,
    pub emergency_contact: String,
}

#[derive(Debug, Clone)]
pub struct ParentSeed {
    pub name: String,
    pub phone_number: String,
    pub relationship: String,
}

fn phone_number() -> String {
    format!("03{:09}", (0..1_000_000_000u64).fake::<u64>())
}

/// Generates students spread over `block_ids`. Registration numbers and
/// CNICs are unique within the batch and fit the column widths.
pub fn generate_students(count: usize, block_ids: &[i32], year: i32) -> Vec<StudentSeed> {
    if block_ids.is_empty() {
        return Vec::new();
    }

    let cnic_base: u64 = (1_000_000_000_000..8_000_000_000_000u64).fake();

    (0..count)
        .map(|i| {
            let department = DEPARTMENTS[i % DEPARTMENTS.len()];
            let reg_no = format!("{}-{}-{}", year, department, i + 1);
            let name: String = Name().fake();
            let email = format!("{}@students.hostel.edu", reg_no.to_lowercase());

            StudentSeed {
                reg_no,
                cnic: format!("{:013}", cnic_base + i as u64),
                name,
                email,
                block_id: block_ids[i % block_ids.len()],
                room: format!("{}", (100..500u32).fake::<u32>()),
                emergency_contact: phone_number(),
            }
        })
        .collect()
}

pub fn generate_parent() -> ParentSeed {
    ParentSeed {
        name: Name().fake(),
        phone_number: phone_number(),
        relationship: "Father".to_string(),
    }
}

pub async fn seed_blocks(db: &PgPool, count: usize) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::with_capacity(count);
    let mut used = HashSet::new();

    for i in 0..count {
        let mut name: String = format!("{} Block", CityName().fake::<String>());
        if !used.insert(name.clone()) {
            name = format!("{} {}", name, i + 1);
        }
        name.truncate(50);

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO blocks (block_name, hostel_number) VALUES ($1, $2) RETURNING block_id",
        )
        .bind(&name)
        .bind((i / 4 + 1) as i32)
        .fetch_one(db)
        .await
        .context("Failed to insert block")?;
        ids.push(id);
    }

    Ok(ids)
}

/// Inserts students (each with a parent) in one transaction. Rows whose
/// reg_no or cnic already exist are skipped. Returns the number inserted.
pub async fn seed_students(
    db: &PgPool,
    students: &[StudentSeed],
    bcrypt_cost: u32,
) -> anyhow::Result<u64> {
    let password_hash =
        hash_password(SEEDED_STUDENT_PASSWORD, bcrypt_cost).map_err(|e| e.error)?;

    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for student in students {
        let parent = generate_parent();
        let parent_id: i32 = sqlx::query_scalar(
            "INSERT INTO parents (name, phone_number, relationship)
             VALUES ($1, $2, $3)
             RETURNING parent_id",
        )
        .bind(&parent.name)
        .bind(&parent.phone_number)
        .bind(&parent.relationship)
        .fetch_one(&mut *tx)
        .await?;

        let result = sqlx::query(
            "INSERT INTO students
                (reg_no, cnic, name, email, block_id, password, parent_id, room, emergency_contact)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT DO NOTHING",
        )
        .bind(&student.reg_no)
        .bind(&student.cnic)
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.block_id)
        .bind(&password_hash)
        .bind(parent_id)
        .bind(&student.room)
        .bind(&student.emergency_contact)
        .execute(&mut *tx)
        .await?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

pub async fn seed_all(db: &PgPool, config: SeedConfig, bcrypt_cost: u32) -> anyhow::Result<()> {
    let start_time = Instant::now();

    println!("🏠 Seeding {} blocks...", config.blocks);
    let block_ids = seed_blocks(db, config.blocks).await?;

    let total = config.blocks * config.students_per_block;
    println!("🎓 Seeding {} students...", total);
    let students = generate_students(total, &block_ids, 2024);
    let inserted = seed_students(db, &students, bcrypt_cost).await?;

    println!(
        "   ✓ Inserted {} blocks and {} students in {:?}",
        block_ids.len(),
        inserted,
        start_time.elapsed()
    );
    println!("   Seeded students log in with password `{}`", SEEDED_STUDENT_PASSWORD);

    Ok(())
}
