use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{info, instrument};

use hostel_core::{AppError, hash_password, verify_password};
use hostel_models::{CreateStudentDto, StudentDetail, UpdatePasswordDto};

use crate::metrics::track_student_created;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn list_names(db: &PgPool) -> Result<Vec<String>, AppError> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM students ORDER BY reg_no")
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(names)
    }

    /// Inserts a student. Uniqueness of `reg_no` and `cnic` and the existence
    /// of the referenced block/parent are left to the store's constraints.
    #[instrument(skip(db, dto, bcrypt_cost), fields(reg_no = %dto.reg_no))]
    pub async fn create_student(
        db: &PgPool,
        dto: CreateStudentDto,
        bcrypt_cost: u32,
    ) -> Result<(), AppError> {
        let hashed_password = hash_password(&dto.password, bcrypt_cost)?;

        sqlx::query(
            "INSERT INTO students
                (reg_no, name, cnic, block_id, password, parent_id, email, room, emergency_contact)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&dto.reg_no)
        .bind(&dto.name)
        .bind(&dto.cnic)
        .bind(dto.block_id)
        .bind(&hashed_password)
        .bind(dto.parent_id)
        .bind(&dto.email)
        .bind(&dto.room)
        .bind(&dto.emergency_contact)
        .execute(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow!(
                        "Student with reg_no {} or the same cnic already exists",
                        dto.reg_no
                    ));
                }
            }
            AppError::database(e)
        })?;

        info!("Student created");
        track_student_created();
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_student(db: &PgPool, reg_no: &str) -> Result<StudentDetail, AppError> {
        sqlx::query_as::<_, StudentDetail>(
            "SELECT reg_no, name, cnic, block_id, email FROM students WHERE reg_no = $1",
        )
        .bind(reg_no)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))
    }

    /// Replaces the stored hash and refreshes `updated_at`.
    #[instrument(skip(db, dto, bcrypt_cost), fields(reg_no = %dto.reg_no))]
    pub async fn update_password(
        db: &PgPool,
        dto: UpdatePasswordDto,
        bcrypt_cost: u32,
    ) -> Result<(), AppError> {
        let stored_hash = sqlx::query_scalar::<_, String>(
            "SELECT password FROM students WHERE reg_no = $1",
        )
        .bind(&dto.reg_no)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))?;

        if let Some(current_password) = &dto.current_password {
            let matches = verify_password(current_password, &stored_hash).unwrap_or(false);
            if !matches {
                return Err(AppError::unauthorized(anyhow!(
                    "Current password is incorrect"
                )));
            }
        }

        let hashed_password = hash_password(&dto.new_password, bcrypt_cost)?;

        let result = sqlx::query(
            "UPDATE students SET password = $1, updated_at = NOW() WHERE reg_no = $2",
        )
        .bind(&hashed_password)
        .bind(&dto.reg_no)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Student not found")));
        }

        info!("Student password updated");
        Ok(())
    }
}
