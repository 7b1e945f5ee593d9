use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use hostel_core::{AppError, verify_password};
use hostel_models::{Admin, LoginRequest, LoginResponse, LoginRole, Student};

use crate::metrics::track_login;

pub struct AuthService;

/// A stored value that is not a bcrypt hash never matches.
fn credentials_match(password: &str, hash: &str) -> bool {
    verify_password(password, hash).unwrap_or_else(|e| {
        warn!(error = %e.error, "Stored password is not a valid hash");
        false
    })
}

impl AuthService {
    /// Checks credentials against admins first, then students.
    ///
    /// An admin email with a wrong password still falls through to the
    /// student lookup.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn login(db: &PgPool, dto: LoginRequest) -> Result<LoginResponse, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT email, name, role, password, block_id FROM admins WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        if let Some(admin) = admin.filter(|a| credentials_match(&dto.password, &a.password)) {
            let role = if admin.is_main_admin() {
                LoginRole::Admin
            } else {
                LoginRole::SubAdmin
            };
            info!(role = role.as_str(), "Admin logged in");
            track_login(role.as_str());

            return Ok(LoginResponse {
                role,
                name: admin.name,
                block_id: admin.block_id,
                reg_no: None,
            });
        }

        let students = sqlx::query_as::<_, Student>(
            "SELECT reg_no, cnic, name, email, block_id, password, parent_id, room,
                    emergency_contact, created_at, updated_at
             FROM students
             WHERE email = $1
             ORDER BY reg_no",
        )
        .bind(&dto.email)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        if let Some(student) = students
            .into_iter()
            .find(|s| credentials_match(&dto.password, &s.password))
        {
            info!(reg_no = %student.reg_no, "Resident logged in");
            track_login(LoginRole::Resident.as_str());

            return Ok(LoginResponse {
                role: LoginRole::Resident,
                name: student.name,
                block_id: Some(student.block_id),
                reg_no: Some(student.reg_no),
            });
        }

        track_login("rejected");
        Err(AppError::unauthorized(anyhow!("Invalid email or password")))
    }
}
