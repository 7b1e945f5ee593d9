use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use hostel_core::AppError;
use hostel_models::Profile;

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip(db))]
    pub async fn get_for_student(db: &PgPool, reg_no: &str) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(
            "SELECT profile_id, email, reg_no, profile_picture, bio, updated_at
             FROM profiles
             WHERE reg_no = $1
             ORDER BY updated_at DESC
             LIMIT 1",
        )
        .bind(reg_no)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Profile not found")))
    }
}
