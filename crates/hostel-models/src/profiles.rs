use chrono::{DateTime, Utc};
use data_encoding::BASE64;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A profile belongs to an admin (by email) or a student (by reg_no).
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub profile_id: i32,
    pub email: Option<String>,
    pub reg_no: Option<String>,
    pub profile_picture: Option<Vec<u8>>,
    pub bio: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Profile as returned over HTTP; the picture is base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            bio: profile.bio,
            profile_picture: profile.profile_picture.map(|bytes| BASE64.encode(&bytes)),
        }
    }
}
