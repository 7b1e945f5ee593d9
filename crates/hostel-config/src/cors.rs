use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
}

impl CorsConfig {
    /// Reads `ALLOWED_ORIGINS`. Unset or `*` permits every origin.
    pub fn from_env() -> Self {
        Self::parse(env::var("ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn parse(value: Option<&str>) -> Self {
        let raw = value.unwrap_or("*").trim();

        if raw.is_empty() || raw == "*" {
            return Self {
                allowed_origins: AllowedOrigins::Any,
            };
        }

        let origins = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            allowed_origins: AllowedOrigins::List(origins),
        }
    }

    pub fn permissive() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
        }
    }
}
