use std::env;

#[derive(Clone, Debug)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    /// Reads `BCRYPT_COST`, falling back to [`bcrypt::DEFAULT_COST`].
    /// Values outside bcrypt's 4..=31 range are ignored.
    pub fn from_env() -> Self {
        Self::parse(env::var("BCRYPT_COST").ok().as_deref())
    }

    pub fn parse(value: Option<&str>) -> Self {
        let bcrypt_cost = value
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or(bcrypt::DEFAULT_COST);

        Self { bcrypt_cost }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}
