use axum::{Router, routing::get};

use super::controller::get_profile;
use crate::state::AppState;

pub fn init_profiles_router() -> Router<AppState> {
    Router::new().route("/{reg_no}", get(get_profile))
}
