use axum::{Router, routing::get};

use super::controller::get_warnings;
use crate::state::AppState;

pub fn init_warnings_router() -> Router<AppState> {
    Router::new().route("/{reg_no}", get(get_warnings))
}
