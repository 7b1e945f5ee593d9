use axum::{Router, routing::get};

use super::controller::{create_slip, get_slips};
use crate::state::AppState;

pub fn init_slips_router() -> Router<AppState> {
    Router::new().route("/", get(get_slips).post(create_slip))
}
