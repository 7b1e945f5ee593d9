use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_student, get_student, get_students, update_password};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students).post(create_student))
        .route("/update_password", post(update_password))
        .route("/{reg_no}", get(get_student))
}
