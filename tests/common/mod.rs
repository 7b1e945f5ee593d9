#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use hostel::hostel_config::{CorsConfig, SecurityConfig};
use hostel::hostel_core::hash_password;
use hostel::router::init_router;
use hostel::state::AppState;

/// Lowest cost bcrypt accepts; keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn setup_test_app(pool: PgPool) -> Router {
    setup_test_app_with_cors(pool, CorsConfig::permissive())
}

pub fn setup_test_app_with_cors(pool: PgPool, cors_config: CorsConfig) -> Router {
    let state = AppState::new(
        pool,
        cors_config,
        SecurityConfig {
            bcrypt_cost: TEST_BCRYPT_COST,
        },
    );
    init_router(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn create_test_block(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO blocks (block_name, hostel_number) VALUES ($1, 1) RETURNING block_id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_parent(pool: &PgPool) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO parents (name, phone_number, relationship)
         VALUES ('Test Parent', '03001234567', 'Father')
         RETURNING parent_id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

pub struct TestStudent {
    pub reg_no: String,
    pub email: String,
    pub password: String,
    pub block_id: i32,
}

pub async fn create_test_student(
    pool: &PgPool,
    reg_no: &str,
    cnic: &str,
    email: &str,
    password: &str,
    block_id: i32,
) -> TestStudent {
    let hashed = hash_password(password, TEST_BCRYPT_COST).unwrap();

    sqlx::query(
        "INSERT INTO students (reg_no, cnic, name, email, block_id, password)
         VALUES ($1, $2, 'Test Student', $3, $4, $5)",
    )
    .bind(reg_no)
    .bind(cnic)
    .bind(email)
    .bind(block_id)
    .bind(&hashed)
    .execute(pool)
    .await
    .unwrap();

    TestStudent {
        reg_no: reg_no.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        block_id,
    }
}

pub async fn create_test_admin(
    pool: &PgPool,
    email: &str,
    name: &str,
    role: &str,
    password: &str,
    block_id: Option<i32>,
) {
    let hashed = hash_password(password, TEST_BCRYPT_COST).unwrap();

    sqlx::query(
        "INSERT INTO admins (email, name, role, password, block_id) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(email)
    .bind(name)
    .bind(role)
    .bind(&hashed)
    .bind(block_id)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_slip(pool: &PgPool, reg_no: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO slips (reg_no, type, date, time, room_no)
         VALUES ($1, 'Leave', '2024-05-01', '18:30', 12)
         RETURNING slip_id",
    )
    .bind(reg_no)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn student_payload(reg_no: &str, cnic: &str, block_id: i32) -> Value {
    serde_json::json!({
        "reg_no": reg_no,
        "name": "A",
        "cnic": cnic,
        "block_id": block_id,
        "password": "x"
    })
}
