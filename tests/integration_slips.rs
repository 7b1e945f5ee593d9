mod common;

use axum::http::StatusCode;
use common::{create_test_block, create_test_student, get, post, setup_test_app};
use serde_json::{Value, json};
use sqlx::PgPool;

fn slip_payload(reg_no: &str) -> Value {
    json!({
        "reg_no": reg_no,
        "type": "Leave",
        "address": "House 4, Street 9, Lahore",
        "reason": "Family event",
        "date": "2024-05-01",
        "time": "18:30",
        "room_no": 12
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_new_slip_is_pending(pool: PgPool) {
    let block_id = create_test_block(&pool, "Iqbal").await;
    create_test_student(&pool, "2021-CS-1", "111", "a@uni.edu", "pass", block_id).await;
    let app = setup_test_app(pool);

    let (status, body) = post(&app, "/api/slips", slip_payload("2021-CS-1")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Slip created successfully");

    let (status, body) = get(&app, "/api/slips").await;
    assert_eq!(status, StatusCode::OK);

    let slips = body.as_array().unwrap();
    assert_eq!(slips.len(), 1);
    assert_eq!(slips[0]["reg_no"], "2021-CS-1");
    assert_eq!(slips[0]["status"], "Pending");
    assert!(slips[0]["slip_id"].is_i64());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_optional_fields_may_be_omitted(pool: PgPool) {
    let block_id = create_test_block(&pool, "Iqbal").await;
    create_test_student(&pool, "2021-CS-1", "111", "a@uni.edu", "pass", block_id).await;
    let app = setup_test_app(pool.clone());

    let mut payload = slip_payload("2021-CS-1");
    let object = payload.as_object_mut().unwrap();
    object.remove("address");
    object.remove("reason");
    object.insert("time".to_string(), json!("07:15:30"));

    let (status, _) = post(&app, "/api/slips", payload).await;
    assert_eq!(status, StatusCode::CREATED);

    let (address, time): (Option<String>, chrono::NaiveTime) =
        sqlx::query_as("SELECT address, time FROM slips WHERE reg_no = '2021-CS-1'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(address.is_none());
    assert_eq!(time, chrono::NaiveTime::from_hms_opt(7, 15, 30).unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_slips_listed_in_creation_order(pool: PgPool) {
    let block_id = create_test_block(&pool, "Iqbal").await;
    create_test_student(&pool, "2021-CS-1", "111", "a@uni.edu", "pass", block_id).await;
    create_test_student(&pool, "2021-CS-2", "222", "b@uni.edu", "pass", block_id).await;
    let app = setup_test_app(pool);

    post(&app, "/api/slips", slip_payload("2021-CS-2")).await;
    post(&app, "/api/slips", slip_payload("2021-CS-1")).await;

    let (_, body) = get(&app, "/api/slips").await;
    let reg_nos: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["reg_no"].as_str().unwrap())
        .collect();
    assert_eq!(reg_nos, vec!["2021-CS-2", "2021-CS-1"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_slip_field(pool: PgPool) {
    let app = setup_test_app(pool);

    for field in ["reg_no", "type", "date", "time", "room_no"] {
        let mut payload = slip_payload("2021-CS-1");
        payload.as_object_mut().unwrap().remove(field);

        let (status, body) = post(&app, "/api/slips", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["detail"], format!("{} is required", field));
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_malformed_time_is_rejected(pool: PgPool) {
    let app = setup_test_app(pool);

    let mut payload = slip_payload("2021-CS-1");
    payload["time"] = json!("half past six");

    let (status, body) = post(&app, "/api/slips", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["kind"], "validation_error");
    assert_eq!(body["error"]["detail"], "time is invalid");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_slip_for_unknown_student(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = post(&app, "/api/slips", slip_payload("2099-XX-1")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["kind"], "constraint_violation");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_blank_slip_fields_are_rejected(pool: PgPool) {
    let app = setup_test_app(pool);

    for field in ["reg_no", "type"] {
        let mut payload = slip_payload("2021-CS-1");
        payload[field] = json!("  ");

        let (status, body) = post(&app, "/api/slips", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["detail"], format!("{} is required", field));
    }
}
