mod common;

use common::{create_test_block, create_test_parent, create_test_slip, create_test_student};
use hostel::hostel_models::{Notification, SlipHistory};
use sqlx::PgPool;

const SCHEMA: &str = include_str!("../migrations/20250101000000_create_hostel_schema.sql");

#[sqlx::test(migrations = "./migrations")]
async fn test_schema_is_idempotent(pool: PgPool) {
    let block_id = create_test_block(&pool, "Iqbal").await;
    create_test_student(&pool, "2021-CS-1", "111", "a@uni.edu", "pass", block_id).await;

    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_notification_requires_existing_slip(pool: PgPool) {
    let parent_id = create_test_parent(&pool).await;

    let result = sqlx::query(
        "INSERT INTO notifications (slip_id, parent_id, message) VALUES (9999, $1, 'Out tonight')",
    )
    .bind(parent_id)
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert!(db_err.is_foreign_key_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_with_slips_cannot_be_deleted(pool: PgPool) {
    let block_id = create_test_block(&pool, "Iqbal").await;
    create_test_student(&pool, "2021-CS-1", "111", "a@uni.edu", "pass", block_id).await;
    create_test_slip(&pool, "2021-CS-1").await;

    let result = sqlx::query("DELETE FROM students WHERE reg_no = '2021-CS-1'")
        .execute(&pool)
        .await;

    assert!(result.unwrap_err().as_database_error().unwrap().is_foreign_key_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_slip_status_is_constrained(pool: PgPool) {
    let block_id = create_test_block(&pool, "Iqbal").await;
    create_test_student(&pool, "2021-CS-1", "111", "a@uni.edu", "pass", block_id).await;
    let slip_id = create_test_slip(&pool, "2021-CS-1").await;

    let result = sqlx::query("UPDATE slips SET status = 'Lost' WHERE slip_id = $1")
        .bind(slip_id)
        .execute(&pool)
        .await;
    assert!(result.is_err());

    sqlx::query("UPDATE slips SET status = 'Approved' WHERE slip_id = $1")
        .bind(slip_id)
        .execute(&pool)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_slip_history_and_notifications(pool: PgPool) {
    let block_id = create_test_block(&pool, "Iqbal").await;
    let parent_id = create_test_parent(&pool).await;
    create_test_student(&pool, "2021-CS-1", "111", "a@uni.edu", "pass", block_id).await;
    let slip_id = create_test_slip(&pool, "2021-CS-1").await;

    sqlx::query("INSERT INTO slip_history (slip_id, action, comment) VALUES ($1, 'Approved', 'ok')")
        .bind(slip_id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO notifications (slip_id, parent_id, message) VALUES ($1, $2, 'Leave approved')",
    )
    .bind(slip_id)
    .bind(parent_id)
    .execute(&pool)
    .await
    .unwrap();

    let history = sqlx::query_as::<_, SlipHistory>("SELECT * FROM slip_history")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].slip_id, slip_id);
    assert_eq!(history[0].action, "Approved");

    let notification = sqlx::query_as::<_, Notification>("SELECT * FROM notifications")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(notification.parent_id, parent_id);
    assert!(!notification.sent);
}
