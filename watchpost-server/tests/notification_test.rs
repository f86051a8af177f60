use axum::http::{Method, StatusCode};
use serde_json::json;
use time::{Duration, OffsetDateTime};

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_history_is_capped_at_fifty_newest_first() {
    let app = MockApp::new().await;

    sqlx::query("INSERT INTO users (id) VALUES ('u1');")
        .execute(app.storage.get_pool())
        .await
        .unwrap();

    let base = OffsetDateTime::now_utc() - Duration::hours(1);
    for i in 0..60i64 {
        sqlx::query(
            r#"
            INSERT INTO notifications (user_id, title, body, event_type, created_at)
            VALUES ($1, $2, 'b', 'mail', $3)
            "#,
        )
        .bind("u1")
        .bind(format!("n-{i}"))
        .bind(base + Duration::seconds(i))
        .execute(app.storage.get_pool())
        .await
        .unwrap();
    }

    let (status, history) = app
        .request(Method::GET, "/users/u1/notifications", None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 50);
    assert_eq!(history[0]["title"], json!("n-59"));
    assert_eq!(history[49]["title"], json!("n-10"));
}

#[tokio::test]
async fn test_unknown_user_has_empty_history() {
    let app = MockApp::new().await;

    let (status, history) = app
        .request(Method::GET, "/users/ghost/notifications", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(history, json!([]));
}
