use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_unknown_user_reads_all_clear() {
    let app = MockApp::new().await;

    let (status, user) = app.request(Method::GET, "/users/ghost", None).await;

    // Never an error: an unwritten user is simply the default status.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], json!("ghost"));
    assert_eq!(user["mailDetected"], json!(false));
    assert!(user["mailLastUpdatedAt"].is_null());
    assert_eq!(user["dryerRunning"], json!(false));
    assert!(user["dryerLastEvent"].is_null());
    assert!(user["dryerLastUpdatedAt"].is_null());
}
