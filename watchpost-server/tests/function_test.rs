use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_save_and_fetch_round_trip() {
    let app = MockApp::new().await;

    let (status, config) = app
        .request(
            Method::PUT,
            "/users/u1/functions/sound",
            Some(json!({
                "useCaseName": "Garage door",
                "notificationTitle": "🔊 Loud noise",
                "notificationBody": "Something rattled the garage.",
                "threshold": 0.4
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(config["name"], json!("sound"));
    assert_eq!(config["useCaseName"], json!("Garage door"));
    assert_eq!(config["threshold"], json!(0.4));

    let (status, config) = app
        .request(Method::GET, "/users/u1/functions/sound", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(config["notificationTitle"], json!("🔊 Loud noise"));
    assert_eq!(config["threshold"], json!(0.4));
}

#[tokio::test]
async fn test_threshold_is_clamped_on_save() {
    let app = MockApp::new().await;

    let (_, config) = app
        .request(
            Method::PUT,
            "/users/u1/functions/sound",
            Some(json!({
                "useCaseName": "Sound Sensor",
                "notificationTitle": "t",
                "notificationBody": "b",
                "threshold": 7.5
            })),
        )
        .await;
    assert_eq!(config["threshold"], json!(1.0));

    let (_, config) = app
        .request(
            Method::PUT,
            "/users/u1/functions/sound",
            Some(json!({
                "useCaseName": "Sound Sensor",
                "notificationTitle": "t",
                "notificationBody": "b",
                "threshold": 0.01
            })),
        )
        .await;
    assert_eq!(config["threshold"], json!(0.1));
}

#[tokio::test]
async fn test_unknown_function_is_not_found() {
    let app = MockApp::new().await;

    let (status, error) = app
        .request(Method::GET, "/users/u1/functions/mailbox", None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], json!("Function config not found"));
}

#[tokio::test]
async fn test_functions_are_scoped_per_user() {
    let app = MockApp::new().await;

    let (status, _) = app
        .request(
            Method::PUT,
            "/users/u1/functions/vibration",
            Some(json!({
                "useCaseName": "Washer",
                "notificationTitle": "t",
                "notificationBody": "b"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(Method::GET, "/users/u2/functions/vibration", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
