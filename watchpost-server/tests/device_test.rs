use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_upsert_creates_then_merges() {
    let app = MockApp::new().await;

    let (status, device) = app
        .request(
            Method::PUT,
            "/users/u1/devices/phone-a",
            Some(json!({
                "name": "Old Phone",
                "model": "Simulated",
                "systemVersion": "1.0",
                "bundleID": "dev.watchpost.agent",
                "token": "tok-a"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(device["id"], json!("phone-a"));
    assert_eq!(device["name"], json!("Old Phone"));
    assert_eq!(device["bundleID"], json!("dev.watchpost.agent"));
    assert_eq!(device["isActive"], json!(true));
    assert_eq!(device["isListening"], json!(false));
    assert!(device["battery"].is_null());

    // A heartbeat carries only the volatile fields; identity and token
    // keep their stored values.
    let (status, device) = app
        .request(
            Method::PUT,
            "/users/u1/devices/phone-a",
            Some(json!({
                "isListening": true,
                "task": "Mailbox Notifier",
                "battery": 55
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(device["name"], json!("Old Phone"));
    assert_eq!(device["token"], json!("tok-a"));
    assert_eq!(device["isListening"], json!(true));
    assert_eq!(device["task"], json!("Mailbox Notifier"));
    assert_eq!(device["battery"], json!(55));
}

#[tokio::test]
async fn test_battery_out_of_range_rejected() {
    let app = MockApp::new().await;

    let (status, error) = app
        .request(
            Method::PUT,
            "/users/u1/devices/phone-a",
            Some(json!({ "battery": 150 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], json!("Battery must be between 0 and 100"));

    let (status, _) = app
        .request(
            Method::PUT,
            "/users/u1/devices/phone-a",
            Some(json!({ "battery": -1 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Rejected before the write: nothing was registered.
    let (_, devices) = app.request(Method::GET, "/users/u1/devices", None).await;
    assert_eq!(devices, json!([]));
}

#[tokio::test]
async fn test_list_returns_registered_devices() {
    let app = MockApp::new().await;
    app.register_device("u1", "phone-a", Some("tok-a")).await;
    app.register_device("u1", "phone-b", None).await;

    let (status, devices) = app.request(Method::GET, "/users/u1/devices", None).await;
    assert_eq!(status, StatusCode::OK);

    let devices = devices.as_array().unwrap();
    assert_eq!(devices.len(), 2);

    let ids: Vec<_> = devices.iter().map(|d| d["id"].as_str().unwrap()).collect();
    assert!(ids.contains(&"phone-a"));
    assert!(ids.contains(&"phone-b"));

    // Another user's shelf is separate.
    let (_, devices) = app.request(Method::GET, "/users/u2/devices", None).await;
    assert_eq!(devices, json!([]));
}

#[tokio::test]
async fn test_fanout_skips_tokenless_and_inactive_devices() {
    let app = MockApp::new().await;
    app.register_device("u1", "silent", None).await;
    app.register_device("u1", "good", Some("tok-good")).await;

    let (status, _) = app
        .request(
            Method::PUT,
            "/users/u1/devices/retired",
            Some(json!({ "token": "tok-retired", "isActive": false })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, summary) = app
        .request(
            Method::POST,
            "/sendNotification",
            Some(json!({ "userId": "u1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["successCount"], json!(1));

    let calls = app.push.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].tokens, vec!["tok-good".to_string()]);
}
