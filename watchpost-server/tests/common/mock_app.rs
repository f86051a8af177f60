use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

use watchpost_server::app::build_router;
use watchpost_server::configs::{Database, SchemaManager, Storage};
use watchpost_server::services::{MockPushGateway, PushGateway};

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub push: Arc<MockPushGateway>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let push = Arc::new(MockPushGateway::new());
        let router = build_router(storage.clone(), push.clone() as Arc<dyn PushGateway>);

        Self {
            storage,
            push,
            router,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().uri(uri).method(method);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        (status, json)
    }

    pub async fn register_device(&self, user_id: &str, device_id: &str, token: Option<&str>) {
        let (status, _) = self
            .request(
                Method::PUT,
                &format!("/users/{user_id}/devices/{device_id}"),
                Some(serde_json::json!({ "name": device_id, "token": token })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
}
