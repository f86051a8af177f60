use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::services::{FanoutService, HttpPushGateway, PushGateway};

pub async fn create_app(settings: &Arc<Settings>) -> Router {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default())
            .await
            .unwrap(),
    );
    let push: Arc<dyn PushGateway> = Arc::new(HttpPushGateway::new(settings.push.clone()));

    build_router(storage, push)
}

/// Router over an already-built storage and push gateway, so tests can
/// swap in an in-memory database and a recording gateway.
pub fn build_router(storage: Arc<Storage>, push: Arc<dyn PushGateway>) -> Router {
    let fanout = Arc::new(FanoutService::new(storage.clone(), push));

    let notify = Router::new()
        .route("/sendNotification", post(send_notification))
        .with_state(NotifyState { fanout });

    let users = Router::new()
        .route("/:user_id", get(get_user_status))
        .with_state(UserState {
            storage: storage.clone(),
        });

    let devices = Router::new()
        .route("/:user_id/devices", get(get_devices))
        .route("/:user_id/devices/:device_id", put(upsert_device))
        .with_state(DeviceState {
            storage: storage.clone(),
        });

    let functions = Router::new()
        .route(
            "/:user_id/functions/:name",
            get(get_function_config).put(save_function_config),
        )
        .with_state(FunctionState {
            storage: storage.clone(),
        });

    let notifications = Router::new()
        .route("/:user_id/notifications", get(get_notifications))
        .with_state(NotificationState { storage });

    Router::new()
        .merge(notify)
        .nest(
            "/users",
            Router::new()
                .merge(users)
                .merge(devices)
                .merge(functions)
                .merge(notifications),
        )
        .layer(CorsLayer::permissive())
}
