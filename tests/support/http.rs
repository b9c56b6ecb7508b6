// tests/support/http.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use user_directory::application::ports::directory_source::RemoteDirectorySource;
use user_directory::application::services::DirectoryServices;
use user_directory::domain::favorite::FavoriteStore;
use user_directory::infrastructure::repositories::InMemoryFavoriteStore;
use user_directory::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::fixed_clock;

pub struct TestApp {
    pub router: Router,
    pub services: Arc<DirectoryServices>,
    pub store: Arc<InMemoryFavoriteStore>,
}

pub fn make_test_app(source: Arc<dyn RemoteDirectorySource>, page_size: u32) -> TestApp {
    let store = Arc::new(InMemoryFavoriteStore::new());
    let favorite_store: Arc<dyn FavoriteStore> = store.clone();
    let services = Arc::new(
        DirectoryServices::new(source, favorite_store, fixed_clock(), page_size)
            .expect("services"),
    );
    let router = build_router(HttpState {
        services: Arc::clone(&services),
    });
    TestApp {
        router,
        services,
        store,
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the status and the `{error, message}` envelope.
pub async fn assert_error_response(resp: Response<Body>, status: StatusCode, error: &str) {
    assert_eq!(resp.status(), status);
    let json = json_body(resp).await;
    assert_eq!(json["error"], error);
    assert!(json["message"].is_string());
}
