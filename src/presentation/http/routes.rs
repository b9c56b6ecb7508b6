// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{directory, favorites, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{delete, get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/directory", get(directory::view_state))
        .route("/api/v1/directory/search", post(directory::search))
        .route("/api/v1/directory/refresh", post(directory::refresh))
        .route("/api/v1/directory/next", post(directory::next_page))
        .route("/api/v1/directory/previous", post(directory::previous_page))
        .route("/api/v1/directory/retry", post(directory::retry))
        .route("/api/v1/directory/error", delete(directory::dismiss_error))
        .route("/api/v1/favorites", get(favorites::list_favorites))
        .route("/api/v1/users/{id}", get(users::get_user_detail))
        .route("/api/v1/users/{id}/select", post(users::select_user))
        .route("/api/v1/users/{id}/favorite", post(users::toggle_favorite))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
