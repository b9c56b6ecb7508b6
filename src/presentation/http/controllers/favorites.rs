// src/presentation/http/controllers/favorites.rs
use crate::application::dto::FavoriteDto;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn list_favorites(Extension(state): Extension<HttpState>) -> Json<Vec<FavoriteDto>> {
    Json(state.services.favorites())
}
