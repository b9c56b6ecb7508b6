// src/presentation/http/controllers/users.rs
use crate::application::{dto::DetailView, error::ApplicationError};
use crate::domain::user::UserRecord;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::UserKeyPath;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct FavoriteToggleResponse {
    pub id: String,
    pub favorite: bool,
}

pub async fn toggle_favorite(
    Extension(state): Extension<HttpState>,
    UserKeyPath(id): UserKeyPath,
) -> HttpResult<Json<FavoriteToggleResponse>> {
    let record = state
        .services
        .find_record(&id)
        .ok_or_else(|| ApplicationError::not_found(format!("user {id} is not loaded")))
        .into_http()?;

    let favorite = state.services.toggle_favorite(&record).await.into_http()?;

    Ok(Json(FavoriteToggleResponse {
        id: id.to_string(),
        favorite,
    }))
}

pub async fn select_user(
    Extension(state): Extension<HttpState>,
    UserKeyPath(id): UserKeyPath,
) -> HttpResult<Json<Arc<UserRecord>>> {
    state.services.select(&id).into_http().map(Json)
}

pub async fn get_user_detail(
    Extension(state): Extension<HttpState>,
    UserKeyPath(id): UserKeyPath,
) -> HttpResult<Json<DetailView>> {
    state.services.detail(&id).await.into_http().map(Json)
}
