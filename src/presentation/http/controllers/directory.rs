// src/presentation/http/controllers/directory.rs
use crate::application::{directory::Transition, dto::ViewState};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub nationality: Option<String>,
}

/// Result of a paging/search request together with the view it left behind.
/// A dropped request (fetch already in flight, no such page) is not an
/// error; it shows up as `rejected`.
#[derive(Debug, Serialize)]
pub struct DirectoryResponse {
    pub transition: Transition,
    pub state: ViewState,
}

fn respond(state: &HttpState, transition: Transition) -> Json<DirectoryResponse> {
    Json(DirectoryResponse {
        transition,
        state: state.services.view_state(),
    })
}

pub async fn view_state(Extension(state): Extension<HttpState>) -> Json<ViewState> {
    Json(state.services.view_state())
}

pub async fn search(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SearchRequest>,
) -> Json<DirectoryResponse> {
    let text = payload.nationality.unwrap_or_default();
    let transition = state.services.search(&text).await;
    respond(&state, transition)
}

pub async fn refresh(Extension(state): Extension<HttpState>) -> Json<DirectoryResponse> {
    let transition = state.services.reload().await;
    respond(&state, transition)
}

pub async fn next_page(Extension(state): Extension<HttpState>) -> Json<DirectoryResponse> {
    let transition = state.services.next_page().await;
    respond(&state, transition)
}

pub async fn previous_page(Extension(state): Extension<HttpState>) -> Json<DirectoryResponse> {
    let transition = state.services.previous_page().await;
    respond(&state, transition)
}

pub async fn retry(Extension(state): Extension<HttpState>) -> Json<DirectoryResponse> {
    let transition = state.services.retry().await;
    respond(&state, transition)
}

pub async fn dismiss_error(Extension(state): Extension<HttpState>) -> StatusCode {
    state.services.dismiss_error();
    StatusCode::NO_CONTENT
}
