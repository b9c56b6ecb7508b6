// src/application/queries/favorites.rs
use crate::{
    application::{dto::FavoriteDto, error::ApplicationResult},
    domain::{favorite::FavoriteStore, user::UserKey},
};
use std::sync::Arc;

pub struct FavoriteQueryService {
    store: Arc<dyn FavoriteStore>,
}

impl FavoriteQueryService {
    pub fn new(store: Arc<dyn FavoriteStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<FavoriteDto> {
        self.store
            .snapshot()
            .iter()
            .map(FavoriteDto::from)
            .collect()
    }

    pub async fn is_favorite(&self, key: &UserKey) -> ApplicationResult<bool> {
        Ok(self.store.exists_by_key(key).await?)
    }
}
