// src/domain/favorite/repository.rs
use super::{
    entity::FavoriteEntry,
    feed::{FavoriteFeed, FavoriteSnapshot},
};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserKey;
use async_trait::async_trait;

#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Live view of every favorite. Each call is an independent subscription
    /// that begins at the current snapshot.
    fn observe_all(&self) -> FavoriteFeed;

    /// Latest published set, without opening a subscription.
    fn snapshot(&self) -> FavoriteSnapshot;

    async fn get_by_key(&self, key: &UserKey) -> DomainResult<Option<FavoriteEntry>>;

    /// Insert or replace the entry stored under `entry.id`.
    async fn upsert(&self, entry: FavoriteEntry) -> DomainResult<()>;

    async fn delete_by_key(&self, key: &UserKey) -> DomainResult<()>;

    async fn exists_by_key(&self, key: &UserKey) -> DomainResult<bool>;
}
