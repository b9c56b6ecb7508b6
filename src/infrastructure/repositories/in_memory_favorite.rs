// src/infrastructure/repositories/in_memory_favorite.rs
use crate::domain::errors::DomainResult;
use crate::domain::favorite::{
    FavoriteEntry, FavoriteFeed, FavoritePublisher, FavoriteSnapshot, FavoriteStore,
    entity::sort_entries,
};
use crate::domain::user::UserKey;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Non-durable favorites store with the same observable contract as the
/// sqlite one.
pub struct InMemoryFavoriteStore {
    entries: Mutex<BTreeMap<UserKey, FavoriteEntry>>,
    publisher: FavoritePublisher,
}

impl Default for InMemoryFavoriteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFavoriteStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            publisher: FavoritePublisher::new(Vec::new()),
        }
    }

    pub fn with_entries(entries: impl IntoIterator<Item = FavoriteEntry>) -> Self {
        let map: BTreeMap<_, _> = entries
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect();
        Self {
            publisher: FavoritePublisher::new(sorted_entries(&map)),
            entries: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live `observe_all` subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.publisher.subscriber_count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<UserKey, FavoriteEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn sorted_entries(map: &BTreeMap<UserKey, FavoriteEntry>) -> Vec<FavoriteEntry> {
    let mut entries: Vec<_> = map.values().cloned().collect();
    sort_entries(&mut entries);
    entries
}

#[async_trait]
impl FavoriteStore for InMemoryFavoriteStore {
    fn observe_all(&self) -> FavoriteFeed {
        self.publisher.subscribe()
    }

    fn snapshot(&self) -> FavoriteSnapshot {
        self.publisher.current()
    }

    async fn get_by_key(&self, key: &UserKey) -> DomainResult<Option<FavoriteEntry>> {
        Ok(self.lock().get(key).cloned())
    }

    async fn upsert(&self, entry: FavoriteEntry) -> DomainResult<()> {
        let mut guard = self.lock();
        guard.insert(entry.id.clone(), entry);
        self.publisher.publish(sorted_entries(&guard));
        Ok(())
    }

    async fn delete_by_key(&self, key: &UserKey) -> DomainResult<()> {
        let mut guard = self.lock();
        if guard.remove(key).is_some() {
            self.publisher.publish(sorted_entries(&guard));
        }
        Ok(())
    }

    async fn exists_by_key(&self, key: &UserKey) -> DomainResult<bool> {
        Ok(self.lock().contains_key(key))
    }
}
