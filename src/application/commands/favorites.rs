// src/application/commands/favorites.rs
use crate::{
    application::{error::ToggleError, ports::time::Clock},
    domain::{
        errors::DomainError,
        favorite::{FavoriteEntry, FavoriteStore},
        user::{UserKey, UserRecord},
    },
};
use std::sync::Arc;

/// Read-then-write favorite toggle.
///
/// Membership is always read from the store, never from a displayed view.
/// The read and the write are not one transaction: two toggles of the same
/// key racing from elsewhere resolve last-write-wins, which is acceptable for
/// a single user on a single device. Displayed state learns about the change
/// only through the store's live feed.
pub struct FavoriteToggleCoordinator {
    store: Arc<dyn FavoriteStore>,
    clock: Arc<dyn Clock>,
}

impl FavoriteToggleCoordinator {
    pub fn new(store: Arc<dyn FavoriteStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Returns the membership after the toggle.
    pub async fn toggle(&self, record: &UserRecord) -> Result<bool, ToggleError> {
        let key = &record.id;
        let is_favorite = self
            .store
            .exists_by_key(key)
            .await
            .map_err(|err| failure(key, err))?;

        if is_favorite {
            self.store
                .delete_by_key(key)
                .await
                .map_err(|err| failure(key, err))?;
        } else {
            let entry = FavoriteEntry::from_record(record, self.clock.now());
            self.store
                .upsert(entry)
                .await
                .map_err(|err| failure(key, err))?;
        }

        tracing::info!(key = %key, favorite = !is_favorite, "favorite toggled");
        Ok(!is_favorite)
    }
}

fn failure(key: &UserKey, source: DomainError) -> ToggleError {
    tracing::warn!(key = %key, error = %source, "favorite toggle failed");
    ToggleError {
        key: key.clone(),
        source,
    }
}
