// src/domain/favorite/feed.rs
use super::entity::FavoriteEntry;
use std::sync::Arc;
use tokio::sync::watch;

pub type FavoriteSnapshot = Arc<Vec<FavoriteEntry>>;

/// Subscription to the complete favorites set. A fresh feed starts at the
/// latest snapshot; dropping it ends the subscription.
#[derive(Debug, Clone)]
pub struct FavoriteFeed {
    rx: watch::Receiver<FavoriteSnapshot>,
}

impl FavoriteFeed {
    pub fn current(&self) -> FavoriteSnapshot {
        Arc::clone(&self.rx.borrow())
    }

    /// Waits for the next published snapshot. Returns `None` once the store
    /// behind the feed is gone.
    pub async fn next(&mut self) -> Option<FavoriteSnapshot> {
        self.rx.changed().await.ok()?;
        Some(Arc::clone(&self.rx.borrow_and_update()))
    }
}

/// Publishing side held by store implementations.
#[derive(Debug)]
pub struct FavoritePublisher {
    tx: watch::Sender<FavoriteSnapshot>,
}

impl FavoritePublisher {
    pub fn new(initial: Vec<FavoriteEntry>) -> Self {
        let (tx, _) = watch::channel(Arc::new(initial));
        Self { tx }
    }

    pub fn publish(&self, entries: Vec<FavoriteEntry>) {
        self.tx.send_replace(Arc::new(entries));
    }

    pub fn current(&self) -> FavoriteSnapshot {
        Arc::clone(&self.tx.borrow())
    }

    pub fn subscribe(&self) -> FavoriteFeed {
        FavoriteFeed {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
