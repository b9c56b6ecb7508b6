// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, Semaphore};

use user_directory::application::ports::directory_source::{
    RemoteDirectorySource, RemotePageQuery, SourceError,
};
use user_directory::application::ports::time::Clock;
use user_directory::domain::errors::{DomainError, DomainResult};
use user_directory::domain::favorite::{
    FavoriteEntry, FavoriteFeed, FavoriteSnapshot, FavoriteStore,
};
use user_directory::domain::user::{UserKey, UserRecord};
use user_directory::infrastructure::repositories::InMemoryFavoriteStore;

use super::builders::{UserBuilder, fixed_now};

/// Deterministic remote directory: every seed owns an ordered listing of
/// `total` records, and page `p` is the `p`-th slice of it.
pub struct SeededDirectory {
    total: usize,
    calls: AtomicUsize,
    failures_left: AtomicUsize,
    queries: Mutex<Vec<RemotePageQuery>>,
}

impl SeededDirectory {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            calls: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// The next `count` calls fail with a transport error.
    pub fn fail_next(&self, count: usize) {
        self.failures_left.store(count, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<RemotePageQuery> {
        self.queries.lock().unwrap().last().cloned()
    }

    fn page(&self, query: &RemotePageQuery) -> Vec<UserRecord> {
        let seed = query.seed.clone().unwrap_or_else(|| "unseeded".into());
        let size = query.results_per_page as usize;
        let start = (query.page as usize - 1) * size;
        let end = (start + size).min(self.total);
        (start..end)
            .map(|index| {
                UserBuilder::new(format!("{seed}-{index}"))
                    .nationality(query.nationality.clone().unwrap_or_else(|| "US".into()))
                    .build()
            })
            .collect()
    }
}

#[async_trait]
impl RemoteDirectorySource for SeededDirectory {
    async fn fetch(&self, query: RemotePageQuery) -> Result<Vec<UserRecord>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        let should_fail = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(SourceError::Transport("connection reset by peer".into()));
        }

        Ok(self.page(&query))
    }
}

/// Holds every fetch until the test releases it.
pub struct GatedDirectory {
    pub inner: SeededDirectory,
    gate: Semaphore,
    started: Notify,
}

impl GatedDirectory {
    pub fn new(total: usize) -> Self {
        Self {
            inner: SeededDirectory::new(total),
            gate: Semaphore::new(0),
            started: Notify::new(),
        }
    }

    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self, fetches: usize) {
        self.gate.add_permits(fetches);
    }
}

#[async_trait]
impl RemoteDirectorySource for GatedDirectory {
    async fn fetch(&self, query: RemotePageQuery) -> Result<Vec<UserRecord>, SourceError> {
        self.started.notify_one();
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        permit.forget();
        self.inner.fetch(query).await
    }
}

/// In-memory store whose reads or writes can be made to fail.
#[derive(Default)]
pub struct FlakyFavoriteStore {
    pub inner: InMemoryFavoriteStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FlakyFavoriteStore {
    fn check(&self, flag: &AtomicBool) -> DomainResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("disk I/O error".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FavoriteStore for FlakyFavoriteStore {
    fn observe_all(&self) -> FavoriteFeed {
        self.inner.observe_all()
    }

    fn snapshot(&self) -> FavoriteSnapshot {
        self.inner.snapshot()
    }

    async fn get_by_key(&self, key: &UserKey) -> DomainResult<Option<FavoriteEntry>> {
        self.check(&self.fail_reads)?;
        self.inner.get_by_key(key).await
    }

    async fn upsert(&self, entry: FavoriteEntry) -> DomainResult<()> {
        self.check(&self.fail_writes)?;
        self.inner.upsert(entry).await
    }

    async fn delete_by_key(&self, key: &UserKey) -> DomainResult<()> {
        self.check(&self.fail_writes)?;
        self.inner.delete_by_key(key).await
    }

    async fn exists_by_key(&self, key: &UserKey) -> DomainResult<bool> {
        self.check(&self.fail_reads)?;
        self.inner.exists_by_key(key).await
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::default())
}
