// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::FavoriteToggleCoordinator,
        detail_cache::DetailCache,
        directory::{DirectoryStateMachine, Transition},
        dto::{DetailView, FavoriteDto, ViewState},
        error::{ApplicationError, ApplicationResult},
        ports::{ClockPort, DirectorySourcePort},
        queries::{FavoriteQueryService, PageFetcher},
    },
    domain::{
        directory::QueryFilter,
        favorite::FavoriteStore,
        user::{UserKey, UserRecord},
    },
};

/// Everything a UI or CLI needs to drive one directory session: paging and
/// search, favorite toggling, the observable view and the list-to-detail
/// handoff.
pub struct DirectoryServices {
    pub directory: Arc<DirectoryStateMachine>,
    pub favorite_commands: Arc<FavoriteToggleCoordinator>,
    pub favorite_queries: Arc<FavoriteQueryService>,
    detail_cache: Arc<DetailCache>,
}

impl DirectoryServices {
    /// Builds a session and starts its favorites subscription. Must be called
    /// from within a tokio runtime.
    pub fn new(
        source: Arc<DirectorySourcePort>,
        favorite_store: Arc<dyn FavoriteStore>,
        clock: Arc<ClockPort>,
        page_size: u32,
    ) -> ApplicationResult<Self> {
        let fetcher = Arc::new(PageFetcher::new(source));
        let directory = Arc::new(DirectoryStateMachine::new(
            fetcher,
            Arc::clone(&favorite_store),
            page_size,
        )?);
        let favorite_commands = Arc::new(FavoriteToggleCoordinator::new(
            Arc::clone(&favorite_store),
            clock,
        ));
        let favorite_queries = Arc::new(FavoriteQueryService::new(favorite_store));

        Ok(Self {
            directory,
            favorite_commands,
            favorite_queries,
            detail_cache: Arc::new(DetailCache::new()),
        })
    }

    pub async fn refresh(&self, filter: QueryFilter) -> Transition {
        self.directory.refresh(filter).await
    }

    pub async fn search(&self, text: &str) -> Transition {
        self.directory.search(text).await
    }

    /// Re-runs the query currently on display from page 1.
    pub async fn reload(&self) -> Transition {
        let filter = self.directory.view_state().filter;
        self.directory.refresh(filter).await
    }

    pub async fn next_page(&self) -> Transition {
        self.directory.next_page().await
    }

    pub async fn previous_page(&self) -> Transition {
        self.directory.previous_page().await
    }

    pub async fn retry(&self) -> Transition {
        self.directory.retry().await
    }

    pub fn dismiss_error(&self) {
        self.directory.dismiss_error();
    }

    pub fn observe_view_state(&self) -> tokio::sync::watch::Receiver<ViewState> {
        self.directory.observe()
    }

    pub fn view_state(&self) -> ViewState {
        self.directory.view_state()
    }

    /// Returns the membership after the toggle. The displayed view catches up
    /// through the favorites feed. A failure is also shown in the view's
    /// `error`; a successful toggle clears it.
    pub async fn toggle_favorite(&self, record: &UserRecord) -> ApplicationResult<bool> {
        match self.favorite_commands.toggle(record).await {
            Ok(favorite) => {
                self.directory.dismiss_error();
                Ok(favorite)
            }
            Err(err) => {
                self.directory.report_error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn cache_detail(&self, record: Arc<UserRecord>) {
        self.detail_cache.put(record.id.clone(), record);
    }

    pub fn get_cached_detail(&self, id: &UserKey) -> Option<Arc<UserRecord>> {
        self.detail_cache.get(id)
    }

    /// Record on display or previously handed to the detail cache.
    pub fn find_record(&self, id: &UserKey) -> Option<Arc<UserRecord>> {
        self.directory
            .view_state()
            .find_user(id)
            .or_else(|| self.detail_cache.get(id))
    }

    /// Caches a record from the current page for the detail view.
    pub fn select(&self, id: &UserKey) -> ApplicationResult<Arc<UserRecord>> {
        let record = self
            .directory
            .view_state()
            .find_user(id)
            .ok_or_else(|| ApplicationError::not_found(format!("user {id} is not on the current page")))?;
        self.cache_detail(Arc::clone(&record));
        Ok(record)
    }

    /// Detail view for a previously cached record. There is no remote
    /// single-record lookup, so a record never cached is reported missing.
    pub async fn detail(&self, id: &UserKey) -> ApplicationResult<DetailView> {
        let user = self
            .get_cached_detail(id)
            .ok_or_else(|| ApplicationError::not_found(format!("no cached detail for user {id}")))?;
        let is_favorite = self.favorite_queries.is_favorite(id).await?;
        Ok(DetailView { user, is_favorite })
    }

    pub fn favorites(&self) -> Vec<FavoriteDto> {
        self.favorite_queries.list()
    }

    pub fn shutdown(&self) {
        self.directory.shutdown();
    }
}
