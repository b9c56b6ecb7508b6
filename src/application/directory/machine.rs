// src/application/directory/machine.rs
use super::transitions::{DirectoryCore, DirectoryPhase, Intent, Transition};
use crate::{
    application::{dto::ViewState, error::ApplicationResult, queries::PageFetcher},
    domain::{directory::QueryFilter, favorite::FavoriteStore},
};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::{sync::watch, task::JoinHandle};

struct Shared {
    core: Mutex<DirectoryCore>,
    state: watch::Sender<ViewState>,
    fetcher: Arc<PageFetcher>,
}

impl Shared {
    /// Runs one transition and publishes the resulting view while still
    /// holding the core lock, so observers see snapshots in transition order.
    fn update<R>(&self, transition: impl FnOnce(&mut DirectoryCore) -> R) -> R {
        let mut core = self.core.lock().unwrap_or_else(PoisonError::into_inner);
        let result = transition(&mut core);
        let next = core.view();
        self.state.send_if_modified(|current| {
            if current == next {
                false
            } else {
                *current = next.clone();
                true
            }
        });
        result
    }
}

/// One directory list session.
///
/// Page fetches are serialized: while one is in flight every further
/// refresh/paging request is dropped. The favorites feed is merged into the
/// view for the whole lifetime of the machine and never causes a fetch.
/// Dropping the machine (or calling [`Self::shutdown`]) ends the favorites
/// subscription.
pub struct DirectoryStateMachine {
    shared: Arc<Shared>,
    favorites_task: JoinHandle<()>,
}

impl DirectoryStateMachine {
    /// Must be called from within a tokio runtime.
    pub fn new(
        fetcher: Arc<PageFetcher>,
        favorites: Arc<dyn FavoriteStore>,
        page_size: u32,
    ) -> ApplicationResult<Self> {
        let core = DirectoryCore::new(page_size)?;
        let (state, _) = watch::channel(core.view().clone());
        let shared = Arc::new(Shared {
            core: Mutex::new(core),
            state,
            fetcher,
        });

        let mut feed = favorites.observe_all();
        shared.update(|core| core.apply_favorites(&feed.current()));

        let task_shared = Arc::clone(&shared);
        let favorites_task = tokio::spawn(async move {
            while let Some(snapshot) = feed.next().await {
                tracing::debug!(count = snapshot.len(), "applying favorites snapshot");
                task_shared.update(|core| core.apply_favorites(&snapshot));
            }
            tracing::debug!("favorites feed closed");
        });

        Ok(Self {
            shared,
            favorites_task,
        })
    }

    /// Loads page 1 of `filter`, discarding the current position.
    pub async fn refresh(&self, filter: QueryFilter) -> Transition {
        self.drive(Intent::Refresh(filter)).await
    }

    /// Free-text nationality search. Blank text means unfiltered.
    pub async fn search(&self, text: &str) -> Transition {
        self.refresh(QueryFilter::nationality(text)).await
    }

    pub async fn next_page(&self) -> Transition {
        self.drive(Intent::NextPage).await
    }

    pub async fn previous_page(&self) -> Transition {
        self.drive(Intent::PreviousPage).await
    }

    /// Re-issues the request that last failed.
    pub async fn retry(&self) -> Transition {
        self.drive(Intent::Retry).await
    }

    pub fn dismiss_error(&self) {
        self.shared.update(DirectoryCore::dismiss_error);
    }

    /// Shows a failure from outside the fetch pipeline (a favorite toggle)
    /// in the published view.
    pub fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.shared.update(|core| core.surface_error(message));
    }

    /// Latest snapshot plus every subsequent one. Dropping the receiver
    /// unsubscribes.
    pub fn observe(&self) -> watch::Receiver<ViewState> {
        self.shared.state.subscribe()
    }

    pub fn view_state(&self) -> ViewState {
        self.shared.state.borrow().clone()
    }

    pub fn phase(&self) -> DirectoryPhase {
        self.shared
            .core
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .phase()
            .clone()
    }

    pub fn is_observing_favorites(&self) -> bool {
        !self.favorites_task.is_finished()
    }

    pub fn shutdown(&self) {
        self.favorites_task.abort();
    }

    async fn drive(&self, intent: Intent) -> Transition {
        let request = match self.shared.update(|core| core.begin(intent)) {
            Ok(request) => request,
            Err(rejection) => {
                tracing::debug!(%rejection, "directory request dropped");
                return Transition::Rejected(rejection);
            }
        };

        tracing::info!(page = %request.page, filter = %request.filter, "loading directory page");

        // The fetch runs detached so that a caller giving up mid-await cannot
        // leave the machine stuck in `Loading`.
        let shared = Arc::clone(&self.shared);
        let task_request = request.clone();
        let fetch = tokio::spawn(async move {
            let result = shared.fetcher.fetch_request(&task_request).await;
            shared.update(|core| core.complete(&task_request, result))
        });

        match fetch.await {
            Ok(transition) => transition,
            Err(err) => {
                tracing::warn!(page = %request.page, error = %err, "directory fetch task did not finish");
                self.shared.update(|core| core.abandon(&request));
                Transition::Abandoned
            }
        }
    }
}

impl Drop for DirectoryStateMachine {
    fn drop(&mut self) {
        self.favorites_task.abort();
    }
}
