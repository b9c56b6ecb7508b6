// src/application/directory/transitions.rs
//! Synchronous transition rules for a directory session.
//!
//! `DirectoryCore` owns the phase and the published [`ViewState`]; the async
//! shell in [`super::machine`] only decides when to call into it. Every method
//! here is a complete transition from one consistent view to the next.

use crate::{
    application::{dto::ViewState, error::FetchError},
    domain::{
        directory::{PageNumber, PageRequest, QueryFilter},
        errors::{DomainError, DomainResult},
        favorite::FavoriteEntry,
        user::UserRecord,
    },
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryPhase {
    Idle,
    Loading(PageRequest),
    Loaded(PageRequest),
    Failed { request: PageRequest, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Refresh(QueryFilter),
    NextPage,
    PreviousPage,
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("a fetch is already in flight")]
    InFlight,
    #[error("there is no next page")]
    NoNextPage,
    #[error("there is no previous page")]
    NoPreviousPage,
    #[error("there is no failed request to retry")]
    NothingToRetry,
}

/// How a requested transition ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Transition {
    Loaded,
    Failed,
    Rejected(Rejection),
    /// The fetch never completed (task cancelled); the view is back at the
    /// last displayed page.
    Abandoned,
}

#[derive(Debug)]
pub struct DirectoryCore {
    page_size: u32,
    phase: DirectoryPhase,
    /// Request whose result is currently displayed. Paging is relative to it.
    displayed: Option<PageRequest>,
    view: ViewState,
}

impl DirectoryCore {
    pub fn new(page_size: u32) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self {
            page_size,
            phase: DirectoryPhase::Idle,
            displayed: None,
            view: ViewState::default(),
        })
    }

    pub fn phase(&self) -> &DirectoryPhase {
        &self.phase
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Accepts or drops an intent. On acceptance the phase becomes `Loading`
    /// and the returned request must be settled with [`Self::complete`] or
    /// [`Self::abandon`].
    pub fn begin(&mut self, intent: Intent) -> Result<PageRequest, Rejection> {
        if matches!(self.phase, DirectoryPhase::Loading(_)) {
            return Err(Rejection::InFlight);
        }

        let request = match intent {
            Intent::Refresh(filter) => PageRequest {
                page: PageNumber::FIRST,
                page_size: self.page_size,
                filter,
            },
            Intent::NextPage => match &self.displayed {
                Some(current) if self.view.has_next_page => current.at(current.page.next()),
                _ => return Err(Rejection::NoNextPage),
            },
            Intent::PreviousPage => match &self.displayed {
                Some(current) => match current.page.previous() {
                    Some(page) => current.at(page),
                    None => return Err(Rejection::NoPreviousPage),
                },
                None => return Err(Rejection::NoPreviousPage),
            },
            Intent::Retry => match &self.phase {
                DirectoryPhase::Failed { request, .. } => request.clone(),
                _ => return Err(Rejection::NothingToRetry),
            },
        };

        self.phase = DirectoryPhase::Loading(request.clone());
        self.view.is_loading = true;
        self.view.error = None;
        Ok(request)
    }

    /// Settles an in-flight request. A result for anything other than the
    /// request currently loading is ignored and reported as `Abandoned`.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<UserRecord>, FetchError>,
    ) -> Transition {
        if self.phase != DirectoryPhase::Loading(request.clone()) {
            return Transition::Abandoned;
        }

        match result {
            Ok(users) => {
                let has_next_page = users.len() == self.page_size as usize;
                self.view.users = users.into_iter().map(Arc::new).collect();
                self.view.page = request.page;
                self.view.filter = request.filter.clone();
                self.view.has_next_page = has_next_page;
                self.view.has_previous_page = !request.page.is_first();
                self.view.is_loading = false;
                self.view.error = None;
                self.displayed = Some(request.clone());
                self.phase = DirectoryPhase::Loaded(request.clone());
                Transition::Loaded
            }
            Err(err) => {
                let error = err.to_string();
                self.view.is_loading = false;
                self.view.error = Some(error.clone());
                self.phase = DirectoryPhase::Failed {
                    request: request.clone(),
                    error,
                };
                Transition::Failed
            }
        }
    }

    /// Drops an in-flight request without a result.
    pub fn abandon(&mut self, request: &PageRequest) {
        if self.phase != DirectoryPhase::Loading(request.clone()) {
            return;
        }
        self.phase = match &self.displayed {
            Some(displayed) => DirectoryPhase::Loaded(displayed.clone()),
            None => DirectoryPhase::Idle,
        };
        self.view.is_loading = false;
    }

    pub fn apply_favorites(&mut self, entries: &[FavoriteEntry]) {
        self.view.favorited = entries.iter().map(|entry| entry.id.clone()).collect();
    }

    pub fn dismiss_error(&mut self) {
        self.view.error = None;
    }

    /// Publishes a failure that happened outside the fetch pipeline. Phase,
    /// users and paging are left as they are.
    pub fn surface_error(&mut self, message: String) {
        self.view.error = Some(message);
    }
}
