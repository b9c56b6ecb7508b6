// src/application/dto/view_state.rs
use crate::domain::{
    directory::{PageNumber, QueryFilter},
    user::{UserKey, UserRecord},
};
use serde::Serialize;
use std::{collections::BTreeSet, sync::Arc};

/// Externally observed snapshot of one directory session. Replaced as a
/// whole on every transition.
///
/// `users` is always exactly the last successfully fetched page for
/// (`page`, `filter`). `favorited` mirrors the most recent favorites snapshot
/// and is maintained independently of fetching.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub page: PageNumber,
    pub users: Vec<Arc<UserRecord>>,
    pub favorited: BTreeSet<UserKey>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub filter: QueryFilter,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: PageNumber::FIRST,
            users: Vec::new(),
            favorited: BTreeSet::new(),
            is_loading: false,
            error: None,
            filter: QueryFilter::unfiltered(),
            has_next_page: false,
            has_previous_page: false,
        }
    }
}

impl ViewState {
    pub fn is_favorite(&self, key: &UserKey) -> bool {
        self.favorited.contains(key)
    }

    pub fn find_user(&self, key: &UserKey) -> Option<Arc<UserRecord>> {
        self.users.iter().find(|user| &user.id == key).cloned()
    }
}
