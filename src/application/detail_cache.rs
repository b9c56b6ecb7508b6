// src/application/detail_cache.rs
use crate::domain::user::{UserKey, UserRecord};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Process-lifetime handoff of full records from the list to the detail
/// view. Never persisted, never evicted. A miss is a normal outcome.
#[derive(Default)]
pub struct DetailCache {
    entries: RwLock<HashMap<UserKey, Arc<UserRecord>>>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, id: UserKey, record: Arc<UserRecord>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, record);
    }

    pub fn get(&self, id: &UserKey) -> Option<Arc<UserRecord>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}
