// src/presentation/http/state.rs
use crate::application::services::DirectoryServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<DirectoryServices>,
}
