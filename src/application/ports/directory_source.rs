// src/application/ports/directory_source.rs
use crate::domain::user::UserRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Query as the remote directory understands it. `seed` pins the remote
/// ordering so that consecutive pages are disjoint slices of one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemotePageQuery {
    pub results_per_page: u32,
    pub page: u32,
    pub nationality: Option<String>,
    pub seed: Option<String>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("remote directory responded with status {0}")]
    Status(u16),
    #[error("malformed directory response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait RemoteDirectorySource: Send + Sync {
    /// Returns exactly the requested page, possibly shorter than
    /// `results_per_page` when the listing runs out.
    async fn fetch(&self, query: RemotePageQuery) -> Result<Vec<UserRecord>, SourceError>;
}
