// src/application/error.rs
use crate::application::ports::directory_source::SourceError;
use crate::domain::{directory::PageNumber, errors::DomainError, user::UserKey};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// A page could not be obtained from the remote directory.
#[derive(Debug, Error)]
#[error("failed to fetch page {page}: {source}")]
pub struct FetchError {
    pub page: PageNumber,
    #[source]
    pub source: SourceError,
}

/// A favorite add/remove did not reach the store. The caller must assume
/// membership is unchanged.
#[derive(Debug, Error)]
#[error("failed to update favorite {key}: {source}")]
pub struct ToggleError {
    pub key: UserKey,
    #[source]
    pub source: DomainError,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Toggle(#[from] ToggleError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
