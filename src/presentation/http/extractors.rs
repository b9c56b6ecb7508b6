// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, domain::user::UserKey};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::HttpError;

/// `{id}` path segment parsed into a [`UserKey`].
#[derive(Debug, Clone)]
pub struct UserKeyPath(pub UserKey);

impl<S> FromRequestParts<S> for UserKeyPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| HttpError::from_error(ApplicationError::validation(err.body_text())))?;

        UserKey::new(raw)
            .map(Self)
            .map_err(|err| HttpError::from_error(err.into()))
    }
}
