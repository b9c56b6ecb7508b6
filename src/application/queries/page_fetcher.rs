// src/application/queries/page_fetcher.rs
use crate::{
    application::{
        error::FetchError,
        ports::directory_source::{RemoteDirectorySource, RemotePageQuery},
    },
    domain::{
        directory::{PageNumber, PageRequest, QueryFilter},
        user::UserRecord,
    },
};
use std::sync::Arc;

const BASE_SEED: &str = "challenge";

/// Seed pinning the remote ordering for one filter. Every page of the same
/// filter shares it, so paging back and forth never reshuffles records.
pub fn seed_for(filter: &QueryFilter) -> String {
    match filter.code() {
        Some(code) => format!("{BASE_SEED}-{code}"),
        None => BASE_SEED.to_string(),
    }
}

/// Discrete-page access to the remote directory. Performs exactly one
/// outbound call per fetch and never retries.
pub struct PageFetcher {
    source: Arc<dyn RemoteDirectorySource>,
}

impl PageFetcher {
    pub fn new(source: Arc<dyn RemoteDirectorySource>) -> Self {
        Self { source }
    }

    pub async fn fetch(
        &self,
        page: PageNumber,
        page_size: u32,
        filter: &QueryFilter,
    ) -> Result<Vec<UserRecord>, FetchError> {
        let query = RemotePageQuery {
            results_per_page: page_size,
            page: page.get(),
            nationality: filter.code().map(str::to_owned),
            seed: Some(seed_for(filter)),
        };

        tracing::debug!(%page, page_size, %filter, "fetching directory page");

        match self.source.fetch(query).await {
            Ok(users) => {
                tracing::debug!(%page, %filter, count = users.len(), "directory page fetched");
                Ok(users)
            }
            Err(source) => {
                tracing::warn!(%page, %filter, error = %source, "directory page fetch failed");
                Err(FetchError { page, source })
            }
        }
    }

    pub async fn fetch_request(&self, request: &PageRequest) -> Result<Vec<UserRecord>, FetchError> {
        self.fetch(request.page, request.page_size, &request.filter)
            .await
    }
}
