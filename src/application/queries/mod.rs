// src/application/queries/mod.rs
pub mod favorites;
pub mod page_fetcher;

pub use favorites::FavoriteQueryService;
pub use page_fetcher::{PageFetcher, seed_for};
