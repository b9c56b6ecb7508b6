// src/domain/favorite/mod.rs
pub mod entity;
pub mod feed;
pub mod repository;

pub use entity::FavoriteEntry;
pub use feed::{FavoriteFeed, FavoritePublisher, FavoriteSnapshot};
pub use repository::FavoriteStore;
