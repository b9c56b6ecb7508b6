// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory_favorite;
mod sqlite_favorite;

pub use error::map_sqlx;
pub use in_memory_favorite::InMemoryFavoriteStore;
pub use sqlite_favorite::SqliteFavoriteStore;
