// src/application/commands/mod.rs
pub mod favorites;

pub use favorites::FavoriteToggleCoordinator;
