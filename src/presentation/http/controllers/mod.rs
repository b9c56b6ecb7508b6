// src/presentation/http/controllers/mod.rs
pub mod directory;
pub mod favorites;
pub mod users;
