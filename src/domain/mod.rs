// src/domain/mod.rs
pub mod directory;
pub mod errors;
pub mod favorite;
pub mod user;
