// src/infrastructure/mod.rs
pub mod database;
pub mod remote;
pub mod repositories;
pub mod time;
