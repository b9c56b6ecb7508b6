// src/infrastructure/remote/mod.rs
mod random_user;

pub use random_user::{HttpDirectorySource, decode_page};
