pub mod commands;
pub mod detail_cache;
pub mod directory;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
