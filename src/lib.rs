//! Searchable, paginated user directory with a live favorites overlay.
//!
//! The core is [`application::directory::DirectoryStateMachine`]: it pages
//! through a remote directory one discrete page at a time, keeps at most one
//! fetch in flight, and merges the favorites store's live feed into the
//! published [`application::dto::ViewState`] without re-fetching.
//! [`application::services::DirectoryServices`] bundles it with favorite
//! toggling and the list-to-detail cache for UI or HTTP consumers.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
