// src/domain/favorite/entity.rs
use crate::domain::user::{UserKey, UserRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized favorite marking: enough to render a favorites list without
/// the full record. At most one entry exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: UserKey,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub picture_url: String,
    pub favorited_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn from_record(record: &UserRecord, favorited_at: DateTime<Utc>) -> Self {
        Self {
            id: record.id.clone(),
            full_name: record.full_name(),
            email: record.email.clone(),
            country: record.location.country.clone(),
            picture_url: record.pictures.large.clone(),
            favorited_at,
        }
    }
}

/// Favorites views are ordered oldest-first, ties broken by key.
pub fn sort_entries(entries: &mut [FavoriteEntry]) {
    entries.sort_by(|a, b| {
        a.favorited_at
            .cmp(&b.favorited_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
