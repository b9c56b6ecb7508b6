// src/application/dto/favorites.rs
use crate::domain::favorite::FavoriteEntry;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub picture_url: String,
    pub favorited_at: DateTime<Utc>,
}

impl From<&FavoriteEntry> for FavoriteDto {
    fn from(entry: &FavoriteEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            full_name: entry.full_name.clone(),
            email: entry.email.clone(),
            country: entry.country.clone(),
            picture_url: entry.picture_url.clone(),
            favorited_at: entry.favorited_at,
        }
    }
}
