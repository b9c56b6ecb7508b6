// src/infrastructure/repositories/sqlite_favorite.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favorite::{
    FavoriteEntry, FavoriteFeed, FavoritePublisher, FavoriteSnapshot, FavoriteStore,
};
use crate::domain::user::UserKey;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;
use tokio::sync::Mutex;

const SELECT_COLUMNS: &str =
    "SELECT uuid, full_name, email, country, picture_url, favorited_at FROM favorite_users";

/// Favorites persisted in sqlite. After every write the full set is re-read
/// and published; writes are serialized so snapshots go out in write order.
/// A committed write is never reported as failed: if the re-read fails the
/// feed keeps its previous snapshot until the next successful write.
pub struct SqliteFavoriteStore {
    pool: Arc<SqlitePool>,
    publisher: FavoritePublisher,
    write_lock: Mutex<()>,
}

impl SqliteFavoriteStore {
    pub async fn new(pool: Arc<SqlitePool>) -> DomainResult<Self> {
        let initial = load_all(&pool).await?;
        Ok(Self {
            pool,
            publisher: FavoritePublisher::new(initial),
            write_lock: Mutex::new(()),
        })
    }

    async fn republish(&self) {
        match load_all(&self.pool).await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "publishing favorites snapshot");
                self.publisher.publish(entries);
            }
            Err(err) => {
                tracing::warn!(error = %err, "favorites re-read failed; feed not updated");
            }
        }
    }
}

#[derive(Debug, FromRow)]
struct FavoriteRow {
    uuid: String,
    full_name: String,
    email: String,
    country: String,
    picture_url: String,
    favorited_at: DateTime<Utc>,
}

impl TryFrom<FavoriteRow> for FavoriteEntry {
    type Error = DomainError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        Ok(FavoriteEntry {
            id: UserKey::new(row.uuid)?,
            full_name: row.full_name,
            email: row.email,
            country: row.country,
            picture_url: row.picture_url,
            favorited_at: row.favorited_at,
        })
    }
}

async fn load_all(pool: &SqlitePool) -> DomainResult<Vec<FavoriteEntry>> {
    let rows = sqlx::query_as::<_, FavoriteRow>(&format!(
        "{SELECT_COLUMNS} ORDER BY favorited_at ASC, uuid ASC"
    ))
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let entries = rows
        .into_iter()
        .filter_map(|row| {
            let uuid = row.uuid.clone();
            match FavoriteEntry::try_from(row) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(uuid = %uuid, error = %err, "skipping unreadable favorite row");
                    None
                }
            }
        })
        .collect();
    Ok(entries)
}

#[async_trait]
impl FavoriteStore for SqliteFavoriteStore {
    fn observe_all(&self) -> FavoriteFeed {
        self.publisher.subscribe()
    }

    fn snapshot(&self) -> FavoriteSnapshot {
        self.publisher.current()
    }

    async fn get_by_key(&self, key: &UserKey) -> DomainResult<Option<FavoriteEntry>> {
        let row = sqlx::query_as::<_, FavoriteRow>(&format!("{SELECT_COLUMNS} WHERE uuid = ?"))
            .bind(key.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(FavoriteEntry::try_from).transpose()
    }

    async fn upsert(&self, entry: FavoriteEntry) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;

        let FavoriteEntry {
            id,
            full_name,
            email,
            country,
            picture_url,
            favorited_at,
        } = entry;

        sqlx::query(
            "INSERT INTO favorite_users (uuid, full_name, email, country, picture_url, favorited_at) VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(uuid) DO UPDATE SET full_name = excluded.full_name, email = excluded.email, country = excluded.country, picture_url = excluded.picture_url, favorited_at = excluded.favorited_at",
        )
        .bind(id.as_str())
        .bind(full_name)
        .bind(email)
        .bind(country)
        .bind(picture_url)
        .bind(favorited_at)
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        self.republish().await;
        Ok(())
    }

    async fn delete_by_key(&self, key: &UserKey) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;

        let result = sqlx::query("DELETE FROM favorite_users WHERE uuid = ?")
            .bind(key.as_str())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() > 0 {
            self.republish().await;
        }
        Ok(())
    }

    async fn exists_by_key(&self, key: &UserKey) -> DomainResult<bool> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM favorite_users WHERE uuid = ?)")
                .bind(key.as_str())
                .fetch_one(&*self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(exists != 0)
    }
}
