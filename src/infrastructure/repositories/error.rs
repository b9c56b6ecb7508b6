// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        sqlx::Error::RowNotFound => DomainError::NotFound("favorite not found".into()),
        sqlx::Error::ColumnDecode { index, source } => {
            DomainError::Persistence(format!("failed to decode column {index}: {source}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
