// src/application/dto/detail.rs
use crate::domain::user::UserRecord;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub user: Arc<UserRecord>,
    pub is_favorite: bool,
}
