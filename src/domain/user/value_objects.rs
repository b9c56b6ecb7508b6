// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique record key. Stable across pages and filters, shared with
/// the favorites key space.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserKey(String);

impl UserKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("user key cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<UserKey> for String {
    fn from(value: UserKey) -> Self {
        value.0
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub title: String,
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// "title first last", skipping blank parts.
    pub fn full_name(&self) -> String {
        [&self.title, &self.first, &self.last]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street_number: i64,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: String,
    pub latitude: String,
    pub longitude: String,
    pub timezone_offset: String,
    pub timezone_description: String,
}

impl Location {
    pub fn full_address(&self) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.street_number, self.street_name, self.city, self.state, self.country
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pictures {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

/// A dated event with the age derived from it (birth, registration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifespan {
    pub date: DateTime<Utc>,
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_key_rejects_blank_and_trims() {
        assert!(UserKey::new("   ").is_err());
        assert_eq!(UserKey::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn full_name_joins_non_blank_parts() {
        let name = PersonName {
            title: "Mr".into(),
            first: "Test".into(),
            last: "User".into(),
        };
        assert_eq!(name.full_name(), "Mr Test User");

        let untitled = PersonName {
            title: String::new(),
            first: "Ada".into(),
            last: "Lovelace".into(),
        };
        assert_eq!(untitled.full_name(), "Ada Lovelace");
    }
}
