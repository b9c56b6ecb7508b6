// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    directory_api_url: String,
    page_size: u32,
    request_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const MAX_PAGE_SIZE: u32 = 5000;

fn default_database_url() -> String {
    "sqlite://favorites.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_directory_api_url() -> String {
    "https://randomuser.me/api/".into()
}

fn default_page_size() -> u32 {
    10
}

fn default_request_timeout() -> u64 {
    15
}

fn default_max_connections() -> u32 {
    4
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the numeric ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let directory_api_url =
            lookup("DIRECTORY_API_URL").unwrap_or_else(default_directory_api_url);
        if directory_api_url.trim().is_empty() {
            return Err(ConfigError::Missing("DIRECTORY_API_URL"));
        }
        if !directory_api_url.starts_with("http://") && !directory_api_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "DIRECTORY_API_URL must be an http(s) URL".into(),
            ));
        }

        let page_size = parse_positive(&lookup, "DIRECTORY_PAGE_SIZE")?
            .unwrap_or_else(default_page_size);
        if page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "DIRECTORY_PAGE_SIZE must not exceed {MAX_PAGE_SIZE}"
            )));
        }

        let timeout_secs = parse_positive(&lookup, "DIRECTORY_TIMEOUT_SECS")?
            .map(u64::from)
            .unwrap_or_else(default_request_timeout);

        let database_max_connections = parse_positive(&lookup, "DATABASE_MAX_CONNECTIONS")?
            .unwrap_or_else(default_max_connections);

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            directory_api_url,
            page_size,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn directory_api_url(&self) -> &str {
        &self.directory_api_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

fn parse_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u32>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(Some(value)),
            _ => Err(ConfigError::Invalid(format!(
                "{key} must be a positive integer, got '{raw}'"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.directory_api_url(), "https://randomuser.me/api/");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.database_max_connections(), 4);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("DIRECTORY_PAGE_SIZE", "25"),
            ("DIRECTORY_API_URL", "http://localhost:9000/api/"),
            ("DATABASE_URL", "sqlite::memory:"),
        ])
        .unwrap();
        assert_eq!(config.page_size(), 25);
        assert_eq!(config.directory_api_url(), "http://localhost:9000/api/");
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn rejects_zero_and_garbage_numbers() {
        assert!(matches!(
            config_from(&[("DIRECTORY_PAGE_SIZE", "0")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("DIRECTORY_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("DIRECTORY_PAGE_SIZE", "100000")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_non_http_directory_url() {
        assert!(matches!(
            config_from(&[("DIRECTORY_API_URL", "ftp://example.com")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("DIRECTORY_API_URL", "  ")]),
            Err(ConfigError::Missing("DIRECTORY_API_URL"))
        ));
    }
}
