// src/infrastructure/remote/random_user.rs
use crate::application::ports::directory_source::{
    RemoteDirectorySource, RemotePageQuery, SourceError,
};
use crate::domain::user::{Lifespan, Location, PersonName, Pictures, UserKey, UserRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

/// randomuser.me-compatible directory over HTTP. One GET per page, no
/// retries.
#[derive(Debug, Clone)]
pub struct HttpDirectorySource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDirectorySource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn query_pairs(query: &RemotePageQuery) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("results", query.results_per_page.to_string()),
        ("page", query.page.to_string()),
    ];
    if let Some(nationality) = &query.nationality {
        pairs.push(("nat", nationality.clone()));
    }
    if let Some(seed) = &query.seed {
        pairs.push(("seed", seed.clone()));
    }
    pairs
}

#[async_trait]
impl RemoteDirectorySource for HttpDirectorySource {
    async fn fetch(&self, query: RemotePageQuery) -> Result<Vec<UserRecord>, SourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&query_pairs(&query))
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        decode_page(&body)
    }
}

/// Decodes one response body into records.
pub fn decode_page(body: &[u8]) -> Result<Vec<UserRecord>, SourceError> {
    let envelope: WireEnvelope =
        serde_json::from_slice(body).map_err(|err| SourceError::Decode(err.to_string()))?;

    // The service reports some failures as `{"error": "..."}` with a 200.
    if let Some(error) = envelope.error {
        return Err(SourceError::Decode(format!("remote reported: {error}")));
    }

    if let Some(info) = &envelope.info {
        tracing::trace!(seed = %info.seed, page = info.page, results = info.results, "decoded directory envelope");
    }

    envelope
        .results
        .into_iter()
        .map(UserRecord::try_from)
        .collect()
}

#[derive(Debug, Deserialize)]
struct WireEnvelope {
    #[serde(default)]
    results: Vec<WireUser>,
    #[serde(default)]
    info: Option<WireInfo>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireInfo {
    seed: String,
    results: u32,
    page: u32,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    #[serde(default)]
    gender: String,
    name: WireName,
    location: WireLocation,
    email: String,
    login: WireLogin,
    dob: WireLifespan,
    registered: WireLifespan,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    cell: String,
    picture: WirePicture,
    nat: String,
}

#[derive(Debug, Deserialize)]
struct WireName {
    #[serde(default)]
    title: String,
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    street: WireStreet,
    city: String,
    state: String,
    country: String,
    postcode: WirePostcode,
    coordinates: WireCoordinates,
    timezone: WireTimezone,
}

#[derive(Debug, Deserialize)]
struct WireStreet {
    number: i64,
    name: String,
}

/// Numeric for some nationalities, alphanumeric for others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WirePostcode {
    Number(i64),
    Text(String),
}

impl From<WirePostcode> for String {
    fn from(value: WirePostcode) -> Self {
        match value {
            WirePostcode::Number(number) => number.to_string(),
            WirePostcode::Text(text) => text,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireCoordinates {
    latitude: String,
    longitude: String,
}

#[derive(Debug, Deserialize)]
struct WireTimezone {
    offset: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct WireLogin {
    uuid: String,
    username: String,
}

#[derive(Debug, Deserialize)]
struct WireLifespan {
    date: DateTime<Utc>,
    age: u32,
}

impl From<WireLifespan> for Lifespan {
    fn from(value: WireLifespan) -> Self {
        Lifespan {
            date: value.date,
            age: value.age,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WirePicture {
    large: String,
    medium: String,
    thumbnail: String,
}

impl TryFrom<WireUser> for UserRecord {
    type Error = SourceError;

    fn try_from(user: WireUser) -> Result<Self, Self::Error> {
        let id = UserKey::new(user.login.uuid)
            .map_err(|err| SourceError::Decode(err.to_string()))?;
        let WireLocation {
            street,
            city,
            state,
            country,
            postcode,
            coordinates,
            timezone,
        } = user.location;

        Ok(UserRecord {
            id,
            username: user.login.username,
            gender: user.gender,
            name: PersonName {
                title: user.name.title,
                first: user.name.first,
                last: user.name.last,
            },
            email: user.email,
            phone: user.phone,
            cell: user.cell,
            location: Location {
                street_number: street.number,
                street_name: street.name,
                city,
                state,
                country,
                postcode: postcode.into(),
                latitude: coordinates.latitude,
                longitude: coordinates.longitude,
                timezone_offset: timezone.offset,
                timezone_description: timezone.description,
            },
            date_of_birth: user.dob.into(),
            registered: user.registered.into(),
            pictures: Pictures {
                large: user.picture.large,
                medium: user.picture.medium,
                thumbnail: user.picture.thumbnail,
            },
            nationality: user.nat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "gender": "male",
                "name": { "title": "Mr", "first": "Test", "last": "User" },
                "location": {
                    "street": { "number": 123, "name": "Test Street" },
                    "city": "Test City",
                    "state": "Test State",
                    "country": "Test Country",
                    "postcode": 12345,
                    "coordinates": { "latitude": "0.0", "longitude": "0.0" },
                    "timezone": { "offset": "+00:00", "description": "GMT" }
                },
                "email": "test@example.com",
                "login": {
                    "uuid": "test-uuid",
                    "username": "testuser",
                    "password": "password",
                    "salt": "salt",
                    "md5": "md5hash",
                    "sha1": "sha1hash",
                    "sha256": "sha256hash"
                },
                "dob": { "date": "1990-01-01T00:00:00.000Z", "age": 33 },
                "registered": { "date": "2020-01-01T00:00:00.000Z", "age": 3 },
                "phone": "123-456-7890",
                "cell": "098-765-4321",
                "id": { "name": "SSN", "value": "123-45-6789" },
                "picture": {
                    "large": "https://example.com/large.jpg",
                    "medium": "https://example.com/medium.jpg",
                    "thumbnail": "https://example.com/thumb.jpg"
                },
                "nat": "US"
            }
        ],
        "info": { "seed": "challenge", "results": 1, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn decodes_records_and_ignores_credentials() {
        let users = decode_page(SAMPLE.as_bytes()).unwrap();
        assert_eq!(users.len(), 1);

        let user = &users[0];
        assert_eq!(user.id.as_str(), "test-uuid");
        assert_eq!(user.full_name(), "Mr Test User");
        assert_eq!(user.location.postcode, "12345");
        assert_eq!(user.location.full_address(), "123 Test Street, Test City, Test State, Test Country");
        assert_eq!(user.date_of_birth.age, 33);
        assert_eq!(user.pictures.large, "https://example.com/large.jpg");
        assert_eq!(user.nationality, "US");
    }

    #[test]
    fn accepts_alphanumeric_postcodes() {
        let body = SAMPLE.replace("\"postcode\": 12345", "\"postcode\": \"EC1A 1BB\"");
        let users = decode_page(body.as_bytes()).unwrap();
        assert_eq!(users[0].location.postcode, "EC1A 1BB");
    }

    #[test]
    fn remote_error_payload_is_a_decode_error() {
        let err = decode_page(br#"{"error":"Uh oh, something has gone wrong."}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(msg) if msg.contains("Uh oh")));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode_page(b"<html>"), Err(SourceError::Decode(_))));
    }

    #[test]
    fn query_includes_filter_and_seed_only_when_present() {
        let unfiltered = RemotePageQuery {
            results_per_page: 10,
            page: 2,
            nationality: None,
            seed: None,
        };
        assert_eq!(
            query_pairs(&unfiltered),
            vec![("results", "10".to_string()), ("page", "2".to_string())]
        );

        let filtered = RemotePageQuery {
            nationality: Some("US".into()),
            seed: Some("challenge-US".into()),
            ..unfiltered
        };
        let pairs = query_pairs(&filtered);
        assert!(pairs.contains(&("nat", "US".to_string())));
        assert!(pairs.contains(&("seed", "challenge-US".to_string())));
    }
}
