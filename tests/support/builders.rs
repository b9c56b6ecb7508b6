// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use user_directory::domain::user::{
    Lifespan, Location, PersonName, Pictures, UserKey, UserRecord,
};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 15, 12, 0, 0).unwrap()
}

pub struct UserBuilder {
    id: String,
    first: String,
    last: String,
    country: String,
    nationality: String,
}

impl UserBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first: "Test".into(),
            last: "User".into(),
            country: "Test Country".into(),
            nationality: "US".into(),
        }
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first = first.into();
        self.last = last.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    pub fn build(self) -> UserRecord {
        let born = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
        let registered = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        UserRecord {
            username: format!("user-{}", self.id),
            id: UserKey::new(self.id).unwrap(),
            gender: "male".into(),
            name: PersonName {
                title: "Mr".into(),
                first: self.first,
                last: self.last,
            },
            email: "test@example.com".into(),
            phone: "123-456-7890".into(),
            cell: "098-765-4321".into(),
            location: Location {
                street_number: 123,
                street_name: "Test Street".into(),
                city: "Test City".into(),
                state: "Test State".into(),
                country: self.country,
                postcode: "12345".into(),
                latitude: "0.0".into(),
                longitude: "0.0".into(),
                timezone_offset: "+00:00".into(),
                timezone_description: "GMT".into(),
            },
            date_of_birth: Lifespan { date: born, age: 35 },
            registered: Lifespan {
                date: registered,
                age: 5,
            },
            pictures: Pictures {
                large: "https://example.com/large.jpg".into(),
                medium: "https://example.com/medium.jpg".into(),
                thumbnail: "https://example.com/thumb.jpg".into(),
            },
            nationality: self.nationality,
        }
    }
}

pub fn sample_user(id: &str) -> UserRecord {
    UserBuilder::new(id).build()
}

pub fn ids(users: &[Arc<UserRecord>]) -> Vec<String> {
    users.iter().map(|user| user.id.to_string()).collect()
}
