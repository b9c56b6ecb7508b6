// src/domain/user/entity.rs
use super::value_objects::{Lifespan, Location, PersonName, Pictures, UserKey};
use serde::{Deserialize, Serialize};

/// A directory record as fetched from the remote source. Never mutated after
/// construction; shared behind `Arc` between the displayed page and the
/// detail cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserKey,
    pub username: String,
    pub gender: String,
    pub name: PersonName,
    pub email: String,
    pub phone: String,
    pub cell: String,
    pub location: Location,
    pub date_of_birth: Lifespan,
    pub registered: Lifespan,
    pub pictures: Pictures,
    pub nationality: String,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        self.name.full_name()
    }
}
