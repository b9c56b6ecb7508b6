// src/domain/user/mod.rs
pub mod entity;
pub mod value_objects;

pub use entity::UserRecord;
pub use value_objects::{Lifespan, Location, PersonName, Pictures, UserKey};
