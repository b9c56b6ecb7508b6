// src/application/ports/mod.rs
pub mod directory_source;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type DirectorySourcePort = dyn directory_source::RemoteDirectorySource;
pub type ClockPort = dyn time::Clock;
