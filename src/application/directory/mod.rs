// src/application/directory/mod.rs
pub mod machine;
pub mod transitions;

pub use machine::DirectoryStateMachine;
pub use transitions::{DirectoryCore, DirectoryPhase, Intent, Rejection, Transition};
