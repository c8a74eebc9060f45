//! Domain layer - Core value objects
//!
//! Contains configuration, build events, the shared execution context,
//! and domain errors. This layer has no dependencies on external systems.

pub mod build;
pub mod config;
pub mod context;
pub mod error;

// Re-export common types
pub use build::{BuildEvent, BuildException, ExecutionResult, Project};
pub use config::{Configuration, NotifierFileConfig};
pub use context::ExecutionContext;
pub use error::*;
