//! Build lifecycle events and results

mod execution;

pub use execution::{BuildEvent, BuildException, ExecutionResult, Project};
