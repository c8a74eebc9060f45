//! build-notifier - desktop notifications for build results
//!
//! This crate picks one notification backend per build and forwards the
//! build's final result to it.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Configuration, build events, the execution context, and errors
//! - **Application**: Notifier selection, the dispatcher, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-send, notify-rust, XDG config)
//! - **CLI**: Command-line interface that runs a build and hosts the dispatcher

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
