//! Configuration infrastructure module

mod xdg;

pub use xdg::{XdgConfigurationParser, IMPLEMENTATION_ENV};
