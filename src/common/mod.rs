//! Helpers shared by the binary and other drivers of the simulation core.

pub mod config;

pub use config::{ConfigLoadError, load_configuration, parse_configuration};
