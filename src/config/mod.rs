//! Install layout configuration for mcmod.
//!
//! This module defines the Config struct that represents `<root>/mcmod.yaml`.
//! The file is optional: a missing file means every default applies.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};
