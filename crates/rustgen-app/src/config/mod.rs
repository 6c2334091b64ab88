//! Configuration file parsing for rustgen
//!
//! Supports:
//! - `<config dir>/rustgen/config.toml` - Global settings
//! - An explicit path given on the command line

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
