//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use rustgen_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "rustgen";

const DEFAULT_CONFIG_CONTENT: &str = r#"# rustgen configuration

[service]
endpoint = "https://rustgen.jyu.workers.dev"
timeout_secs = 30

[generation]
include_tests = true    # Initial state of the "generate tests" toggle
# root_name = "Root"    # Name of the generated root type

[editor]
theme = "monokai"       # monokai, github or plain
source_mode = "json"
output_mode = "rust"
tab_width = 4
"#;

/// Platform location of the user config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `explicit` or the platform config file.
///
/// Missing or unparsable files fall back to defaults; the problem is logged.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let config_path = match explicit.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => {
            debug!("No config directory on this platform, using defaults");
            return Settings::default();
        }
    };

    if !config_path.exists() {
        if explicit.is_some() {
            warn!("Config file {:?} does not exist, using defaults", config_path);
        } else {
            debug!("No config file at {:?}, using defaults", config_path);
        }
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file at `path`.
///
/// An existing file is left untouched.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        info!("Config file {:?} already exists, not overwriting", path);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_CONTENT)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Wrote default config to {:?}", path);
    Ok(true)
}
