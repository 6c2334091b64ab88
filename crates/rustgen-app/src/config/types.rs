//! Configuration types for rustgen
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-sections for the service, generation defaults and editors

use std::time::Duration;

use rustgen_core::prelude::*;
use rustgen_core::GenerationOptions;
use serde::{Deserialize, Serialize};

/// Generation service used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://rustgen.jyu.workers.dev";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub generation: GenerationSettings,

    #[serde(default)]
    pub editor: EditorSettings,
}

impl Settings {
    /// Initial generation options derived from the `[generation]` section
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            include_tests: self.generation.include_tests,
            root_name: self
                .generation
                .root_name
                .clone()
                .filter(|name| !name.trim().is_empty()),
        }
    }
}

/// Generation service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Base URL of the service; requests go to `<endpoint>/schema`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout in seconds; 0 falls back to the default
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServiceSettings {
    /// Request timeout to hand to the client
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            warn!(
                "timeout_secs = 0 would fail every request, using {}s",
                default_timeout_secs()
            );
            return Duration::from_secs(default_timeout_secs());
        }
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Defaults for the generation options
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSettings {
    /// Initial state of the "generate tests" toggle
    #[serde(default = "default_true")]
    pub include_tests: bool,

    /// Root type name sent as `root=`; service default when unset
    #[serde(default)]
    pub root_name: Option<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            include_tests: true,
            root_name: None,
        }
    }
}

/// Editor surface settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Display theme name (`monokai`, `github`, `plain`)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Language mode of the source editor
    #[serde(default = "default_source_mode")]
    pub source_mode: String,

    /// Language mode of the generated-output editor
    #[serde(default = "default_output_mode")]
    pub output_mode: String,

    /// Spaces inserted for a tab character
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            source_mode: default_source_mode(),
            output_mode: default_output_mode(),
            tab_width: default_tab_width(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "monokai".to_string()
}

fn default_source_mode() -> String {
    "json".to_string()
}

fn default_output_mode() -> String {
    "rust".to_string()
}

fn default_tab_width() -> usize {
    4
}
