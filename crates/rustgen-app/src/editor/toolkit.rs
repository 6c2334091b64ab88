//! Editor toolkit: one-time global configuration shared by every editor.

use std::fmt;
use std::str::FromStr;

use rustgen_core::prelude::*;

use crate::config::EditorSettings;

/// Display themes the text surface knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTheme {
    #[default]
    Monokai,
    Github,
    Plain,
}

impl EditorTheme {
    pub const ALL: [EditorTheme; 3] = [EditorTheme::Monokai, EditorTheme::Github, EditorTheme::Plain];

    pub fn name(&self) -> &'static str {
        match self {
            EditorTheme::Monokai => "monokai",
            EditorTheme::Github => "github",
            EditorTheme::Plain => "plain",
        }
    }
}

impl fmt::Display for EditorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditorTheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        EditorTheme::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| Error::unknown_theme(s))
    }
}

/// Resolved toolkit configuration handed to each new editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolkitConfig {
    pub theme: EditorTheme,
    pub tab_width: usize,
}

/// Global editor toolkit state.
///
/// Configuration runs at most once; later calls return the stored result.
/// A failed configuration is remembered too, so every editor created
/// afterwards reports the same error instead of retrying.
#[derive(Debug)]
pub struct EditorToolkit {
    settings: EditorSettings,
    configured: bool,
    resolved: Option<std::result::Result<ToolkitConfig, String>>,
}

impl EditorToolkit {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            settings,
            configured: false,
            resolved: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Configure the toolkit if that has not happened yet
    pub fn ensure_configured(&mut self) -> Result<ToolkitConfig> {
        if !self.configured {
            self.resolved = Some(self.resolve().map_err(|e| e.to_string()));
            self.configured = true;
            match &self.resolved {
                Some(Ok(config)) => info!(
                    "Editor toolkit configured: theme={}, tab_width={}",
                    config.theme, config.tab_width
                ),
                Some(Err(reason)) => error!("Editor toolkit failed to configure: {}", reason),
                None => {}
            }
        }

        match &self.resolved {
            Some(Ok(config)) => Ok(*config),
            Some(Err(reason)) => Err(Error::editor_toolkit(reason.clone())),
            None => Err(Error::editor_toolkit("toolkit not configured")),
        }
    }

    fn resolve(&self) -> Result<ToolkitConfig> {
        let theme: EditorTheme = self.settings.theme.parse()?;
        if self.settings.tab_width == 0 || self.settings.tab_width > 16 {
            return Err(Error::editor_toolkit(format!(
                "tab_width must be between 1 and 16, got {}",
                self.settings.tab_width
            )));
        }
        Ok(ToolkitConfig {
            theme,
            tab_width: self.settings.tab_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(theme: &str, tab_width: usize) -> EditorSettings {
        EditorSettings {
            theme: theme.to_string(),
            tab_width,
            ..EditorSettings::default()
        }
    }

    #[test]
    fn test_theme_parse_is_case_insensitive() {
        assert_eq!("Monokai".parse::<EditorTheme>().unwrap(), EditorTheme::Monokai);
        assert_eq!(" github ".parse::<EditorTheme>().unwrap(), EditorTheme::Github);
        assert!(matches!(
            "solarized".parse::<EditorTheme>(),
            Err(Error::UnknownTheme { .. })
        ));
    }

    #[test]
    fn test_configure_is_idempotent() {
        let mut toolkit = EditorToolkit::new(settings("plain", 2));
        assert!(!toolkit.is_configured());

        let first = toolkit.ensure_configured().unwrap();
        let second = toolkit.ensure_configured().unwrap();

        assert!(toolkit.is_configured());
        assert_eq!(first, second);
        assert_eq!(first.theme, EditorTheme::Plain);
        assert_eq!(first.tab_width, 2);
    }

    #[test]
    fn test_failed_configuration_is_sticky() {
        let mut toolkit = EditorToolkit::new(settings("solarized", 4));

        let first = toolkit.ensure_configured().unwrap_err();
        let second = toolkit.ensure_configured().unwrap_err();

        assert!(toolkit.is_configured());
        assert!(first.to_string().contains("solarized"));
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_zero_tab_width_rejected() {
        let mut toolkit = EditorToolkit::new(settings("monokai", 0));
        assert!(toolkit.ensure_configured().is_err());
    }
}
