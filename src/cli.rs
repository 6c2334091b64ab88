//! Command-line arguments

use std::path::{Path, PathBuf};

use clap::Parser;
use rustgen_app::config::Settings;

/// Argument meaning "read the document from stdin"
pub const STDIN_ARG: &str = "-";

/// rustgen - turn JSON documents into Rust type definitions
#[derive(Parser, Debug)]
#[command(name = "rustgen")]
#[command(about = "Turn JSON documents into Rust type definitions", long_about = None)]
pub struct Args {
    /// JSON document to load (`-` reads stdin in headless mode)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Base URL of the generation service
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Name of the generated root type
    #[arg(long, value_name = "NAME")]
    pub root: Option<String>,

    /// Ask the service to generate tests
    #[arg(long, overrides_with = "no_tests")]
    pub tests: bool,

    /// Do not generate tests
    #[arg(long = "no-tests", overrides_with = "tests")]
    pub no_tests: bool,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Generate once and print to stdout, no TUI
    #[arg(long)]
    pub headless: bool,

    /// Write a default config file (to PATH or the platform default) and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub init_config: Option<Option<PathBuf>>,
}

impl Args {
    /// Apply command-line overrides on top of file settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.service.endpoint = endpoint.clone();
        }
        if let Some(root) = &self.root {
            settings.generation.root_name = Some(root.clone());
        }
        if self.tests {
            settings.generation.include_tests = true;
        } else if self.no_tests {
            settings.generation.include_tests = false;
        }
    }

    /// Input document path, `None` for stdin
    pub fn input_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|path| path.as_os_str() != STDIN_ARG)
    }

    pub fn reads_stdin(&self) -> bool {
        self.path.is_none() || self.input_path().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rustgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args_keeps_settings() {
        let args = parse(&[]);
        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);

        assert_eq!(settings, Settings::default());
        assert!(args.reads_stdin());
        assert!(!args.headless);
    }

    #[test]
    fn test_overrides_applied() {
        let args = parse(&[
            "--endpoint",
            "http://127.0.0.1:8787",
            "--root",
            "Meta",
            "--no-tests",
        ]);
        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);

        assert_eq!(settings.service.endpoint, "http://127.0.0.1:8787");
        assert_eq!(settings.generation.root_name.as_deref(), Some("Meta"));
        assert!(!settings.generation.include_tests);
    }

    #[test]
    fn test_last_tests_flag_wins() {
        let args = parse(&["--no-tests", "--tests"]);
        let mut settings = Settings::default();
        settings.generation.include_tests = false;
        args.apply_overrides(&mut settings);

        assert!(settings.generation.include_tests);
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = parse(&["--headless", "-"]);
        assert!(args.headless);
        assert!(args.reads_stdin());
        assert_eq!(args.input_path(), None);
    }

    #[test]
    fn test_file_path() {
        let args = parse(&["input.json"]);
        assert!(!args.reads_stdin());
        assert_eq!(args.input_path(), Some(Path::new("input.json")));
    }

    #[test]
    fn test_init_config_optional_value() {
        assert_eq!(parse(&["--init-config"]).init_config, Some(None));
        assert_eq!(
            parse(&["--init-config", "/tmp/rustgen.toml"]).init_config,
            Some(Some(PathBuf::from("/tmp/rustgen.toml")))
        );
        assert_eq!(parse(&[]).init_config, None);
    }
}
