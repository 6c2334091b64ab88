//! rustgen - terminal client that turns JSON documents into Rust types
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use rustgen::cli::Args;
use rustgen_app::config::{self, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(target) = &args.init_config {
        let path = match target.clone().or_else(config::default_config_path) {
            Some(path) => path,
            None => color_eyre::eyre::bail!("No config directory on this platform, pass a path"),
        };
        if config::init_config_file(&path)? {
            eprintln!("Wrote default config to {}", path.display());
        } else {
            eprintln!("Config file {} already exists", path.display());
        }
        return Ok(());
    }

    rustgen_core::logging::init()?;

    let mut settings: Settings = config::load_settings(args.config.as_deref());
    args.apply_overrides(&mut settings);
    info!("Using endpoint {}", settings.service.endpoint);

    if args.headless {
        if !rustgen::run_headless(&settings, args.input_path()).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    let source = match args.input_path() {
        Some(path) => Some(rustgen::headless::read_source(Some(path))?),
        None if args.path.is_some() => {
            color_eyre::eyre::bail!("Reading the document from stdin requires --headless")
        }
        None => None,
    };

    rustgen::run(settings, source).await?;
    Ok(())
}
