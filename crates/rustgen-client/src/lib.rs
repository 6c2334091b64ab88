//! rustgen-client - Generation service client for rustgen
//!
//! Builds `/schema` request URLs from the configured endpoint and posts source
//! documents to the service.

pub mod client;
pub mod endpoint;

pub use client::{
    GenerationService, HttpGenerationClient, LocalGenerationService, DEFAULT_TIMEOUT,
};
pub use endpoint::{schema_url, with_options, SCHEMA_PATH};
