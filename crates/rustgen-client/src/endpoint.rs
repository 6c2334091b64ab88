//! Service endpoint parsing and request URL construction

use rustgen_core::prelude::*;
use rustgen_core::GenerationOptions;
use url::Url;

/// Path of the generation route, relative to the service base URL
pub const SCHEMA_PATH: &str = "schema";

/// Resolve the `/schema` route from a configured service base URL.
///
/// Only `http` and `https` are accepted. A base with a path prefix keeps it,
/// so `https://host/api` resolves to `https://host/api/schema`.
pub fn schema_url(base: &str) -> Result<Url> {
    let trimmed = base.trim();
    let mut url =
        Url::parse(trimmed).map_err(|e| Error::invalid_endpoint(trimmed, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_endpoint(
            trimmed,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    url.join(SCHEMA_PATH)
        .map_err(|e| Error::invalid_endpoint(trimmed, e.to_string()))
}

/// Attach the generation options as query parameters.
///
/// Any query already on `schema` is replaced.
pub fn with_options(schema: &Url, options: &GenerationOptions) -> Url {
    let mut url = schema.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(options.query_pairs());
    url
}
