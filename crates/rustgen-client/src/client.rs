//! Generation service client
//!
//! The [`GenerationService`] trait is the seam between the application's
//! action layer and the remote service. [`HttpGenerationClient`] is the real
//! implementation; tests substitute their own.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use rustgen_core::prelude::*;
use rustgen_core::GenerationRequest;
use url::Url;

use crate::endpoint;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("rustgen/", env!("CARGO_PKG_VERSION"));

/// Turns a source document into generated code.
#[trait_variant::make(GenerationService: Send)]
pub trait LocalGenerationService {
    /// Send one request and return the full response body.
    ///
    /// Exactly one HTTP request is issued per call; failures are returned,
    /// never retried.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// HTTP implementation posting to `<endpoint>/schema`
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    http: Client,
    schema: Url,
    timeout: Duration,
}

impl HttpGenerationClient {
    /// Create a client for the service at `endpoint`
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let schema = endpoint::schema_url(endpoint)?;

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            schema,
            timeout,
        })
    }

    /// Resolved `/schema` URL without options
    pub fn schema_url(&self) -> &Url {
        &self.schema
    }

    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {:?}", self.timeout)
        } else if err.is_connect() {
            format!("could not connect to {}: {}", self.schema, err)
        } else {
            err.to_string()
        }
    }
}

impl GenerationService for HttpGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = endpoint::with_options(&self.schema, &request.options);
        debug!(
            "POST {} for submission {} ({} bytes)",
            url,
            request.submission,
            request.source_text.len()
        );

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(request.source_text.clone())
            .send()
            .await
            .map_err(|e| Error::transport(self.describe(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            warn!(
                "Submission {} rejected with HTTP {}",
                request.submission,
                status.as_u16()
            );
            return Err(Error::http_status(status.as_u16(), body));
        }

        info!(
            "Submission {} generated {} bytes",
            request.submission,
            body.len()
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resolves_schema_url() {
        let client = HttpGenerationClient::new("https://example.com", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.schema_url().as_str(), "https://example.com/schema");
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let err = HttpGenerationClient::new("file:///tmp/x", DEFAULT_TIMEOUT).unwrap_err();
        assert!(err.is_fatal());
    }
}
