//! Headless mode - one generation, no TUI
//!
//! Reads a document, runs it through the same validation gate and client as
//! the TUI, and prints the generated code to stdout. Failures print the same
//! diagnostic the output editor would show to stderr.

use std::io::{Read, Write};
use std::path::Path;

use rustgen_app::config::Settings;
use rustgen_client::{GenerationService, HttpGenerationClient};
use rustgen_core::prelude::*;
use rustgen_core::{
    validate, GenerationOutcome, GenerationRequest, SubmissionId, TransportFailure,
};

/// Run one generation against the configured service.
///
/// Returns `Ok(false)` when the document was rejected or the request failed;
/// the diagnostic has already been written to stderr.
pub async fn run_headless(settings: &Settings, input: Option<&Path>) -> Result<bool> {
    let source = read_source(input)?;
    let client = HttpGenerationClient::new(&settings.service.endpoint, settings.service.timeout())?;

    let outcome = generate(&client, settings, source).await;
    write_outcome(&outcome, &mut std::io::stdout(), &mut std::io::stderr())
}

/// Read the document from `input`, or stdin when `None`
pub fn read_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::input(path.display().to_string(), e)),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read document from stdin")?;
            Ok(source)
        }
    }
}

/// Validate and, if well-formed, send `source` to `service`
pub async fn generate<S>(service: &S, settings: &Settings, source: String) -> GenerationOutcome
where
    S: GenerationService + Sync,
{
    if let Err(e) = validate(&source) {
        warn!("Document rejected: {}", e);
        return GenerationOutcome::ValidationFailed {
            message: e.to_string(),
        };
    }

    let request = GenerationRequest {
        submission: SubmissionId(1),
        source_text: source,
        options: settings.generation_options(),
    };

    match service.generate(&request).await {
        Ok(body) => GenerationOutcome::Success { body },
        Err(e) => {
            error!("Generation failed: {}", e);
            GenerationOutcome::TransportFailed(TransportFailure::from_error(&e))
        }
    }
}

/// Print the outcome: body to `out` on success, diagnostic to `err` otherwise
pub fn write_outcome<O, E>(outcome: &GenerationOutcome, out: &mut O, err: &mut E) -> Result<bool>
where
    O: Write,
    E: Write,
{
    let text = outcome.display_text();
    let target: &mut dyn Write = if outcome.is_success() { out } else { err };

    target.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        target.write_all(b"\n")?;
    }
    target.flush()?;

    Ok(outcome.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_outcome_success_goes_to_stdout() {
        let outcome = GenerationOutcome::Success {
            body: "pub struct Root {}\n".to_string(),
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());

        assert!(write_outcome(&outcome, &mut out, &mut err).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "pub struct Root {}\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_write_outcome_failure_goes_to_stderr() {
        let outcome = GenerationOutcome::ValidationFailed {
            message: "EOF while parsing a value at line 1 column 0".to_string(),
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());

        assert!(!write_outcome(&outcome, &mut out, &mut err).unwrap());
        assert!(out.is_empty());
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("// failed to parse JSON"));
        assert!(err.ends_with('\n'));
    }

    #[test]
    fn test_read_source_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_source(Some(&path)).unwrap_err();

        assert!(matches!(err, Error::Input { .. }), "got {err:?}");
        assert!(err.to_string().contains("missing.json"));
        assert!(!err.to_string().contains("Configuration"));
    }

    #[test]
    fn test_read_source_keeps_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(&path, "{\r\n\t\"a\": 1\r\n}").unwrap();

        assert_eq!(read_source(Some(&path)).unwrap(), "{\r\n\t\"a\": 1\r\n}");
    }
}
