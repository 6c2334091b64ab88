//! Domain types for generation submissions

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default root type name used by the generation service when none is sent
pub const DEFAULT_ROOT_NAME: &str = "Root";

/// Maximum number of body characters kept from a failed response
pub const FAILURE_DETAIL_LIMIT: usize = 400;

/// Monotonically increasing identifier for one press of "generate"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// User-selected generation options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationOptions {
    /// Ask the service to append a test module exercising the generated types
    pub include_tests: bool,

    /// Name of the generated root type (service default when `None`)
    #[serde(default)]
    pub root_name: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_tests: true,
            root_name: None,
        }
    }
}

impl GenerationOptions {
    /// Query pairs sent to the service, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("tests", self.include_tests.to_string())];
        if let Some(root) = self.root_name.as_deref().filter(|r| !r.is_empty()) {
            pairs.push(("root", root.to_string()));
        }
        pairs
    }
}

/// A single request to the generation service, built fresh per submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub submission: SubmissionId,
    /// Raw document text, sent verbatim as the body
    pub source_text: String,
    /// Snapshot of the options at submission time
    pub options: GenerationOptions,
}

/// Why a request to the service did not produce generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    /// HTTP status when the service answered, `None` when no response arrived
    pub status: Option<u16>,
    /// Underlying reason or a bounded snippet of the response body
    pub detail: String,
}

impl TransportFailure {
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::HttpStatus { status, body } => Self {
                status: Some(*status),
                detail: truncate_detail(body),
            },
            Error::Transport { message } => Self {
                status: None,
                detail: message.clone(),
            },
            other => Self {
                status: None,
                detail: other.to_string(),
            },
        }
    }

    /// One-line description used in the status bar and the output pane
    pub fn summary(&self) -> String {
        match self.status {
            Some(status) => format!("HTTP {}", status),
            None => "no response from service".to_string(),
        }
    }
}

fn truncate_detail(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= FAILURE_DETAIL_LIMIT {
        trimmed.to_string()
    } else {
        let mut cut: String = trimmed.chars().take(FAILURE_DETAIL_LIMIT).collect();
        cut.push('…');
        cut
    }
}

/// Final result of a submission, as routed into the output editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success { body: String },
    ValidationFailed { message: String },
    TransportFailed(TransportFailure),
}

impl GenerationOutcome {
    /// Text written into the output editor for this outcome.
    ///
    /// Failures are rendered as line comments so they can never be mistaken
    /// for generated code.
    pub fn display_text(&self) -> String {
        match self {
            GenerationOutcome::Success { body } => body.clone(),
            GenerationOutcome::ValidationFailed { message } => {
                format!("// failed to parse JSON: {}", message)
            }
            GenerationOutcome::TransportFailed(failure) => {
                let mut text = format!("// generation request failed: {}", failure.summary());
                for line in failure.detail.lines().filter(|l| !l.trim().is_empty()) {
                    text.push_str("\n// ");
                    text.push_str(line);
                }
                text
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }
}

/// Lifecycle of the most recent submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    ValidationFailed,
    Requesting {
        submission: SubmissionId,
        started_at: DateTime<Local>,
    },
    Succeeded {
        submission: SubmissionId,
        finished_at: DateTime<Local>,
    },
    Failed {
        submission: SubmissionId,
        finished_at: DateTime<Local>,
    },
}

impl SubmissionPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionPhase::Requesting { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionPhase::ValidationFailed
                | SubmissionPhase::Succeeded { .. }
                | SubmissionPhase::Failed { .. }
        )
    }

    /// Short label for the status bar
    pub fn label(&self) -> String {
        match self {
            SubmissionPhase::Idle => "ready".to_string(),
            SubmissionPhase::Validating => "validating".to_string(),
            SubmissionPhase::ValidationFailed => "invalid JSON".to_string(),
            SubmissionPhase::Requesting { submission, .. } => {
                format!("generating {}", submission)
            }
            SubmissionPhase::Succeeded {
                submission,
                finished_at,
            } => format!(
                "generated {} at {}",
                submission,
                finished_at.format("%H:%M:%S")
            ),
            SubmissionPhase::Failed {
                submission,
                finished_at,
            } => format!("{} failed at {}", submission, finished_at.format("%H:%M:%S")),
        }
    }
}
