//! Message types for the application (TEA pattern)

use rustgen_core::{SubmissionId, TransportFailure};

use crate::editor::EditorCommand;
use crate::input_key::InputKey;
use crate::signals::ShutdownSignal;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste into the focused editor
    Paste(String),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit immediately
    Quit,

    /// Termination signal from the OS
    Shutdown(ShutdownSignal),

    // ─────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────
    /// Validate the source editor and, if valid, request generation
    Generate,

    /// Flip the "generate tests" option
    ToggleIncludeTests,

    /// Set the "generate tests" option explicitly
    SetIncludeTests(bool),

    /// Service returned generated code
    GenerationSucceeded {
        submission: SubmissionId,
        body: String,
    },

    /// Request failed: no response or non-2xx status
    GenerationFailed {
        submission: SubmissionId,
        failure: TransportFailure,
    },

    // ─────────────────────────────────────────────────────────
    // Help Overlay
    // ─────────────────────────────────────────────────────────
    OpenHelp,
    CloseHelp,

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────
    /// Move focus to the other editor
    FocusNext,

    /// Apply a command to the focused editor
    Edit(EditorCommand),
}
