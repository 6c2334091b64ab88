//! Main update function - handles state transitions (TEA pattern)

use rustgen_core::prelude::*;
use rustgen_core::{validate, GenerationOutcome, GenerationRequest, SubmissionPhase};

use crate::editor::EditorCommand;
use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Shutdown(signal) => {
            match state.phase() {
                SubmissionPhase::Requesting { submission, .. } => {
                    warn!("{} received, abandoning submission {}", signal, submission)
                }
                _ => info!("{} received, shutting down", signal),
            }
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => {
            if state.ui_mode() == UiMode::Normal {
                let focus = state.focus;
                if let Some(editor) = state.editors.get_mut(focus) {
                    if !editor.insert_str(&text) {
                        trace!("Paste into {} ignored", focus);
                    }
                }
            }
            UpdateResult::none()
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Generation Messages
        // ─────────────────────────────────────────────────────────
        Message::Generate => handle_generate(state),

        Message::ToggleIncludeTests => {
            state.options.include_tests = !state.options.include_tests;
            debug!("include_tests = {}", state.options.include_tests);
            UpdateResult::none()
        }

        Message::SetIncludeTests(value) => {
            state.options.include_tests = value;
            UpdateResult::none()
        }

        Message::GenerationSucceeded { submission, body } => {
            if !state.submissions.finish(submission, true) {
                debug!("Discarding stale result for submission {}", submission);
                return UpdateResult::none();
            }
            info!("Submission {} succeeded ({} bytes)", submission, body.len());
            state.show_outcome(&GenerationOutcome::Success { body });
            UpdateResult::none()
        }

        Message::GenerationFailed {
            submission,
            failure,
        } => {
            if !state.submissions.finish(submission, false) {
                debug!("Discarding stale failure for submission {}", submission);
                return UpdateResult::none();
            }
            error!(
                "Submission {} failed: {} ({})",
                submission,
                failure.summary(),
                failure.detail
            );
            state.show_outcome(&GenerationOutcome::TransportFailed(failure));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Help Overlay Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenHelp => {
            state.help.open();
            UpdateResult::none()
        }

        Message::CloseHelp => {
            state.help.close();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editing Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.other();
            UpdateResult::none()
        }

        Message::Edit(command) => {
            handle_edit(state, &command);
            UpdateResult::none()
        }
    }
}

/// Validate the source text, then either show the diagnostic or issue a request
fn handle_generate(state: &mut AppState) -> UpdateResult {
    let Some(source_text) = state.source_text() else {
        warn!("Generate requested but the source editor is unavailable");
        return UpdateResult::none();
    };

    let submission = state.submissions.begin();

    if let Err(e) = validate(&source_text) {
        warn!("Submission {} rejected: {}", submission, e);
        state.submissions.validation_failed();
        state.show_outcome(&GenerationOutcome::ValidationFailed {
            message: e.to_string(),
        });
        return UpdateResult::none();
    }

    state.submissions.requesting(submission);
    info!(
        "Submission {} requesting generation (tests={})",
        submission, state.options.include_tests
    );

    UpdateResult::action(UpdateAction::Generate {
        request: GenerationRequest {
            submission,
            source_text,
            options: state.options.clone(),
        },
    })
}

fn handle_edit(state: &mut AppState, command: &EditorCommand) {
    let focus = state.focus;
    match state.editors.get_mut(focus) {
        Some(editor) => {
            if !editor.apply(command) {
                trace!("{:?} had no effect on the {} editor", command, focus);
            }
        }
        None => trace!("No editor mounted at {}", focus),
    }
}
