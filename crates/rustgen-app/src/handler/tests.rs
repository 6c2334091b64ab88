//! Tests for handler module

use super::*;
use crate::editor::{CursorHint, EditorCommand, MountPoint};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::signals::ShutdownSignal;
use crate::state::{AppState, UiMode, OUTPUT_PLACEHOLDER};
use rustgen_core::{GenerationRequest, SubmissionId, SubmissionPhase, TransportFailure};

fn set_source(state: &mut AppState, text: &str) {
    state
        .editors
        .get_mut(MountPoint::Source)
        .unwrap()
        .set_text(text, Some(CursorHint::End));
}

/// Run `Generate` and return the request it produced, if any
fn generate(state: &mut AppState) -> Option<GenerationRequest> {
    match update(state, Message::Generate).action {
        Some(UpdateAction::Generate { request }) => Some(request),
        None => None,
    }
}

/// Apply a message and every follow-up it produces
fn drive(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn output(state: &AppState) -> String {
    state.output_text().unwrap()
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::new();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_shutdown_signal_quits() {
    let mut state = AppState::new();

    update(&mut state, Message::Shutdown(ShutdownSignal::Terminate));

    assert!(state.should_quit());
}

#[test]
fn test_shutdown_signal_abandons_in_flight_request() {
    let mut state = AppState::new();
    assert!(generate(&mut state).is_some());
    assert!(state.phase().is_in_flight());

    update(&mut state, Message::Shutdown(ShutdownSignal::Interrupt));

    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_and_ctrl_q_quit() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_plain_q_types_into_editor() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Edit(EditorCommand::Insert('q')))
    ));
}

// ─────────────────────────────────────────────────────────
// Generation
// ─────────────────────────────────────────────────────────

#[test]
fn test_generate_keys() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('g')),
        Some(Message::Generate)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::F(5)),
        Some(Message::Generate)
    ));
}

#[test]
fn test_key_message_is_followed_up() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::CharCtrl('g')));
    assert!(matches!(result.message, Some(Message::Generate)));
    assert!(result.action.is_none());
}

#[test]
fn test_valid_source_issues_request_with_verbatim_body() {
    let mut state = AppState::new();
    set_source(&mut state, "{\"hello\":\"world\"}");
    update(&mut state, Message::SetIncludeTests(false));

    let request = generate(&mut state).expect("request issued");

    assert_eq!(request.source_text, "{\"hello\":\"world\"}");
    assert!(!request.options.include_tests);
    assert_eq!(request.submission, SubmissionId(1));
    assert!(state.phase().is_in_flight());
}

#[test]
fn test_invalid_source_sends_nothing_and_shows_diagnostic() {
    let mut state = AppState::new();
    set_source(&mut state, "not json");

    assert!(generate(&mut state).is_none());

    let text = output(&state);
    assert!(text.starts_with("// failed to parse JSON: "));
    assert!(text.contains("line 1 column"));
    assert_eq!(state.phase(), SubmissionPhase::ValidationFailed);
}

#[test]
fn test_empty_source_is_invalid() {
    let mut state = AppState::new();
    set_source(&mut state, "");

    assert!(generate(&mut state).is_none());
    assert!(output(&state).contains("failed to parse JSON"));
}

#[test]
fn test_toggle_tests_changes_next_request_only() {
    let mut state = AppState::new();
    assert!(state.options.include_tests);

    let in_flight = generate(&mut state).unwrap();
    let result = update(&mut state, Message::ToggleIncludeTests);
    assert!(result.action.is_none());
    let next = generate(&mut state).unwrap();

    assert!(in_flight.options.include_tests);
    assert!(!next.options.include_tests);
}

#[test]
fn test_ctrl_t_produces_toggle() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('t')),
        Some(Message::ToggleIncludeTests)
    ));
}

#[test]
fn test_success_replaces_output_exactly() {
    let mut state = AppState::new();
    let request = generate(&mut state).unwrap();

    update(
        &mut state,
        Message::GenerationSucceeded {
            submission: request.submission,
            body: "struct Root { hello: String }".to_string(),
        },
    );

    assert_eq!(output(&state), "struct Root { hello: String }");
    assert!(matches!(state.phase(), SubmissionPhase::Succeeded { .. }));
}

#[test]
fn test_http_failure_is_distinct_from_validation_failure() {
    let mut state = AppState::new();
    let request = generate(&mut state).unwrap();

    update(
        &mut state,
        Message::GenerationFailed {
            submission: request.submission,
            failure: TransportFailure {
                status: Some(500),
                detail: "Internal Server Error".to_string(),
            },
        },
    );

    let text = output(&state);
    assert!(text.starts_with("// generation request failed: HTTP 500"));
    assert!(text.contains("// Internal Server Error"));
    assert!(!text.contains("failed to parse JSON"));
    assert!(matches!(state.phase(), SubmissionPhase::Failed { .. }));
}

#[test]
fn test_stale_completion_is_discarded() {
    let mut state = AppState::new();
    let first = generate(&mut state).unwrap();
    let second = generate(&mut state).unwrap();
    assert!(second.submission > first.submission);

    update(
        &mut state,
        Message::GenerationSucceeded {
            submission: first.submission,
            body: "old".to_string(),
        },
    );
    assert_eq!(output(&state), OUTPUT_PLACEHOLDER);
    assert!(state.phase().is_in_flight());

    update(
        &mut state,
        Message::GenerationSucceeded {
            submission: second.submission,
            body: "new".to_string(),
        },
    );
    assert_eq!(output(&state), "new");
}

#[test]
fn test_validation_failure_supersedes_in_flight_request() {
    let mut state = AppState::new();
    let pending = generate(&mut state).unwrap();

    set_source(&mut state, "{");
    assert!(generate(&mut state).is_none());
    let diagnostic = output(&state);

    update(
        &mut state,
        Message::GenerationSucceeded {
            submission: pending.submission,
            body: "late".to_string(),
        },
    );

    assert_eq!(output(&state), diagnostic);
    assert_eq!(state.phase(), SubmissionPhase::ValidationFailed);
}

#[test]
fn test_tick_advances_spinner_only_while_requesting() {
    let mut state = AppState::new();
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 0);

    generate(&mut state).unwrap();
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 2);
}

// ─────────────────────────────────────────────────────────
// Help Overlay
// ─────────────────────────────────────────────────────────

#[test]
fn test_help_keys_open_overlay() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::F(1)),
        Some(Message::OpenHelp)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('o')),
        Some(Message::OpenHelp)
    ));
}

#[test]
fn test_open_help_twice_stays_open() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenHelp);
    update(&mut state, Message::OpenHelp);
    assert_eq!(state.ui_mode(), UiMode::Help);

    update(&mut state, Message::CloseHelp);
    update(&mut state, Message::CloseHelp);
    assert_eq!(state.ui_mode(), UiMode::Normal);
}

#[test]
fn test_help_mode_close_keys() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenHelp);

    for key in [InputKey::Esc, InputKey::Char('q'), InputKey::Enter] {
        assert!(matches!(
            handle_key(&state, key),
            Some(Message::CloseHelp)
        ));
    }
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_help_mode_swallows_other_keys() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenHelp);

    assert!(handle_key(&state, InputKey::Char('x')).is_none());
    assert!(handle_key(&state, InputKey::CharCtrl('g')).is_none());
    assert!(handle_key(&state, InputKey::Tab).is_none());
}

#[test]
fn test_paste_ignored_while_help_open() {
    let mut state = AppState::new();
    set_source(&mut state, "");
    update(&mut state, Message::OpenHelp);

    update(&mut state, Message::Paste("[1]".to_string()));

    assert_eq!(state.source_text().as_deref(), Some(""));
}

// ─────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_edits_focused_source() {
    let mut state = AppState::new();
    set_source(&mut state, "");

    for key in [
        InputKey::Char('['),
        InputKey::Char(']'),
        InputKey::Left,
        InputKey::Enter,
    ] {
        drive(&mut state, Message::Key(key));
    }

    assert_eq!(state.source_text().as_deref(), Some("[\n]"));
}

#[test]
fn test_paste_inserts_into_source() {
    let mut state = AppState::new();
    set_source(&mut state, "");

    update(&mut state, Message::Paste("{\r\n  \"a\": 1\r\n}".to_string()));

    assert_eq!(state.source_text().as_deref(), Some("{\n  \"a\": 1\n}"));
}

#[test]
fn test_pasted_tab_indented_document_is_sent_verbatim() {
    let mut state = AppState::new();
    set_source(&mut state, "");
    let pasted = "{\n\t\"a\": 1\n}";

    update(&mut state, Message::Paste(pasted.to_string()));
    let request = generate(&mut state).expect("valid paste should produce a request");

    assert_eq!(request.source_text, pasted);
}

#[test]
fn test_focus_cycles_between_editors() {
    let mut state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Tab),
        Some(Message::FocusNext)
    ));

    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, MountPoint::Generated);
    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, MountPoint::Source);
}

#[test]
fn test_generated_editor_rejects_edits() {
    let mut state = AppState::new();
    update(&mut state, Message::FocusNext);

    update(&mut state, Message::Edit(EditorCommand::Insert('x')));
    update(&mut state, Message::Paste("pasted".to_string()));
    update(&mut state, Message::Edit(EditorCommand::Clear));

    assert_eq!(output(&state), OUTPUT_PLACEHOLDER);
}

#[test]
fn test_ctrl_u_clears_source() {
    let mut state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('u')),
        Some(Message::Edit(EditorCommand::Clear))
    ));
    update(&mut state, Message::Edit(EditorCommand::Clear));
    assert_eq!(state.source_text().as_deref(), Some(""));
}
