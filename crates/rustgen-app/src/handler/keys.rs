//! Key event handlers for different UI modes

use crate::editor::EditorCommand;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Normal => handle_key_normal(key),
        UiMode::Help => handle_key_help(key),
    }
}

/// Handle key events while the help overlay is open
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') | InputKey::Enter => Some(Message::CloseHelp),
        key if key.is_force_quit() => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        key if key.is_force_quit() => Some(Message::Quit),

        // Generation
        InputKey::CharCtrl('g') | InputKey::F(5) => Some(Message::Generate),
        InputKey::CharCtrl('t') => Some(Message::ToggleIncludeTests),

        // Help
        InputKey::F(1) | InputKey::CharCtrl('o') => Some(Message::OpenHelp),

        InputKey::Tab | InputKey::BackTab => Some(Message::FocusNext),

        // Editing
        InputKey::CharCtrl('u') => Some(Message::Edit(EditorCommand::Clear)),
        InputKey::Char(c) => Some(Message::Edit(EditorCommand::Insert(c))),
        InputKey::Enter => Some(Message::Edit(EditorCommand::Newline)),
        InputKey::Backspace => Some(Message::Edit(EditorCommand::Backspace)),
        InputKey::Delete => Some(Message::Edit(EditorCommand::Delete)),

        // Navigation
        InputKey::Left => Some(Message::Edit(EditorCommand::Left)),
        InputKey::Right => Some(Message::Edit(EditorCommand::Right)),
        InputKey::Up => Some(Message::Edit(EditorCommand::Up)),
        InputKey::Down => Some(Message::Edit(EditorCommand::Down)),
        InputKey::Home => Some(Message::Edit(EditorCommand::Home)),
        InputKey::End => Some(Message::Edit(EditorCommand::End)),
        InputKey::PageUp => Some(Message::Edit(EditorCommand::PageUp)),
        InputKey::PageDown => Some(Message::Edit(EditorCommand::PageDown)),

        _ => None,
    }
}
