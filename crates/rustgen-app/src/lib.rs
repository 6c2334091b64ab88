//! rustgen-app - Application state and orchestration for rustgen
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dual-editor view: messages, state, update handlers, the editor registry,
//! the help overlay, submission tracking and configuration loading.

pub mod actions;
pub mod config;
pub mod editor;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod overlay;
pub mod process;
pub mod signals;
pub mod state;
pub mod submission;

// Re-export primary types
pub use editor::{EditorInstance, EditorRegistry, MountPoint};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
