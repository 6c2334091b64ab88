//! Custom widget components

mod editor_pane;
mod header;
mod help_overlay;
pub mod modal_overlay;
mod status_bar;

pub use editor_pane::{text_height, EditorPane};
pub use header::MainHeader;
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
