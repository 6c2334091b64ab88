//! rustgen-tui - Terminal UI for rustgen
//!
//! Hosts the two editors, the status bar and the help overlay on top of the
//! state machine in rustgen-app, and drives it from crossterm events.

pub mod event;
pub mod highlight;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
