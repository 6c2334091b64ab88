//! Screen layout definitions for the TUI
//!
//! Editors sit side by side on wide terminals and stack on narrow ones.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the editors are stacked vertically
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and key hints
    pub header: Rect,

    /// JSON source editor
    pub source: Rect,

    /// Generated code editor
    pub generated: Rect,

    /// One-line status bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (top border + title row + bottom border)
        Constraint::Min(4),    // Editors
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let body = chunks[1];
    let editors = if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(body)
    } else {
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).split(body)
    };

    ScreenAreas {
        header: chunks[0],
        source: editors[0],
        generated: editors[1],
        status: chunks[2],
    }
}
