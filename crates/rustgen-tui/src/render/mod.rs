//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use rustgen_app::editor::MountPoint;
use rustgen_app::state::{AppState, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only editor scroll offsets are mutated, so the cursor stays visible.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.options.include_tests),
        areas.header,
    );

    let normal_mode = state.ui_mode() == UiMode::Normal;
    for (mount, pane_area) in [
        (MountPoint::Source, areas.source),
        (MountPoint::Generated, areas.generated),
    ] {
        if let Some(editor) = state.editors.get_mut(mount) {
            editor.scroll_to_cursor(widgets::text_height(pane_area));
        }

        let pane = widgets::EditorPane::new(
            mount,
            state.editors.get(mount),
            state.editors.failure(mount),
        )
        .focused(state.focus == mount);

        if normal_mode {
            if let Some(position) = pane.cursor_position(pane_area) {
                frame.set_cursor_position(position);
            }
        }
        frame.render_widget(pane, pane_area);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if state.ui_mode() == UiMode::Help {
        let recipes = state.curl_recipes();
        frame.render_widget(widgets::HelpOverlay::new(&recipes), area);
    }
}
