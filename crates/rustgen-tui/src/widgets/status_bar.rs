//! Status bar widget
//!
//! Displays the submission phase, the generation options and the endpoint.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rustgen_app::state::AppState;
use rustgen_core::DEFAULT_ROOT_NAME;

use crate::theme::{palette, styles};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase_indicator(&self) -> Span<'static> {
        let phase = self.state.phase();
        let (icon, style) = styles::phase_indicator(&phase, self.state.spinner_frame);
        Span::styled(format!("{} {}", icon, phase.label()), style)
    }

    fn tests_flag(&self) -> Span<'static> {
        if self.state.options.include_tests {
            Span::styled("tests on", Style::default().fg(palette::STATUS_GREEN))
        } else {
            Span::styled("tests off", styles::text_muted())
        }
    }

    fn root_name(&self) -> Span<'static> {
        match self.state.options.root_name.as_deref() {
            Some(name) => Span::styled(format!("root {}", name), styles::text_secondary()),
            None => Span::styled(format!("root {}", DEFAULT_ROOT_NAME), styles::text_muted()),
        }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::text_muted());

        vec![
            Span::raw(" "),
            self.phase_indicator(),
            separator.clone(),
            self.tests_flag(),
            separator.clone(),
            self.root_name(),
            separator,
            Span::styled(self.state.settings.service.endpoint.clone(), styles::accent()),
        ]
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.build_segments()))
            .style(Style::default().bg(palette::CARD_BG))
            .render(area, buf);
    }
}
