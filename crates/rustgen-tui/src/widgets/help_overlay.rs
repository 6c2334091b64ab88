//! Help overlay listing `curl` recipes for the configured endpoint

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use rustgen_app::overlay::CurlRecipe;
use unicode_width::UnicodeWidthStr;

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::theme::styles;

const MIN_WIDTH: u16 = 40;

pub struct HelpOverlay<'a> {
    recipes: &'a [CurlRecipe],
}

impl<'a> HelpOverlay<'a> {
    pub fn new(recipes: &'a [CurlRecipe]) -> Self {
        Self { recipes }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("use ", styles::text_secondary()),
            Span::styled("curl", styles::accent()),
            Span::styled(" to generate schema without this client", styles::text_secondary()),
        ])];

        for recipe in self.recipes {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                recipe.description,
                styles::text_secondary(),
            )));
            for command_line in recipe.command.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", command_line),
                    styles::text_primary(),
                )));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled("/", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("/", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] close", styles::text_muted()),
        ]));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let lines = self.lines();
        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = (content_width + 4).max(MIN_WIDTH);
        let height = lines.len() as u16 + 2;

        // Leave room for the shadow
        let bounds = Rect::new(
            area.x,
            area.y,
            area.width.saturating_sub(1),
            area.height.saturating_sub(1),
        );
        let modal = centered_rect(width, height, bounds);

        clear_area(buf, modal);
        render_shadow(buf, modal);

        let title = " curl instructions ";
        let block = styles::modal_block(title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.width < title.width() as u16 / 2 || inner.height == 0 {
            return;
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner.inner(ratatui::layout::Margin::new(1, 0)), buf);
    }
}
