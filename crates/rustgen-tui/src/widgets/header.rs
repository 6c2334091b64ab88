//! Header bar widget
//!
//! Title on the left, keybinding hints after it when they fit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const TITLE: &str = "rustgen";
const SUBTITLE: &str = "JSON to Rust code generator";

/// Main header showing the app title and keybindings
pub struct MainHeader {
    include_tests: bool,
}

impl MainHeader {
    pub fn new(include_tests: bool) -> Self {
        Self { include_tests }
    }

    fn shortcuts(&self) -> Line<'static> {
        let tests_label = if self.include_tests {
            "] tests:on  "
        } else {
            "] tests:off  "
        };

        let mut spans = Vec::new();
        for (key, label) in [
            ("^G", "] generate  "),
            ("^T", tests_label),
            ("Tab", "] focus  "),
            ("F1", "] curl  "),
            ("^Q", "] quit"),
        ] {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(label, styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(SUBTITLE, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        let shortcuts = self.shortcuts();
        let shortcuts_width = shortcuts.width() as u16;
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}
