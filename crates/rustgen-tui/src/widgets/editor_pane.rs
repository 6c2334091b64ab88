//! Editor pane widget
//!
//! Renders one mounted editor with a line-number gutter and syntax colors,
//! or the creation error when the editor could not be mounted.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use rustgen_app::editor::{EditorInstance, MountPoint};
use unicode_width::UnicodeWidthStr;

use crate::highlight::{highlight_line, Language};
use crate::theme::styles;
use crate::theme::syntax::SyntaxColors;

/// Rows available for text inside a pane of `area`
pub fn text_height(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

/// Where text and gutter land inside the pane
struct PaneGeometry {
    gutter: Rect,
    text: Rect,
    hscroll: u16,
}

pub struct EditorPane<'a> {
    mount: MountPoint,
    editor: Option<&'a EditorInstance>,
    failure: Option<&'a str>,
    focused: bool,
}

impl<'a> EditorPane<'a> {
    pub fn new(
        mount: MountPoint,
        editor: Option<&'a EditorInstance>,
        failure: Option<&'a str>,
    ) -> Self {
        Self {
            mount,
            editor,
            failure,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Terminal cursor position for the focused editor, if visible
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let editor = self.editor?;
        let geometry = self.geometry(editor, area)?;

        let cursor = editor.cursor();
        let row = cursor.row.checked_sub(editor.scroll_offset())?;
        if row >= geometry.text.height as usize {
            return None;
        }
        let col = cursor_display_col(editor).saturating_sub(geometry.hscroll);
        Some(Position::new(
            geometry.text.x + col,
            geometry.text.y + row as u16,
        ))
    }

    fn title(&self) -> Line<'static> {
        let mut label = format!(" {} ", self.mount.label());
        if let Some(editor) = self.editor {
            label.push_str(&format!("· {} ", editor.mode()));
            if editor.is_read_only() {
                label.push_str("· read-only ");
            }
        }
        let style = if self.focused {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        Line::from(Span::styled(label, style))
    }

    fn geometry(&self, editor: &EditorInstance, area: Rect) -> Option<PaneGeometry> {
        let inner = styles::glass_block(self.focused).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let digits = editor.line_count().to_string().len() as u16;
        let gutter_width = (digits + 1).min(inner.width);
        let gutter = Rect::new(inner.x, inner.y, gutter_width, inner.height);
        let text = Rect::new(
            inner.x + gutter_width,
            inner.y,
            inner.width - gutter_width,
            inner.height,
        );

        let col = cursor_display_col(editor);
        let hscroll = if text.width > 0 && col >= text.width {
            col - text.width + 1
        } else {
            0
        };

        Some(PaneGeometry {
            gutter,
            text,
            hscroll,
        })
    }

    fn render_editor(&self, editor: &EditorInstance, area: Rect, buf: &mut Buffer) {
        let Some(geometry) = self.geometry(editor, area) else {
            return;
        };

        let colors = SyntaxColors::for_theme(editor.theme());
        let language = Language::from_mode(editor.mode());
        let first = editor.scroll_offset();
        let visible = editor
            .lines()
            .iter()
            .enumerate()
            .skip(first)
            .take(geometry.text.height as usize);

        let mut gutter_lines = Vec::new();
        let mut text_lines = Vec::new();
        for (index, line) in visible {
            let width = geometry.gutter.width.saturating_sub(1) as usize;
            gutter_lines.push(Line::from(Span::styled(
                format!("{:>width$} ", index + 1, width = width),
                styles::text_muted(),
            )));
            let display = expand_tabs(line, editor.tab_width());
            text_lines.push(highlight_line(&display, language, &colors));
        }

        Paragraph::new(gutter_lines).render(geometry.gutter, buf);
        Paragraph::new(text_lines)
            .scroll((0, geometry.hscroll))
            .render(geometry.text, buf);
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match (self.editor, self.failure) {
            (Some(editor), _) => self.render_editor(editor, area, buf),
            (None, Some(reason)) => {
                let text = vec![
                    Line::from(Span::styled("editor unavailable", styles::status_red())),
                    Line::from(Span::styled(reason.to_string(), styles::text_secondary())),
                ];
                Paragraph::new(text)
                    .wrap(Wrap { trim: false })
                    .render(inner, buf);
            }
            (None, None) => {
                Paragraph::new(Span::styled("not mounted", styles::text_muted()))
                    .render(inner, buf);
            }
        }
    }
}

/// Display width of the text before the cursor
fn cursor_display_col(editor: &EditorInstance) -> u16 {
    let cursor = editor.cursor();
    let line = editor
        .lines()
        .get(cursor.row)
        .map(String::as_str)
        .unwrap_or("");
    let prefix: String = line.chars().take(cursor.col).collect();
    expand_tabs(&prefix, editor.tab_width())
        .width()
        .min(u16::MAX as usize) as u16
}

/// Tabs are stored verbatim and only widened for display
fn expand_tabs(text: &str, tab_width: usize) -> String {
    text.replace('\t', &" ".repeat(tab_width))
}
