//! Syntax color tables for each editor theme.

use ratatui::style::{Color, Modifier, Style};
use rustgen_app::editor::EditorTheme;

/// Token classes the highlighter emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Keyword,
    String,
    /// JSON object key
    Key,
    Number,
    Comment,
    TypeName,
    Punctuation,
}

/// Colors for one editor theme
#[derive(Debug, Clone, Copy)]
pub struct SyntaxColors {
    pub text: Color,
    pub keyword: Color,
    pub string: Color,
    pub key: Color,
    pub number: Color,
    pub comment: Color,
    pub type_name: Color,
    pub punctuation: Color,
}

impl SyntaxColors {
    pub fn for_theme(theme: EditorTheme) -> Self {
        match theme {
            EditorTheme::Monokai => Self {
                text: Color::Rgb(248, 248, 242),
                keyword: Color::Rgb(249, 38, 114),
                string: Color::Rgb(230, 219, 116),
                key: Color::Rgb(166, 226, 46),
                number: Color::Rgb(174, 129, 255),
                comment: Color::Rgb(117, 113, 94),
                type_name: Color::Rgb(102, 217, 239),
                punctuation: Color::Rgb(248, 248, 242),
            },
            EditorTheme::Github => Self {
                text: Color::Rgb(201, 209, 217),
                keyword: Color::Rgb(255, 123, 114),
                string: Color::Rgb(165, 214, 255),
                key: Color::Rgb(126, 231, 135),
                number: Color::Rgb(121, 192, 255),
                comment: Color::Rgb(139, 148, 158),
                type_name: Color::Rgb(255, 166, 87),
                punctuation: Color::Rgb(201, 209, 217),
            },
            EditorTheme::Plain => Self {
                text: Color::Reset,
                keyword: Color::Reset,
                string: Color::Reset,
                key: Color::Reset,
                number: Color::Reset,
                comment: Color::Reset,
                type_name: Color::Reset,
                punctuation: Color::Reset,
            },
        }
    }

    pub fn style(&self, kind: TokenKind) -> Style {
        let style = Style::default();
        match kind {
            TokenKind::Text => style.fg(self.text),
            TokenKind::Keyword => style.fg(self.keyword).add_modifier(Modifier::BOLD),
            TokenKind::String => style.fg(self.string),
            TokenKind::Key => style.fg(self.key),
            TokenKind::Number => style.fg(self.number),
            TokenKind::Comment => style.fg(self.comment).add_modifier(Modifier::ITALIC),
            TokenKind::TypeName => style.fg(self.type_name),
            TokenKind::Punctuation => style.fg(self.punctuation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_has_no_colors() {
        let colors = SyntaxColors::for_theme(EditorTheme::Plain);
        assert_eq!(colors.style(TokenKind::String).fg, Some(Color::Reset));
    }

    #[test]
    fn test_monokai_distinguishes_strings_and_keywords() {
        let colors = SyntaxColors::for_theme(EditorTheme::Monokai);
        assert_ne!(
            colors.style(TokenKind::String).fg,
            colors.style(TokenKind::Keyword).fg
        );
    }
}
