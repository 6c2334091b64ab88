//! Line-oriented syntax highlighting for the editor panes.
//!
//! Each line is tokenized on its own. Multi-line constructs (block comments,
//! strings spanning lines) are not tracked, which is fine for JSON input and
//! the generated Rust the service returns.

use ratatui::text::{Line, Span};

use crate::theme::syntax::{SyntaxColors, TokenKind};

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

const RUST_PRIMITIVES: &[&str] = &[
    "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "str", "u8", "u16",
    "u32", "u64", "u128", "usize",
];

/// Highlighting rules selected by an editor's language mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Json,
    Rust,
    Plain,
}

impl Language {
    pub fn from_mode(mode: &str) -> Self {
        match mode.to_ascii_lowercase().as_str() {
            "json" => Language::Json,
            "rust" | "rs" => Language::Rust,
            _ => Language::Plain,
        }
    }
}

/// Split a line into classified slices. Concatenating the slices yields `line`.
pub fn tokenize(line: &str, language: Language) -> Vec<(TokenKind, &str)> {
    if language == Language::Plain {
        return if line.is_empty() {
            Vec::new()
        } else {
            vec![(TokenKind::Text, line)]
        };
    }

    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = line[pos..].chars().next() {
        let rest = &line[pos..];

        if language == Language::Rust && rest.starts_with("//") {
            tokens.push((TokenKind::Comment, rest));
            break;
        }

        let (kind, end) = if c == '"' {
            let end = scan_string(line, pos);
            let kind = if language == Language::Json && line[end..].trim_start().starts_with(':')
            {
                TokenKind::Key
            } else {
                TokenKind::String
            };
            (kind, end)
        } else if c.is_ascii_digit() || (c == '-' && starts_with_digit(&rest[1..])) {
            let end = scan_while(line, pos, |ch| {
                ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '+' | '_')
            });
            (TokenKind::Number, end)
        } else if c.is_alphabetic() || c == '_' {
            let end = scan_while(line, pos, |ch| ch.is_alphanumeric() || ch == '_');
            (classify_word(&line[pos..end], language), end)
        } else if c.is_whitespace() {
            (TokenKind::Text, scan_while(line, pos, char::is_whitespace))
        } else {
            (TokenKind::Punctuation, pos + c.len_utf8())
        };

        tokens.push((kind, &line[pos..end]));
        pos = end;
    }

    tokens
}

/// Styled line for rendering
pub fn highlight_line(line: &str, language: Language, colors: &SyntaxColors) -> Line<'static> {
    Line::from(
        tokenize(line, language)
            .into_iter()
            .map(|(kind, text)| Span::styled(text.to_string(), colors.style(kind)))
            .collect::<Vec<_>>(),
    )
}

fn classify_word(word: &str, language: Language) -> TokenKind {
    match language {
        Language::Json => match word {
            "true" | "false" | "null" => TokenKind::Keyword,
            _ => TokenKind::Text,
        },
        Language::Rust => {
            if RUST_KEYWORDS.contains(&word) {
                TokenKind::Keyword
            } else if RUST_PRIMITIVES.contains(&word)
                || word.chars().next().is_some_and(char::is_uppercase)
            {
                TokenKind::TypeName
            } else {
                TokenKind::Text
            }
        }
        Language::Plain => TokenKind::Text,
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// End of the string literal opening at `start`; end of line if unterminated
fn scan_string(line: &str, start: usize) -> usize {
    let mut escaped = false;
    for (i, c) in line[start + 1..].char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return start + 1 + i + 1,
            _ => {}
        }
    }
    line.len()
}

fn scan_while(line: &str, start: usize, pred: impl Fn(char) -> bool) -> usize {
    line[start..]
        .char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(i, _)| start + i)
        .unwrap_or(line.len())
}
