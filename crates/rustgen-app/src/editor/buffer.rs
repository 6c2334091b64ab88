//! Text buffer backing one editor surface

use std::sync::atomic::{AtomicU64, Ordering};

use super::toolkit::{EditorTheme, ToolkitConfig};

/// Unique identifier for an editor instance
pub type EditorId = u64;

static EDITOR_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_editor_id() -> EditorId {
    EDITOR_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Where the cursor lands after [`EditorInstance::set_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    /// First character of the document
    Start,
    /// After the last character of the document
    End,
}

/// Cursor position; `col` counts characters, not bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Editing and navigation commands applied to the focused editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Remove all text
    Clear,
}

impl EditorCommand {
    /// Whether the command changes the text
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            EditorCommand::Insert(_)
                | EditorCommand::Newline
                | EditorCommand::Backspace
                | EditorCommand::Delete
                | EditorCommand::Clear
        )
    }
}

/// Rows moved by PageUp/PageDown before the view reports its real height
const DEFAULT_PAGE_ROWS: usize = 10;

/// A stateful text surface with a language mode and display theme
#[derive(Debug, Clone)]
pub struct EditorInstance {
    id: EditorId,
    mode: String,
    theme: EditorTheme,
    tab_width: usize,
    read_only: bool,
    lines: Vec<String>,
    cursor: Cursor,
    scroll: usize,
    page_rows: usize,
}

impl EditorInstance {
    pub fn new(mode: impl Into<String>, config: ToolkitConfig) -> Self {
        Self {
            id: next_editor_id(),
            mode: mode.into(),
            theme: config.theme,
            tab_width: config.tab_width,
            read_only: false,
            lines: vec![String::new()],
            cursor: Cursor::default(),
            scroll: 0,
            page_rows: DEFAULT_PAGE_ROWS,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn id(&self) -> EditorId {
        self.id
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn theme(&self) -> EditorTheme {
        self.theme
    }

    /// Display width of a tab character
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Full document text, lines joined with `\n`
    pub fn get_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the whole document.
    ///
    /// Works on read-only editors too; read-only only blocks user edits.
    /// Without a hint the cursor goes to the end of the document.
    pub fn set_text(&mut self, value: &str, hint: Option<CursorHint>) {
        self.lines = split_lines(value);
        self.cursor = match hint.unwrap_or(CursorHint::End) {
            CursorHint::Start => Cursor::default(),
            CursorHint::End => {
                let row = self.lines.len() - 1;
                Cursor {
                    row,
                    col: char_len(&self.lines[row]),
                }
            }
        };
        self.scroll = self.scroll.min(self.cursor.row);
        if hint == Some(CursorHint::Start) {
            self.scroll = 0;
        }
    }

    /// Apply a command. Returns `true` when anything changed.
    ///
    /// Edit commands are ignored on read-only editors.
    pub fn apply(&mut self, command: &EditorCommand) -> bool {
        if self.read_only && command.is_edit() {
            return false;
        }

        let before = (self.cursor, self.lines.len());
        match command {
            EditorCommand::Insert(c) => self.insert_char(*c),
            EditorCommand::Newline => self.insert_newline(),
            EditorCommand::Backspace => return self.backspace(),
            EditorCommand::Delete => return self.delete(),
            EditorCommand::Left => self.move_left(),
            EditorCommand::Right => self.move_right(),
            EditorCommand::Up => self.move_vertical(-1),
            EditorCommand::Down => self.move_vertical(1),
            EditorCommand::Home => self.cursor.col = 0,
            EditorCommand::End => self.cursor.col = char_len(&self.lines[self.cursor.row]),
            EditorCommand::PageUp => self.move_vertical(-(self.page_rows as isize)),
            EditorCommand::PageDown => self.move_vertical(self.page_rows as isize),
            EditorCommand::Clear => {
                let had_text = !self.get_text().is_empty();
                self.set_text("", Some(CursorHint::Start));
                return had_text;
            }
        }
        command.is_edit() || before != (self.cursor, self.lines.len())
    }

    /// Insert pasted text at the cursor. `\r\n` and `\r` become `\n`;
    /// everything else, tabs included, is kept verbatim.
    pub fn insert_str(&mut self, text: &str) -> bool {
        if self.read_only || text.is_empty() {
            return false;
        }

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let row = self.cursor.row;
        let at = byte_index(&self.lines[row], self.cursor.col);
        let tail = self.lines[row].split_off(at);

        let mut pieces = normalized.split('\n');
        if let Some(first) = pieces.next() {
            self.lines[row].push_str(first);
        }
        let mut current = row;
        for piece in pieces {
            current += 1;
            self.lines.insert(current, piece.to_string());
        }

        self.cursor = Cursor {
            row: current,
            col: char_len(&self.lines[current]),
        };
        self.lines[current].push_str(&tail);
        true
    }

    /// Keep the cursor inside a viewport of `height` rows; returns the offset
    pub fn scroll_to_cursor(&mut self, height: usize) -> usize {
        if height == 0 {
            return self.scroll;
        }
        self.page_rows = height.saturating_sub(1).max(1);
        if self.cursor.row < self.scroll {
            self.scroll = self.cursor.row;
        } else if self.cursor.row >= self.scroll + height {
            self.scroll = self.cursor.row + 1 - height;
        }
        self.scroll
    }

    fn insert_char(&mut self, c: char) {
        if c == '\t' {
            for _ in 0..self.tab_width {
                self.insert_char(' ');
            }
            return;
        }
        let line = &mut self.lines[self.cursor.row];
        let at = byte_index(line, self.cursor.col);
        line.insert(at, c);
        self.cursor.col += 1;
    }

    fn insert_newline(&mut self) {
        let row = self.cursor.row;
        let at = byte_index(&self.lines[row], self.cursor.col);
        let tail = self.lines[row].split_off(at);
        self.lines.insert(row + 1, tail);
        self.cursor = Cursor { row: row + 1, col: 0 };
    }

    fn backspace(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            let line = &mut self.lines[row];
            let at = byte_index(line, col - 1);
            line.remove(at);
            self.cursor.col -= 1;
            true
        } else if row > 0 {
            let current = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            let prev_len = char_len(prev);
            prev.push_str(&current);
            self.cursor = Cursor {
                row: row - 1,
                col: prev_len,
            };
            true
        } else {
            false
        }
    }

    fn delete(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if col < char_len(&self.lines[row]) {
            let line = &mut self.lines[row];
            let at = byte_index(line, col);
            line.remove(at);
            true
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
            true
        } else {
            false
        }
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = char_len(&self.lines[self.cursor.row]);
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < char_len(&self.lines[self.cursor.row]) {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.lines.len() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let last = self.lines.len() - 1;
        let row = (self.cursor.row as isize + delta).clamp(0, last as isize) as usize;
        self.cursor.row = row;
        self.cursor.col = self.cursor.col.min(char_len(&self.lines[row]));
    }
}

fn split_lines(value: &str) -> Vec<String> {
    value
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
