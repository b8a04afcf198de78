//! Text Buffer
//!
//! Single-line editing buffer with a UTF-8 aware cursor.

use crossterm::event::{KeyCode, KeyModifiers};

/// Handle common text input keys, returns true if key was handled
pub fn handle_text_key(buf: &mut TextBuffer, code: KeyCode, mods: KeyModifiers) -> bool {
    match (code, mods) {
        (KeyCode::Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => buf.delete_word(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => buf.delete_word(),
        (KeyCode::Backspace, _) => buf.delete_char(),
        (KeyCode::Delete, _) => buf.delete_char_forward(),
        (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => buf.cursor_home(),
        (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => buf.cursor_end(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => buf.clear_to_start(),
        (KeyCode::Left, _) => buf.cursor_left(),
        (KeyCode::Right, _) => buf.cursor_right(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => buf.insert_char(c),
        _ => return false,
    }
    true
}

/// Byte offset where the word before `from` starts.
pub fn find_word_boundary_back(s: &str, from: usize) -> usize {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut chars = s[..from].char_indices().rev().peekable();
    let mut pos = from;

    while let Some(&(i, c)) = chars.peek() {
        if !c.is_whitespace() { break; }
        pos = i;
        chars.next();
    }

    let Some(&(_, first)) = chars.peek() else { return pos };
    if !is_word(first) {
        while let Some(&(i, c)) = chars.peek() {
            if c.is_whitespace() || is_word(c) { break; }
            pos = i;
            chars.next();
        }
    }
    while let Some(&(i, c)) = chars.peek() {
        if !is_word(c) { break; }
        pos = i;
        chars.next();
    }
    pos
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.len();
        Self { content, cursor }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor as a byte offset into `content`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor as a character column, for rendering.
    pub fn cursor_column(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        let Some(prev) = self.prev_boundary() else { return };
        self.content.remove(prev);
        self.cursor = prev;
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.content.len() {
            return;
        }
        self.content.remove(self.cursor);
    }

    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = find_word_boundary_back(&self.content, self.cursor);
        self.content.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn clear_to_start(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.content.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.content.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut buf = TextBuffer::new();
        buf.insert_char('h');
        buf.insert_char('i');
        assert_eq!(buf.content(), "hi");
        assert_eq!(buf.cursor(), 2);

        buf.delete_char();
        assert_eq!(buf.content(), "h");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut buf = TextBuffer::with_content("Şükrü");
        assert_eq!(buf.cursor_column(), 5);

        buf.cursor_left();
        buf.cursor_left();
        assert_eq!(buf.cursor_column(), 3);

        buf.insert_char('ğ');
        assert_eq!(buf.content(), "Şükğrü");

        buf.delete_char();
        buf.delete_char();
        assert_eq!(buf.content(), "Şürü");
        assert_eq!(buf.cursor_column(), 2);

        buf.delete_char_forward();
        assert_eq!(buf.content(), "Şüü");
    }

    #[test]
    fn test_cursor_movement() {
        let mut buf = TextBuffer::with_content("hello");
        assert_eq!(buf.cursor(), 5);

        buf.cursor_home();
        assert_eq!(buf.cursor(), 0);
        buf.cursor_left();
        assert_eq!(buf.cursor(), 0);

        buf.cursor_end();
        assert_eq!(buf.cursor(), 5);
        buf.cursor_right();
        assert_eq!(buf.cursor(), 5);

        buf.cursor_left();
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn test_delete_word_simple() {
        let mut buf = TextBuffer::with_content("hello world");
        buf.delete_word();
        assert_eq!(buf.content(), "hello ");
    }

    #[test]
    fn test_delete_word_with_spaces() {
        let mut buf = TextBuffer::with_content("hello   ");
        buf.delete_word();
        assert_eq!(buf.content(), "");
    }

    #[test]
    fn test_delete_word_symbol() {
        let mut buf = TextBuffer::with_content("hello!");
        buf.delete_word();
        assert_eq!(buf.content(), "");
    }

    #[test]
    fn test_clear_to_start() {
        let mut buf = TextBuffer::with_content("hello world");
        buf.cursor_home();
        for _ in 0..6 {
            buf.cursor_right();
        }
        buf.clear_to_start();
        assert_eq!(buf.content(), "world");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_handle_text_key() {
        let mut buf = TextBuffer::new();

        assert!(handle_text_key(&mut buf, KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(buf.content(), "a");

        assert!(handle_text_key(&mut buf, KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(buf.content(), "");

        assert!(!handle_text_key(&mut buf, KeyCode::Enter, KeyModifiers::NONE));
    }
}
