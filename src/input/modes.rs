//! Input Modes
//!
//! Modal editing state machine for vim-style interface.

use super::TextBuffer;

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Table navigation
    Normal,
    /// Typing into the add form
    Insert,
    /// Edit modal is open
    Modal,
    Command,
    Search,
}

impl InputMode {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Modal => "EDIT",
            Self::Command => "COMMAND",
            Self::Search => "SEARCH",
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Command | Self::Search)
    }

    pub fn is_form_input(&self) -> bool {
        matches!(self, Self::Insert | Self::Modal)
    }
}

/// Mode state with associated data
#[derive(Debug, Clone)]
pub struct ModeState {
    pub mode: InputMode,
    pub buffer: TextBuffer,
    pub pending: Option<char>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: TextBuffer::new(),
            pending: None,
        }
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.buffer.clear();
        self.pending = None;
    }

    pub fn to_normal(&mut self) {
        self.set_mode(InputMode::Normal);
    }

    pub fn to_insert(&mut self) {
        self.mode = InputMode::Insert;
        self.pending = None;
    }

    pub fn to_modal(&mut self) {
        self.mode = InputMode::Modal;
        self.pending = None;
    }

    pub fn to_command(&mut self) {
        self.set_mode(InputMode::Command);
    }

    /// Search starts from the current query so it can be refined.
    pub fn to_search(&mut self, current: Option<&str>) {
        self.set_mode(InputMode::Search);
        if let Some(query) = current {
            self.buffer.set_content(query);
        }
    }

    pub fn get_buffer(&self) -> &str {
        self.buffer.content()
    }
}
