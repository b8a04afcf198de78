//! Keymap
//!
//! Translates key events into application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,

    // Table navigation
    MoveUp,
    MoveDown,
    Top,
    Bottom,
    NextPage,
    PrevPage,
    CyclePageSize,
    SortNext,
    ToggleSortDirection,

    // Records
    AddUnit,
    EditSelected,
    DeleteSelected,
    Refresh,

    // Modes
    EnterSearch,
    EnterCommand,
    ClearSearch,

    // Text input
    InsertChar(char),
    DeleteChar,
    DeleteWord,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearToStart,
    Submit,
    Cancel,

    ExecuteCommand(String),
    Search(String),
}

/// Returns the action plus the pending key for two-key sequences (`gg`).
pub fn normal_mode_action(key: KeyEvent, pending: Option<char>) -> (Action, Option<char>) {
    if pending == Some('g') {
        return match (key.code, key.modifiers) {
            (KeyCode::Char('g'), KeyModifiers::NONE) => (Action::Top, None),
            _ => (Action::None, None),
        };
    }

    let action = match (key.code, key.modifiers) {
        (KeyCode::Char('g'), KeyModifiers::NONE) => return (Action::None, Some('g')),
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::Bottom,
        (KeyCode::Home, _) => Action::Top,
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) | (KeyCode::PageDown, _) => Action::NextPage,
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) | (KeyCode::PageUp, _) => Action::PrevPage,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::CyclePageSize,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::SortNext,
        (KeyCode::Char('S'), _) => Action::ToggleSortDirection,
        (KeyCode::Char('a'), KeyModifiers::NONE) | (KeyCode::Char('i'), KeyModifiers::NONE) => Action::AddUnit,
        (KeyCode::Char('e'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Action::EditSelected,
        (KeyCode::Char('d'), KeyModifiers::NONE) | (KeyCode::Delete, _) => Action::DeleteSelected,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Refresh,
        (KeyCode::Char('/'), _) => Action::EnterSearch,
        (KeyCode::Char(':'), _) => Action::EnterCommand,
        (KeyCode::Esc, _) => Action::ClearSearch,
        _ => Action::None,
    };
    (action, None)
}

pub fn text_input_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => Action::DeleteWord,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::DeleteWord,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearToStart,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => Action::CursorHome,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => Action::CursorEnd,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}
