use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{
    keymap::{normal_mode_action, text_input_action, Action},
    modes::InputMode,
};
use crate::ui::components::MessageType;

use super::{App, PageError};

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.mode_state.mode.is_form_input() {
            self.handle_form_key(key);
            return;
        }

        let action = self.resolve_action(key);
        self.execute_action(action);
    }

    fn resolve_action(&mut self, key: KeyEvent) -> Action {
        match self.mode_state.mode {
            InputMode::Normal => self.resolve_normal_action(key),
            InputMode::Command | InputMode::Search => self.resolve_text_action(key),
            InputMode::Insert | InputMode::Modal => Action::None,
        }
    }

    fn resolve_normal_action(&mut self, key: KeyEvent) -> Action {
        let (action, pending) = normal_mode_action(key, self.mode_state.pending);
        self.mode_state.pending = pending;
        action
    }

    fn resolve_text_action(&mut self, key: KeyEvent) -> Action {
        let action = text_input_action(key);
        self.handle_text_input(action)
    }

    fn handle_text_input(&mut self, action: Action) -> Action {
        let buffer = &mut self.mode_state.buffer;
        match action {
            Action::InsertChar(c) => { buffer.insert_char(c); Action::None }
            Action::DeleteChar => { buffer.delete_char(); Action::None }
            Action::DeleteWord => { buffer.delete_word(); Action::None }
            Action::CursorLeft => { buffer.cursor_left(); Action::None }
            Action::CursorRight => { buffer.cursor_right(); Action::None }
            Action::CursorHome => { buffer.cursor_home(); Action::None }
            Action::CursorEnd => { buffer.cursor_end(); Action::None }
            Action::ClearToStart => { buffer.clear_to_start(); Action::None }
            Action::Submit => self.submit_text_input(),
            Action::Cancel => { self.mode_state.to_normal(); Action::None }
            _ => Action::None,
        }
    }

    fn submit_text_input(&mut self) -> Action {
        let buffer = self.mode_state.get_buffer().to_string();
        let result = match self.mode_state.mode {
            InputMode::Command => Action::ExecuteCommand(buffer),
            InputMode::Search => Action::Search(buffer),
            _ => Action::None,
        };
        self.mode_state.to_normal();
        result
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.cancel_form(),
            (KeyCode::Enter, KeyModifiers::NONE) => self.submit_form(),
            (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => self.form.next_field(),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => self.form.prev_field(),
            _ => { self.form.handle_text_key(key.code, key.modifiers); }
        }
    }

    /// Esc in the modal dismisses it; in the add form it only leaves the
    /// form, keeping what was typed.
    fn cancel_form(&mut self) {
        if self.is_editing() {
            self.close_edit();
        } else {
            self.mode_state.to_normal();
        }
    }

    fn submit_form(&mut self) {
        let editing = self.is_editing();
        let result = if editing { self.submit_edit() } else { self.submit_create() };
        let done = if editing { "Unit updated" } else { "Unit added" };

        match result {
            Ok(()) => {
                self.mode_state.to_normal();
                self.set_message(done, MessageType::Success);
            }
            Err(PageError::Reload(e)) => {
                self.mode_state.to_normal();
                self.set_message(&format!("{}; reload failed: {}", done, e), MessageType::Error);
            }
            Err(PageError::Form(e)) => {
                self.form.focus(e.field());
                self.set_message(&e.to_string(), MessageType::Error);
            }
            Err(e) if editing => self.report("Could not update unit", &e),
            Err(e) => self.report("Could not add unit", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::ui::components::FieldName;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_flow_through_keys() {
        let (mut app, api) = app_with(Vec::new());
        app.mount();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode_state.mode, InputMode::Insert);

        type_str(&mut app, "Ayse Kaya");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "3");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "12");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "B");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "0555");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode_state.mode, InputMode::Normal);
        assert_eq!(api.snapshot().len(), 1);
        assert_eq!(app.units.len(), 1);
        assert_eq!(app.units[0].fields.unit_number, 12);
        let (msg, kind, _) = app.message.as_ref().unwrap();
        assert_eq!((msg.as_str(), *kind), ("Unit added", MessageType::Success));
    }

    #[test]
    fn test_missing_field_focuses_it() {
        let (mut app, api) = app_with(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Ayse");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode_state.mode, InputMode::Insert);
        assert_eq!(app.form.active(), FieldName::Floor);
        assert_eq!(api.request_count(), 0);
        let (msg, kind, _) = app.message.as_ref().unwrap();
        assert_eq!(*kind, MessageType::Error);
        assert_eq!(msg, "Floor is required");
    }

    #[test]
    fn test_escape_keeps_add_draft() {
        let (mut app, _api) = app_with(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Ayse");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode_state.mode, InputMode::Normal);
        assert_eq!(app.form.value(FieldName::ResidentName), "Ayse");
    }

    #[test]
    fn test_edit_flow_through_keys() {
        let (mut app, api) = app_with(vec![unit("1", "A", 3, 2, "X", "555")]);
        app.mount();

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode_state.mode, InputMode::Modal);

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "x7");
        press(&mut app, KeyCode::Enter);

        assert!(!app.is_editing());
        assert_eq!(api.snapshot()[0].fields.floor, 27);
        assert_eq!(app.units[0].fields.floor, 27);
    }

    #[test]
    fn test_escape_closes_modal_without_saving() {
        let (mut app, api) = app_with(vec![unit("1", "A", 3, 2, "X", "555")]);
        app.mount();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "YZ");
        press(&mut app, KeyCode::Esc);

        assert!(!app.is_editing());
        assert_eq!(app.mode_state.mode, InputMode::Normal);
        assert_eq!(api.snapshot()[0].fields.resident_name, "X");
    }

    #[test]
    fn test_delete_key_removes_selected() {
        let (mut app, api) = app_with(vec![unit("1", "A", 3, 2, "X", "555")]);
        app.mount();
        press(&mut app, KeyCode::Char('d'));
        assert!(api.snapshot().is_empty());
        assert!(app.units.is_empty());
    }

    #[test]
    fn test_search_mode_filters_table() {
        let (mut app, _api) = app_with(vec![
            unit("1", "A", 3, 2, "Ayse Kaya", "555"),
            unit("2", "B", 7, 4, "Mehmet Demir", "556"),
        ]);
        app.mount();

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode_state.mode, InputMode::Search);
        type_str(&mut app, "demir");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode_state.mode, InputMode::Normal);
        let rows = app.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "2");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.rows().len(), 2);
    }

    #[test]
    fn test_release_events_ignored() {
        let (mut app, _api) = app_with(Vec::new());
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key_event(key);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_add_reported_as_done_when_reload_fails() {
        let (mut app, api) = app_with(Vec::new());
        app.mount();
        api.set_list_failing(true);

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Ayse");
        for value in ["3", "12", "B", "0555"] {
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, value);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(api.snapshot().len(), 1);
        assert_eq!(app.mode_state.mode, InputMode::Normal);
        let (msg, kind, _) = app.message.as_ref().unwrap();
        assert_eq!(*kind, MessageType::Error);
        assert!(msg.starts_with("Unit added; reload failed"));
    }

    #[test]
    fn test_update_reported_as_done_when_reload_fails() {
        let (mut app, api) = app_with(vec![unit("1", "A", 3, 2, "X", "555")]);
        app.mount();
        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, "Y");
        api.set_list_failing(true);
        press(&mut app, KeyCode::Enter);

        assert_eq!(api.snapshot()[0].fields.resident_name, "XY");
        assert!(!app.is_editing());
        assert!(app.message.as_ref().unwrap().0.starts_with("Unit updated; reload failed"));
    }
}
