//! Renderer
//!
//! Composes the add panel, the table, the edit modal and the bars.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::input::InputMode;
use crate::units::UnitRow;

use super::components::{
    AddFormPanel, EditModal, HelpBar, MessageType, StatusLine, TableViewState, UnitForm, UnitTable,
};

pub struct UiState<'a> {
    pub mode: InputMode,
    pub rows: &'a [UnitRow],
    pub unfiltered: usize,
    pub table_state: &'a TableViewState,
    pub form: &'a UnitForm,
    /// Id of the record in the edit modal, if it is open.
    pub editing: Option<&'a str>,
    pub command_buffer: Option<&'a str>,
    pub message: Option<(&'a str, MessageType)>,
    pub backend: &'a str,
    pub last_refresh: Option<&'a str>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(AddFormPanel::HEIGHT),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let form_focused = state.mode == InputMode::Insert;
        frame.render_widget(AddFormPanel::new(state.form, form_focused), chunks[0]);

        let table = UnitTable::new(state.rows, state.table_state, state.unfiltered)
            .focused(matches!(state.mode, InputMode::Normal | InputMode::Search | InputMode::Command));
        frame.render_widget(table, chunks[1]);

        frame.render_widget(Self::status_line(state), chunks[2]);
        frame.render_widget(HelpBar::for_mode(state.mode), chunks[3]);

        if let Some(unit_id) = state.editing {
            frame.render_widget(EditModal::new(state.form, unit_id), area);
        }
    }

    fn status_line<'a>(state: &UiState<'a>) -> StatusLine<'a> {
        let mut line = StatusLine::new(state.mode)
            .backend(state.backend)
            .item_count(state.table_state.selected, state.rows.len());

        if let Some(buffer) = state.command_buffer {
            line = line.command_buffer(buffer);
        }
        if let Some((msg, kind)) = state.message {
            line = line.message(msg, kind);
        }
        if let Some(query) = state.table_state.search.as_deref() {
            line = line.search_query(query);
        }
        if let Some(at) = state.last_refresh {
            line = line.last_refresh(at);
        }
        line
    }
}
