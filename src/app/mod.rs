//! Application State
//!
//! The unit admin page: the unit collection, the shared form session and the
//! edit modal, tied to the backend and the UI.

mod actions;
mod config;
mod input;
mod units_handler;

use std::time::Instant;

use ratatui::Frame;
use thiserror::Error;

use crate::input::modes::ModeState;
use crate::ui::components::{FormError, MessageType, TableViewState, UnitForm};
use crate::ui::renderer::{Renderer, UiState};
use crate::units::{ApiError, Unit, UnitRow, UnitsApi};

pub use config::{AppConfig, ConfigError};

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("no unit is being edited")]
    NotEditing,

    /// The change was applied but the list could not be read back.
    #[error("reloading units failed: {0}")]
    Reload(#[source] ApiError),
}

/// Open edit modal. The add form's draft is set aside while the shared form
/// holds the record being edited.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub unit: Unit,
    draft: UnitForm,
}

pub struct App {
    pub config: AppConfig,
    api: Box<dyn UnitsApi>,
    pub mode_state: ModeState,
    /// Server order, replaced wholesale on every successful refresh.
    pub units: Vec<Unit>,
    pub form: UnitForm,
    pub editing: Option<EditSession>,
    pub table_state: TableViewState,
    pub message: Option<(String, MessageType, Instant)>,
    pub last_refresh: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, api: Box<dyn UnitsApi>) -> Self {
        let table_state = TableViewState::new(config.page_size);
        Self {
            config,
            api,
            mode_state: ModeState::new(),
            units: Vec::new(),
            form: UnitForm::new(),
            editing: None,
            table_state,
            message: None,
            last_refresh: None,
            should_quit: false,
        }
    }

    /// Initial load. A failure leaves the table empty and is reported.
    pub fn mount(&mut self) {
        if let Err(e) = self.refresh() {
            self.report("Could not load units", &e);
        }
    }

    /// Rows as currently displayed, recomputed from the collection.
    pub fn rows(&self) -> Vec<UnitRow> {
        self.table_state.visible_rows(&self.units)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let rows = self.rows();
        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));
        let command_buffer = self.mode_state.mode.is_text_input().then(|| self.mode_state.get_buffer());

        let state = UiState {
            mode: self.mode_state.mode,
            rows: &rows,
            unfiltered: self.units.len(),
            table_state: &self.table_state,
            form: &self.form,
            editing: self.editing.as_ref().map(|s| s.unit.id.as_str()),
            command_buffer,
            message,
            backend: self.api.location(),
            last_refresh: self.last_refresh.as_deref(),
        };

        Renderer::render(frame, &state);
    }

    pub fn check_message_expiry(&mut self) {
        let timeout = self.config.message_timeout();
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }

    pub fn report(&mut self, context: &str, err: &PageError) {
        self.set_message(&format!("{}: {}", context, err), MessageType::Error);
    }
}
