//! Unit Form Component
//!
//! The form session shared by the add panel and the edit modal, plus the
//! add panel widget.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use thiserror::Error;

use crate::input::{handle_text_key, TextBuffer};
use crate::units::UnitFields;

use super::input_field::InputField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    ResidentName,
    Floor,
    UnitNumber,
    Block,
    PhoneNumber,
}

impl FieldName {
    /// Form order, matching the add panel layout.
    pub const ORDER: [FieldName; 5] = [
        Self::ResidentName,
        Self::Floor,
        Self::UnitNumber,
        Self::Block,
        Self::PhoneNumber,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ResidentName => "Resident Name",
            Self::Floor => "Floor",
            Self::UnitNumber => "Unit No",
            Self::Block => "Block",
            Self::PhoneNumber => "Phone Number",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Floor | Self::UnitNumber)
    }

    fn index(&self) -> usize {
        match self {
            Self::ResidentName => 0,
            Self::Floor => 1,
            Self::UnitNumber => 2,
            Self::Block => 3,
            Self::PhoneNumber => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Required(FieldName),

    #[error("{} must be a whole number, got '{value}'", .field.label())]
    NotANumber { field: FieldName, value: String },
}

impl FormError {
    pub fn field(&self) -> FieldName {
        match self {
            Self::Required(field) => *field,
            Self::NotANumber { field, .. } => *field,
        }
    }
}

/// Editable field values kept as text, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitForm {
    values: [TextBuffer; 5],
    pub active_field: usize,
}

impl UnitForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.values[name.index()].content()
    }

    pub fn active(&self) -> FieldName {
        FieldName::ORDER[self.active_field]
    }

    /// Plain merge of one value; nothing is checked until `validate`.
    pub fn update_field(&mut self, name: FieldName, value: &str) {
        self.values[name.index()].set_content(value);
    }

    /// Overwrite every field from a record and start at the first field.
    pub fn load(&mut self, fields: &UnitFields) {
        self.update_field(FieldName::ResidentName, &fields.resident_name);
        self.update_field(FieldName::Floor, &fields.floor.to_string());
        self.update_field(FieldName::UnitNumber, &fields.unit_number.to_string());
        self.update_field(FieldName::Block, &fields.block);
        self.update_field(FieldName::PhoneNumber, &fields.phone_number);
        self.active_field = 0;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(TextBuffer::is_empty)
    }

    pub fn focus(&mut self, name: FieldName) {
        self.active_field = name.index();
        self.values[self.active_field].cursor_end();
    }

    pub fn next_field(&mut self) {
        self.focus(FieldName::ORDER[(self.active_field + 1) % FieldName::ORDER.len()]);
    }

    pub fn prev_field(&mut self) {
        let len = FieldName::ORDER.len();
        self.focus(FieldName::ORDER[(self.active_field + len - 1) % len]);
    }

    pub fn cursor_column(&self) -> usize {
        self.values[self.active_field].cursor_column()
    }

    /// Numeric fields drop characters that cannot be part of an integer.
    pub fn handle_text_key(&mut self, code: KeyCode, mods: KeyModifiers) -> bool {
        if let KeyCode::Char(c) = code {
            let blocked = self.active().is_numeric() && !(c.is_ascii_digit() || c == '-');
            if blocked && matches!(mods, KeyModifiers::NONE | KeyModifiers::SHIFT) {
                return false;
            }
        }
        handle_text_key(&mut self.values[self.active_field], code, mods)
    }

    /// Parse the text values into a typed record body.
    pub fn validate(&self) -> Result<UnitFields, FormError> {
        for name in FieldName::ORDER {
            if self.value(name).trim().is_empty() {
                return Err(FormError::Required(name));
            }
        }

        Ok(UnitFields {
            resident_name: self.value(FieldName::ResidentName).trim().to_string(),
            floor: self.parse_number(FieldName::Floor)?,
            unit_number: self.parse_number(FieldName::UnitNumber)?,
            phone_number: self.value(FieldName::PhoneNumber).trim().to_string(),
            block: self.value(FieldName::Block).trim().to_string(),
        })
    }

    fn parse_number(&self, name: FieldName) -> Result<i64, FormError> {
        let raw = self.value(name).trim();
        raw.parse::<i64>().map_err(|_| FormError::NotANumber {
            field: name,
            value: raw.to_string(),
        })
    }
}

/// Render one field of the form into `area`.
pub fn render_form_field(buf: &mut Buffer, area: Rect, form: &UnitForm, name: FieldName, focused: bool) {
    let mut field = InputField::new(name.label(), form.value(name)).required(true);
    if focused && form.active() == name {
        field = field.cursor(form.cursor_column());
    }
    field.render(area, buf);
}

pub struct AddFormPanel<'a> {
    form: &'a UnitForm,
    focused: bool,
}

impl<'a> AddFormPanel<'a> {
    pub fn new(form: &'a UnitForm, focused: bool) -> Self {
        Self { form, focused }
    }

    /// Rows taken by the panel including borders.
    pub const HEIGHT: u16 = 7;
}

impl Widget for AddFormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused { Color::Magenta } else { Color::DarkGray };
        let block = Block::default()
            .title(" Add Unit ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Length(2)])
            .split(inner);

        let top = split_columns(rows[0], &[Constraint::Percentage(50), Constraint::Percentage(25), Constraint::Percentage(25)]);
        let bottom = split_columns(rows[2], &[Constraint::Percentage(25), Constraint::Percentage(50), Constraint::Percentage(25)]);

        render_form_field(buf, top[0], self.form, FieldName::ResidentName, self.focused);
        render_form_field(buf, top[1], self.form, FieldName::Floor, self.focused);
        render_form_field(buf, top[2], self.form, FieldName::UnitNumber, self.focused);
        render_form_field(buf, bottom[0], self.form, FieldName::Block, self.focused);
        render_form_field(buf, bottom[1], self.form, FieldName::PhoneNumber, self.focused);

        if bottom[2].height < 2 {
            return;
        }
        let hint = if self.focused { "[Enter] Add" } else { "[a] Add unit" };
        let hint_style = Style::default().fg(if self.focused { Color::Green } else { Color::DarkGray });
        buf.set_stringn(bottom[2].x, bottom[2].y + 1, hint, bottom[2].width as usize, hint_style);
    }
}

/// Horizontal split with a one column gap after every field but the last.
fn split_columns(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    let mut columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.to_vec())
        .split(area)
        .to_vec();
    let last = columns.len().saturating_sub(1);
    for col in columns.iter_mut().take(last) {
        col.width = col.width.saturating_sub(1);
    }
    columns
}
