//! Row actions cell
//!
//! Edit and delete triggers for one table row. Holds no state; the page
//! decides what a triggered action does.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::units::Unit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Carries the full original record.
    Edit(Unit),
    /// Carries only the record id.
    Delete(String),
}

pub struct RowActions<'a> {
    unit: &'a Unit,
}

impl<'a> RowActions<'a> {
    pub fn new(unit: &'a Unit) -> Self {
        Self { unit }
    }

    pub fn edit(&self) -> RowAction {
        RowAction::Edit(self.unit.clone())
    }

    pub fn delete(&self) -> RowAction {
        RowAction::Delete(self.unit.id.clone())
    }

    pub fn cell() -> Line<'static> {
        Line::from(vec![
            Span::styled("[e]", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Edit "),
            Span::styled("[d]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" Delete"),
        ])
    }

    pub const CELL_WIDTH: u16 = 19;
}
