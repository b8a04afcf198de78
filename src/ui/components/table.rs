//! Unit Table Component
//!
//! Sortable, searchable, paginated table of unit rows.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, Widget},
};

use crate::units::view::{filter_rows, project, sort_rows};
use crate::units::{SortColumn, SortDirection, Unit, UnitRow};

use super::layout::{render_empty_message, truncate_with_ellipsis};
use super::row_actions::RowActions;

pub const PAGE_SIZES: [usize; 3] = [5, 10, 15];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewState {
    /// Index into the visible (filtered and sorted) rows.
    pub selected: usize,
    pub page_size: usize,
    pub sort: Option<(SortColumn, SortDirection)>,
    pub search: Option<String>,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::new(PAGE_SIZES[0])
    }
}

impl TableViewState {
    pub fn new(page_size: usize) -> Self {
        let page_size = if PAGE_SIZES.contains(&page_size) { page_size } else { PAGE_SIZES[0] };
        Self { selected: 0, page_size, sort: None, search: None }
    }

    /// Rows as shown: projected from the collection, filtered, then sorted.
    pub fn visible_rows(&self, units: &[Unit]) -> Vec<UnitRow> {
        let mut rows = filter_rows(project(units), self.search.as_deref());
        if let Some((column, direction)) = self.sort {
            sort_rows(&mut rows, column, direction);
        }
        rows
    }

    pub fn page(&self) -> usize {
        self.selected / self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = (self.page() * self.page_size).min(total);
        start..(start + self.page_size).min(total)
    }

    /// Keep the selection inside the row count after the rows changed.
    pub fn clamp(&mut self, total: usize) {
        self.selected = self.selected.min(total.saturating_sub(1));
    }

    pub fn move_down(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn top(&mut self) {
        self.selected = 0;
    }

    pub fn bottom(&mut self, total: usize) {
        self.selected = total.saturating_sub(1);
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page() + 1 < self.page_count(total) {
            self.selected = (self.page() + 1) * self.page_size;
        }
    }

    pub fn prev_page(&mut self) {
        self.selected = self.page().saturating_sub(1) * self.page_size;
    }

    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        self.page_size = size;
        true
    }

    pub fn cycle_page_size(&mut self) {
        let idx = PAGE_SIZES.iter().position(|&s| s == self.page_size).unwrap_or(0);
        self.page_size = PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()];
    }

    /// Unsorted, then each column ascending in turn, then unsorted again.
    pub fn sort_next(&mut self) {
        self.sort = match self.sort {
            None => Some((SortColumn::ALL[0], SortDirection::Ascending)),
            Some((column, _)) if column == SortColumn::ALL[SortColumn::ALL.len() - 1] => None,
            Some((column, _)) => Some((column.next(), SortDirection::Ascending)),
        };
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = Some((column, SortDirection::Ascending));
    }

    pub fn toggle_sort_direction(&mut self) {
        if let Some((column, direction)) = self.sort {
            self.sort = Some((column, direction.toggle()));
        }
    }

    pub fn set_search(&mut self, query: Option<String>) {
        self.search = query.filter(|q| !q.trim().is_empty());
        self.selected = 0;
    }

    pub fn summary(&self, total: usize, unfiltered: usize) -> String {
        let range = self.page_range(total);
        let shown = if total == 0 {
            "Showing 0 entries".to_string()
        } else {
            format!("Showing {} to {} of {} entries", range.start + 1, range.end, total)
        };
        if self.search.is_some() && total != unfiltered {
            format!("{} (filtered from {})", shown, unfiltered)
        } else {
            shown
        }
    }
}

pub struct UnitTable<'a> {
    rows: &'a [UnitRow],
    state: &'a TableViewState,
    unfiltered: usize,
    focused: bool,
}

impl<'a> UnitTable<'a> {
    pub fn new(rows: &'a [UnitRow], state: &'a TableViewState, unfiltered: usize) -> Self {
        Self { rows, state, unfiltered, focused: true }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

fn header_row(sort: Option<(SortColumn, SortDirection)>) -> Row<'static> {
    let mut cells: Vec<Cell> = SortColumn::ALL
        .iter()
        .map(|&col| match sort {
            Some((c, dir)) if c == col => Cell::from(format!("{} {}", col.header(), dir.arrow()))
                .style(Style::default().fg(Color::Yellow)),
            _ => Cell::from(col.header()),
        })
        .collect();
    cells.push(Cell::from("Actions"));
    Row::new(cells).style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
}

fn column_widths() -> [Constraint; 6] {
    [
        Constraint::Length(7),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Min(16),
        Constraint::Length(16),
        Constraint::Length(RowActions::CELL_WIDTH),
    ]
}

fn data_row(row: &UnitRow, highlighted: bool) -> Row<'static> {
    let mut cells: Vec<Cell> = SortColumn::ALL
        .iter()
        .map(|&col| Cell::from(truncate_with_ellipsis(row.cell(col), 32)))
        .collect();
    let actions = if highlighted { RowActions::cell() } else { Line::from("") };
    cells.push(Cell::from(actions));

    let style = if highlighted {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Row::new(cells).style(style)
}

impl Widget for UnitTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.rows.len();
        let border = if self.focused { Color::Magenta } else { Color::DarkGray };
        let block = Block::default()
            .title(" Units ")
            .title_bottom(Line::from(format!(
                " {} │ page {}/{} │ {} per page ",
                self.state.summary(total, self.unfiltered),
                self.state.page() + 1,
                self.state.page_count(total),
                self.state.page_size,
            )))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        if total == 0 {
            let msg = if self.state.search.is_some() { "No matching units" } else { "No units yet. Press 'a' to add one." };
            render_empty_message(inner, buf, msg);
            return;
        }

        let range = self.state.page_range(total);
        let selected = self.state.selected;
        let rows: Vec<Row> = self.rows[range.clone()]
            .iter()
            .enumerate()
            .map(|(i, row)| data_row(row, self.focused && range.start + i == selected))
            .collect();

        Table::new(rows, column_widths())
            .header(header_row(self.state.sort))
            .column_spacing(1)
            .render(inner, buf);
    }
}
