//! Input field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Two-row field: label on top, value below.
pub struct InputField<'a> {
    label: &'a str,
    value: &'a str,
    required: bool,
    cursor: Option<usize>,
}

impl<'a> InputField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self { label, value, required: false, cursor: None }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Marks the field active with the cursor at a character column.
    pub fn cursor(mut self, column: usize) -> Self {
        self.cursor = Some(column);
        self
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let active = self.cursor.is_some();
        let label = if self.required { format!("{}*", self.label) } else { self.label.to_string() };
        buf.set_stringn(area.x, area.y, &label, area.width as usize, label_style(active));

        if area.height < 2 {
            return;
        }
        let input_y = area.y + 1;
        render_input_background(buf, area.x, input_y, area.width, active);

        let width = area.width as usize;
        let cursor = self.cursor.unwrap_or(0);
        let scroll = horizontal_scroll(cursor, width);
        let visible: String = self.value.chars().skip(scroll).take(width).collect();
        buf.set_stringn(area.x, input_y, &visible, width, value_style(active));

        if active {
            render_input_cursor(buf, area.x, input_y, area.width, cursor - scroll);
        }
    }
}

fn horizontal_scroll(cursor: usize, width: usize) -> usize {
    if cursor >= width.saturating_sub(1) {
        cursor.saturating_sub(width.saturating_sub(2))
    } else {
        0
    }
}

fn label_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn value_style(active: bool) -> Style {
    let bg = if active { Color::DarkGray } else { Color::Black };
    Style::default().fg(Color::White).bg(bg)
}

fn render_input_background(buf: &mut Buffer, x: u16, y: u16, width: u16, active: bool) {
    let bg = if active { Color::DarkGray } else { Color::Black };
    for px in x..x + width {
        if let Some(cell) = buf.cell_mut((px, y)) {
            cell.set_bg(bg);
        }
    }
}

fn render_input_cursor(buf: &mut Buffer, x: u16, y: u16, width: u16, column: usize) {
    let cursor_x = x + column as u16;
    if cursor_x >= x + width {
        return;
    }
    if let Some(cell) = buf.cell_mut((cursor_x, y)) {
        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_scroll_keeps_cursor_visible() {
        assert_eq!(horizontal_scroll(3, 10), 0);
        assert_eq!(horizontal_scroll(9, 10), 1);
        assert_eq!(horizontal_scroll(20, 10), 12);
    }

    #[test]
    fn test_renders_label_and_value() {
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        InputField::new("Block", "A").required(true).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "B");
        assert_eq!(buf[(5, 0)].symbol(), "*");
        assert_eq!(buf[(0, 1)].symbol(), "A");
    }
}
