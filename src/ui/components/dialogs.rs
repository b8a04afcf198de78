//! Dialog popups (edit modal)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use super::form::{render_form_field, FieldName, UnitForm};
use super::layout::{centered_rect_fixed, create_popup_block};

/// Edit popup drawn over the table while a record is being edited.
pub struct EditModal<'a> {
    form: &'a UnitForm,
    unit_id: &'a str,
}

impl<'a> EditModal<'a> {
    pub fn new(form: &'a UnitForm, unit_id: &'a str) -> Self {
        Self { form, unit_id }
    }
}

const MODAL_WIDTH: u16 = 50;
// borders + five 2-row fields with gaps + hint line
const MODAL_HEIGHT: u16 = 2 + 5 * 3 + 1;

impl Widget for EditModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect_fixed(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(popup_area, buf);

        let title = format!(" Edit Unit {} ", self.unit_id);
        let block = create_popup_block(&title, Color::Magenta);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);
        if inner.is_empty() {
            return;
        }

        let mut y = inner.y;
        for name in FieldName::ORDER {
            if y + 2 > inner.y + inner.height {
                break;
            }
            render_form_field(buf, Rect::new(inner.x, y, inner.width, 2), self.form, name, true);
            y += 3;
        }

        render_modal_hint(buf, inner.x, inner.y + inner.height.saturating_sub(1), inner.width);
    }
}

fn render_modal_hint(buf: &mut Buffer, x: u16, y: u16, width: u16) {
    let hint = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" Cancel"),
    ]);
    buf.set_line(x, y, &hint, width);
}
