//! Status Line Component
//!
//! Displays mode indicator, messages, and backend info.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

pub struct StatusLine<'a> {
    mode: InputMode,
    command_buffer: Option<&'a str>,
    message: Option<(&'a str, MessageType)>,
    backend: Option<&'a str>,
    item_count: Option<(usize, usize)>,
    search_query: Option<&'a str>,
    last_refresh: Option<&'a str>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            command_buffer: None,
            message: None,
            backend: None,
            item_count: None,
            search_query: None,
            last_refresh: None,
        }
    }

    pub fn command_buffer(mut self, buffer: &'a str) -> Self {
        self.command_buffer = Some(buffer);
        self
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn backend(mut self, location: &'a str) -> Self {
        self.backend = Some(location);
        self
    }

    pub fn item_count(mut self, selected: usize, total: usize) -> Self {
        self.item_count = Some((selected, total));
        self
    }

    pub fn search_query(mut self, query: &'a str) -> Self {
        self.search_query = Some(query);
        self
    }

    pub fn last_refresh(mut self, at: &'a str) -> Self {
        self.last_refresh = Some(at);
        self
    }
}

fn mode_style(mode: InputMode) -> Style {
    let base = Style::default().fg(Color::Black);
    match mode {
        InputMode::Normal => base.bg(Color::Magenta),
        InputMode::Insert => base.bg(Color::Blue),
        InputMode::Modal => base.bg(Color::Cyan),
        InputMode::Command => base.bg(Color::Red),
        InputMode::Search => base.bg(Color::Green),
    }
}

fn command_prefix(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Command => ":",
        InputMode::Search => "/",
        _ => "",
    }
}

fn render_mode_indicator(buf: &mut Buffer, area: Rect, mode: InputMode) -> u16 {
    let style = mode_style(mode).add_modifier(Modifier::BOLD);
    let mode_text = format!(" {} ", mode.indicator());
    buf.set_string(area.x, area.y, &mode_text, style);
    mode_text.len() as u16
}

fn render_command_or_message(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    mode: InputMode,
    command_buffer: Option<&str>,
    message: Option<(&str, MessageType)>,
) {
    let style_base = Style::default().bg(Color::DarkGray);

    if let Some(buffer) = command_buffer {
        let cmd_text = format!("{}{}", command_prefix(mode), buffer);
        buf.set_string(x, y, &cmd_text, style_base.fg(Color::White));
        return;
    }

    if let Some((msg, msg_type)) = message {
        buf.set_string(x, y, msg, style_base.fg(msg_type.color()));
    }
}

fn build_right_spans<'a>(
    search_query: Option<&'a str>,
    item_count: Option<(usize, usize)>,
    last_refresh: Option<&'a str>,
    backend: Option<&'a str>,
) -> Vec<Span<'a>> {
    let bar = Style::default().bg(Color::DarkGray);
    let sep = Span::styled(" | ", bar.fg(Color::White));
    let mut spans: Vec<Span> = Vec::new();

    if let Some(query) = search_query {
        spans.push(Span::styled("Search: ", bar.fg(Color::Yellow)));
        spans.push(Span::styled(query, bar.fg(Color::Magenta).add_modifier(Modifier::BOLD)));
    }

    if let Some((selected, total)) = item_count {
        if !spans.is_empty() { spans.push(sep.clone()); }
        let shown = if total == 0 { 0 } else { selected + 1 };
        spans.push(Span::styled(shown.to_string(), bar.fg(Color::Cyan).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled("/", bar.fg(Color::White)));
        spans.push(Span::styled(total.to_string(), bar.fg(Color::Cyan)));
    }

    if let Some(at) = last_refresh {
        if !spans.is_empty() { spans.push(sep.clone()); }
        spans.push(Span::styled(format!("synced {}", at), bar.fg(Color::Gray)));
    }

    if let Some(location) = backend {
        if !spans.is_empty() { spans.push(sep); }
        spans.push(Span::styled(location, bar.fg(Color::Gray)));
    }

    spans
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mode_width = render_mode_indicator(buf, area, self.mode);
        let x = area.x + mode_width + 1;

        render_command_or_message(buf, x, area.y, self.mode, self.command_buffer, self.message);

        let line = Line::from(build_right_spans(self.search_query, self.item_count, self.last_refresh, self.backend));
        let width = line.width() as u16;
        let right_x = area.x + area.width.saturating_sub(width + 1);
        buf.set_line(right_x, area.y, &line, width);
    }
}

pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn for_mode(mode: InputMode) -> Self {
        Self { hints: hints_for_mode(mode) }
    }
}

fn hints_for_mode(mode: InputMode) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Normal => vec![
            ("a", "add"),
            ("e", "edit"),
            ("d", "delete"),
            ("j/k", "move"),
            ("h/l", "page"),
            ("s/S", "sort"),
            ("p", "page size"),
            ("/", "search"),
            ("r", "refresh"),
            ("q", "quit"),
        ],
        InputMode::Insert => vec![
            ("esc", "back to table"),
            ("tab/shift+tab", "next/prev field"),
            ("enter", "add unit"),
        ],
        InputMode::Modal => vec![
            ("esc", "cancel"),
            ("tab/shift+tab", "next/prev field"),
            ("enter", "save"),
        ],
        InputMode::Command | InputMode::Search => vec![
            ("esc", "cancel"),
            ("enter", "execute"),
        ],
    }
}

fn build_hint_spans<'a>(hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    spans
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(build_hint_spans(&self.hints));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
