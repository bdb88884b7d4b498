use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

pub const ANSWERING_HELP: &[(&str, &str)] =
    &[("enter", "submit"), ("ctrl+s", "stats"), ("esc", "exit")];
pub const VALIDATION_HELP: &[(&str, &str)] =
    &[("enter", "next"), ("ctrl+s", "stats"), ("esc", "exit")];
pub const STATISTICS_HELP: &[(&str, &str)] = &[
    ("k/\u{2191}", "up"),
    ("j/\u{2193}", "down"),
    ("o", "order"),
    ("backspace", "back"),
    ("esc", "exit"),
];

const SEPARATOR: &str = " \u{2022} ";

/// `key action • key action` hints, wrapped between items.
pub struct HelpBar<'a> {
    items: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    pub fn new(items: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { items, theme }
    }

    pub fn height(&self, width: u16) -> u16 {
        help_height(self.items, width)
    }

    fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        pack_items(self.items, width as usize)
            .into_iter()
            .map(|row| {
                let mut spans = Vec::with_capacity(row.len() * 3);
                for (i, (key, msg)) in row.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled(SEPARATOR, Style::default().fg(colors.border())));
                    }
                    spans.push(Span::styled(*key, Style::default().fg(colors.help_key())));
                    spans.push(Span::styled(
                        format!(" {msg}"),
                        Style::default().fg(colors.help_msg()),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    }
}

/// Rows needed to show every hint within `width` columns.
pub fn help_height(items: &[(&str, &str)], width: u16) -> u16 {
    pack_items(items, width as usize).len() as u16
}

/// Greedily fills rows of at most `width` columns. An item wider than the row
/// still gets a row of its own.
fn pack_items<'a>(items: &'a [(&'a str, &'a str)], width: usize) -> Vec<Vec<(&'a str, &'a str)>> {
    if width == 0 {
        return Vec::new();
    }
    let sep = SEPARATOR.chars().count();
    let mut rows: Vec<Vec<(&str, &str)>> = Vec::new();
    let mut current: Vec<(&str, &str)> = Vec::new();
    let mut used = 0;

    for &(key, msg) in items {
        let item = key.chars().count() + 1 + msg.chars().count();
        if !current.is_empty() && used + sep + item > width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used += if current.is_empty() { item } else { sep + item };
        current.push((key, msg));
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width)).render(area, buf);
    }
}
