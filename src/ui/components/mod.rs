pub mod help_bar;
pub mod quiz_box;
pub mod stats_list;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Padding, Widget};

use crate::ui::layout::{BoxLayout, PADDING_X, PADDING_Y};
use crate::ui::theme::Theme;

fn frame_block() -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .padding(Padding::symmetric(PADDING_X, PADDING_Y))
}

/// Area left inside the box border and padding.
pub fn frame_inner(area: Rect) -> Rect {
    frame_block().inner(area)
}

/// Draws the rounded box and returns the rows inside its padding.
pub fn render_frame(area: Rect, buf: &mut Buffer, theme: &Theme, footer_height: u16) -> BoxLayout {
    let colors = &theme.colors;
    let block = frame_block()
        .border_style(Style::default().fg(colors.border()))
        .style(Style::default().bg(colors.bg()).fg(colors.fg()));
    let inner = block.inner(area);
    block.render(area, buf);
    BoxLayout::new(inner, footer_height)
}

/// `correct ● mistakes ● streak ●`, each dot in its own color.
pub fn tally_spans(correct: u32, mistakes: u32, streak: u32, theme: &Theme) -> Vec<Span<'static>> {
    let colors = &theme.colors;
    let dot = "\u{25cf}";
    vec![
        Span::styled(format!("{correct} "), Style::default().fg(colors.fg())),
        Span::styled(dot, Style::default().fg(colors.correct())),
        Span::styled(format!(" {mistakes} "), Style::default().fg(colors.fg())),
        Span::styled(dot, Style::default().fg(colors.mistake())),
        Span::styled(format!(" {streak} "), Style::default().fg(colors.fg())),
        Span::styled(dot, Style::default().fg(colors.streak())),
    ]
}

pub fn spans_width(spans: &[Span]) -> u16 {
    spans.iter().map(|s| s.width() as u16).sum()
}
