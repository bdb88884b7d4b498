use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::engine::stats::StatisticsStore;
use crate::session::stats_view::{SortOrder, StatsView};
use crate::ui::components::help_bar::{HelpBar, STATISTICS_HELP, help_height};
use crate::ui::components::{frame_inner, render_frame, spans_width, tally_spans};
use crate::ui::layout::BoxLayout;
use crate::ui::theme::Theme;

/// Scrolling per-prompt statistics.
pub struct StatsList<'a> {
    view: &'a StatsView,
    store: &'a StatisticsStore,
    theme: &'a Theme,
}

impl<'a> StatsList<'a> {
    pub fn new(view: &'a StatsView, store: &'a StatisticsStore, theme: &'a Theme) -> Self {
        Self { view, store, theme }
    }

    /// Prompt rows the list shows when drawn in `area`.
    pub fn rows_in(area: Rect) -> usize {
        let inner = frame_inner(area);
        let layout = BoxLayout::new(inner, help_height(STATISTICS_HELP, inner.width));
        layout.body.height as usize
    }
}

impl Widget for StatsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let help = HelpBar::new(STATISTICS_HELP, self.theme);
        let width = frame_inner(area).width;
        let layout = render_frame(area, buf, self.theme, help.height(width));

        let order = match self.view.sort() {
            SortOrder::Catalog => "vocabulary order",
            SortOrder::Weakest => "weakest first",
        };
        let header = Line::from(vec![
            Span::styled(
                "Statistics",
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({order})"), Style::default().fg(colors.help_msg())),
        ]);
        Paragraph::new(header).render(layout.header, buf);

        let body = layout.body;
        let selected = self.view.selected_index();
        for (row, (index, prompt)) in self.view.visible(body.height as usize).enumerate() {
            let y = body.y + row as u16;
            let stats = self.store.get(prompt).unwrap_or_default();
            let tally = tally_spans(
                stats.correct.into(),
                stats.mistakes.into(),
                stats.streak.into(),
                self.theme,
            );
            let tally_width = spans_width(&tally).min(body.width);

            let (label, style) = if index == selected {
                (
                    format!("> [{prompt}]"),
                    Style::default().fg(colors.question()).add_modifier(Modifier::BOLD),
                )
            } else {
                (format!("  {prompt}"), Style::default().fg(colors.question_stats()))
            };
            let label_width = body.width.saturating_sub(tally_width + 1);
            Paragraph::new(Line::from(Span::styled(label, style)))
                .render(Rect::new(body.x, y, label_width, 1), buf);
            Paragraph::new(Line::from(tally)).render(
                Rect::new(body.x + body.width - tally_width, y, tally_width, 1),
                buf,
            );
        }

        help.render(layout.footer, buf);
    }
}
