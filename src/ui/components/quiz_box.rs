use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::session::quiz::{QuizSession, Verdict};
use crate::ui::components::help_bar::{ANSWERING_HELP, HelpBar, VALIDATION_HELP};
use crate::ui::components::{frame_inner, render_frame, spans_width, tally_spans};
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

const LABEL_WIDTH: usize = 11;

/// The question box for both the answering and the validation screen.
pub struct QuizBox<'a> {
    session: &'a QuizSession,
    input: &'a LineInput,
    verdict: Option<&'a Verdict>,
    theme: &'a Theme,
}

impl<'a> QuizBox<'a> {
    pub fn new(
        session: &'a QuizSession,
        input: &'a LineInput,
        verdict: Option<&'a Verdict>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            input,
            verdict,
            theme,
        }
    }

    fn label(&self, text: &str) -> Span<'static> {
        Span::styled(
            format!("{text:<LABEL_WIDTH$}"),
            Style::default().fg(self.theme.colors.label()),
        )
    }

    fn answer_spans(&self) -> Vec<Span<'a>> {
        let colors = &self.theme.colors;
        match self.verdict {
            Some(verdict) => {
                let color = if verdict.correct {
                    colors.correct()
                } else {
                    colors.mistake()
                };
                vec![Span::styled(verdict.submitted.clone(), Style::default().fg(color))]
            }
            None => {
                let text = Style::default().fg(colors.question());
                let cursor = Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg());
                let (before, at, after) = self.input.render_parts();
                let at = at.map(String::from).unwrap_or_else(|| " ".to_string());
                vec![
                    Span::styled(before, text),
                    Span::styled(at, cursor),
                    Span::styled(after, text),
                ]
            }
        }
    }

    fn status_line(&self) -> Line<'a> {
        let colors = &self.theme.colors;
        match self.verdict {
            Some(verdict) if verdict.correct => Line::from(Span::styled(
                "Correct!",
                Style::default().fg(colors.correct()).add_modifier(Modifier::BOLD),
            )),
            Some(_) => Line::from(vec![
                Span::styled(
                    "Wrong! ",
                    Style::default().fg(colors.mistake()).add_modifier(Modifier::BOLD),
                ),
                Span::styled("Correct answer is: ", Style::default().fg(colors.fg())),
                Span::styled(
                    self.session.question().correct_answer.clone(),
                    Style::default().fg(colors.correct()),
                ),
            ]),
            None => {
                let stats = self.session.question_stats();
                let mut spans = vec![Span::styled(
                    "This question: ",
                    Style::default().fg(colors.question_stats()),
                )];
                spans.extend(tally_spans(
                    stats.correct.into(),
                    stats.mistakes.into(),
                    stats.streak.into(),
                    self.theme,
                ));
                Line::from(spans)
            }
        }
    }
}

impl Widget for QuizBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let help = HelpBar::new(
            if self.verdict.is_some() {
                VALIDATION_HELP
            } else {
                ANSWERING_HELP
            },
            self.theme,
        );
        let width = frame_inner(area).width;
        let layout = render_frame(area, buf, self.theme, help.height(width));

        let title = Span::styled(
            format!("Question {}.", self.session.question_number()),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        );
        Paragraph::new(Line::from(title)).render(layout.header, buf);
        let tally = tally_spans(
            self.session.correct_answers(),
            self.session.wrong_answers(),
            self.session.streak(),
            self.theme,
        );
        let tally_width = spans_width(&tally).min(layout.header.width);
        let tally_area = Rect::new(
            layout.header.x + layout.header.width - tally_width,
            layout.header.y,
            tally_width,
            1,
        );
        Paragraph::new(Line::from(tally)).render(tally_area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(layout.body);

        let prompt = &self.session.question().prompt;
        let value = Style::default().fg(colors.question());
        let mut answer_line = vec![self.label("Verb Form:")];
        answer_line.extend(self.answer_spans());
        let lines = vec![
            Line::from(vec![
                self.label("Form Clue:"),
                Span::styled(prompt.clue().to_string(), value),
            ]),
            Line::from(vec![
                self.label("Verb:"),
                Span::styled(prompt.verb().to_string(), value),
            ]),
            Line::from(answer_line),
        ];
        Paragraph::new(lines).render(rows[0], buf);

        Paragraph::new(self.status_line())
            .wrap(Wrap { trim: true })
            .render(rows[1], buf);

        help.render(layout.footer, buf);
    }
}
