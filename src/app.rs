use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::engine::sampler::SampleError;
use crate::session::quiz::{QuizSession, Verdict};
use crate::session::stats_view::StatsView;
use crate::store::mistake_log::MistakeLog;
use crate::ui::components::stats_list::StatsList;
use crate::ui::layout::{BOX_HEIGHT, BOX_WIDTH, box_area};
use crate::ui::line_input::{InputResult, LineInput};
use crate::ui::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Answering,
    Validation(Verdict),
    Statistics,
}

/// What the event loop must do after a key was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    ToggleFullscreen,
}

pub struct App {
    pub screen: AppScreen,
    pub session: QuizSession,
    pub input: LineInput,
    pub theme: &'static Theme,
    pub fullscreen: bool,
    /// Screen to go back to when the statistics view closes.
    stats_return: Option<AppScreen>,
    stats_view: Option<StatsView>,
    mistakes: MistakeLog,
    /// Last known terminal area.
    screen_area: Rect,
}

impl App {
    pub fn new(
        session: QuizSession,
        mistakes: MistakeLog,
        theme: &'static Theme,
        answer_char_limit: usize,
        fullscreen: bool,
    ) -> Self {
        Self {
            screen: AppScreen::Answering,
            session,
            input: LineInput::new(answer_char_limit),
            theme,
            fullscreen,
            stats_return: None,
            stats_view: None,
            mistakes,
            screen_area: Rect::new(0, 0, BOX_WIDTH, BOX_HEIGHT),
        }
    }

    /// Records the terminal size and keeps the statistics selection on screen.
    pub fn resize(&mut self, area: Rect) {
        self.screen_area = area;
        let rows = self.stats_rows();
        if let Some(view) = self.stats_view.as_mut() {
            view.fit(rows);
        }
    }

    /// Rows of the statistics list that fit in the box at the current size.
    fn stats_rows(&self) -> usize {
        StatsList::rows_in(box_area(self.screen_area, self.fullscreen))
    }

    pub fn stats_view(&self) -> Option<&StatsView> {
        self.stats_view.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Effect, SampleError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Ok(Effect::Quit),
            KeyCode::Char('c') if ctrl => return Ok(Effect::Quit),
            KeyCode::Char('a') if ctrl => {
                self.fullscreen = !self.fullscreen;
                return Ok(Effect::ToggleFullscreen);
            }
            _ => {}
        }

        match self.screen {
            AppScreen::Answering => self.handle_answering_key(key),
            AppScreen::Validation(_) => self.handle_validation_key(key)?,
            AppScreen::Statistics => self.handle_stats_key(key),
        }
        Ok(Effect::None)
    }

    fn handle_answering_key(&mut self, key: KeyEvent) {
        if is_ctrl_s(key) {
            self.go_to_stats();
            return;
        }
        if self.input.handle(key) == InputResult::Submit {
            self.submit_answer();
        }
    }

    fn handle_validation_key(&mut self, key: KeyEvent) -> Result<(), SampleError> {
        if is_ctrl_s(key) {
            self.go_to_stats();
        } else if key.code == KeyCode::Enter {
            self.next_question()?;
        }
        Ok(())
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        if is_ctrl_s(key) || key.code == KeyCode::Backspace {
            self.leave_stats();
            return;
        }
        let rows = self.stats_rows();
        let store = self.session.store();
        let Some(view) = self.stats_view.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => view.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => view.scroll_down(rows),
            KeyCode::Char('o') => view.toggle_sort(store),
            _ => {}
        }
    }

    pub fn submit_answer(&mut self) {
        let Some(verdict) = self.session.submit(self.input.value()) else {
            return;
        };
        if !verdict.correct {
            let question = self.session.question();
            if let Err(err) =
                self.mistakes
                    .append(&question.prompt, &question.correct_answer, &verdict.submitted)
            {
                tracing::warn!(
                    path = %self.mistakes.path().display(),
                    error = %err,
                    "failed to write mistake log"
                );
            }
        }
        self.screen = AppScreen::Validation(verdict);
    }

    pub fn next_question(&mut self) -> Result<(), SampleError> {
        self.session.advance()?;
        self.input.clear();
        self.screen = AppScreen::Answering;
        Ok(())
    }

    pub fn go_to_stats(&mut self) {
        let previous = std::mem::replace(&mut self.screen, AppScreen::Statistics);
        self.stats_return = Some(previous);
        self.stats_view = Some(StatsView::new(self.session.store()));
    }

    pub fn leave_stats(&mut self) {
        self.stats_view = None;
        self.screen = self.stats_return.take().unwrap_or(AppScreen::Answering);
    }
}

fn is_ctrl_s(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL)
}
