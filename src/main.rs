mod app;
mod config;
mod engine;
mod error;
mod event;
mod logging;
mod session;
mod store;
mod ui;
mod vocab;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};

use app::{App, AppScreen, Effect};
use config::Config;
use engine::catalog;
use engine::sampler::QuestionSampler;
use engine::stats::StatisticsStore;
use error::{ExitStatus, FatalError};
use event::{AppEvent, EventHandler};
use session::quiz::QuizSession;
use store::mistake_log::MistakeLog;
use store::toml_store::TomlStore;
use ui::components::quiz_box::QuizBox;
use ui::components::stats_list::StatsList;
use ui::layout::box_area;
use ui::theme::Theme;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Parser)]
#[command(
    name = "conjdr",
    version,
    about = "Terminal verb conjugation drill with adaptive question selection"
)]
struct Cli {
    #[arg(short, long, help = "Vocabulary workbook (.xlsx, .xls, .ods)")]
    words: Option<String>,

    #[arg(short, long, help = "Statistics file")]
    statistics: Option<String>,

    #[arg(short, long, help = "Mistake log file")]
    mistakes: Option<String>,

    #[arg(short, long, help = "Log file")]
    log: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Start outside the alternate screen")]
    inline: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(words) = self.words {
            config.vocabulary_path = words;
        }
        if let Some(statistics) = self.statistics {
            config.statistics_path = statistics;
        }
        if let Some(mistakes) = self.mistakes {
            config.mistakes_path = mistakes;
        }
        if let Some(log) = self.log {
            config.log_path = log;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.inline {
            config.fullscreen = false;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::from(ExitStatus::Ok.code()),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_status().code())
        }
    }
}

fn run(cli: Cli) -> Result<(), FatalError> {
    let mut config = Config::load().map_err(FatalError::Config)?;
    cli.apply(&mut config);
    config.validate();

    let _log_guard = logging::init(Path::new(&config.log_path), &config.log_level)
        .map_err(FatalError::Logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let result = drill(&config);
    if let Err(err) = &result {
        tracing::error!(error = %err, status = err.exit_status().code(), "exiting");
    }
    result
}

fn drill(config: &Config) -> Result<(), FatalError> {
    let table = vocab::read_workbook(Path::new(&config.vocabulary_path))?;
    let (mut store, report) = catalog::build(&table);
    tracing::info!(
        path = %config.vocabulary_path,
        prompts = report.prompts,
        missing_forms = report.missing_forms,
        duplicates = report.duplicates,
        "vocabulary loaded"
    );
    if store.is_empty() {
        return Err(FatalError::EmptyCatalog);
    }

    let statistics = TomlStore::new(PathBuf::from(&config.statistics_path));
    if let Some(snapshot) = statistics.load().map_err(FatalError::StatisticsFile)? {
        store.reconcile(&snapshot)?;
    }

    let session = QuizSession::start(store, QuestionSampler::from_entropy())?;
    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        tracing::warn!(
            theme = %config.theme,
            available = ?Theme::available_themes(),
            "unknown theme, using default"
        );
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));
    let longest_answer = session.store().longest_answer();
    let answer_char_limit = config.answer_limit_for(longest_answer);
    if answer_char_limit > config.answer_char_limit {
        tracing::info!(
            configured = config.answer_char_limit,
            longest_answer,
            "raising answer limit to fit the vocabulary"
        );
    }
    let mut app = App::new(
        session,
        MistakeLog::new(PathBuf::from(&config.mistakes_path)),
        theme,
        answer_char_limit,
        config.fullscreen,
    );

    let mut terminal = setup_terminal(app.fullscreen).map_err(FatalError::Terminal)?;
    let events = EventHandler::new(Duration::from_millis(250));
    let result = run_app(&mut terminal, &mut app, &events);
    if let Err(err) = restore_terminal(&mut terminal, app.fullscreen) {
        tracing::warn!(error = format!("{err:#}"), "failed to restore terminal");
    }

    // Saved even when the loop ended with an error.
    save_statistics(&statistics, app.session.store());
    result
}

fn setup_terminal(fullscreen: bool) -> anyhow::Result<Term> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if fullscreen
        && let Err(err) = execute!(stdout, EnterAlternateScreen)
    {
        let _ = disable_raw_mode();
        return Err(err).context("failed to enter alternate screen");
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
        .context("failed to initialize terminal")?;
    terminal.clear().context("failed to clear terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term, fullscreen: bool) -> anyhow::Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    if fullscreen {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
    }
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

fn save_statistics(store: &TomlStore, stats: &StatisticsStore) {
    if let Err(err) = store.save(&stats.pack()) {
        tracing::error!(
            path = %store.path().display(),
            error = format!("{err:#}"),
            "failed to save statistics"
        );
        eprintln!("Warning: statistics were not saved: {err:#}");
    }
}

fn run_app(terminal: &mut Term, app: &mut App, events: &EventHandler) -> Result<(), FatalError> {
    let size = terminal
        .size()
        .context("failed to read terminal size")
        .map_err(FatalError::Terminal)?;
    app.resize(Rect::new(0, 0, size.width, size.height));
    loop {
        terminal
            .draw(|frame| render(frame, app))
            .context("failed to draw")
            .map_err(FatalError::Terminal)?;

        match events.next().map_err(FatalError::Terminal)? {
            AppEvent::Key(key) => match app.handle_key(key)? {
                Effect::None => {}
                Effect::Quit => return Ok(()),
                Effect::ToggleFullscreen => {
                    switch_screen(terminal, app.fullscreen).map_err(FatalError::Terminal)?
                }
            },
            AppEvent::Resize(width, height) => app.resize(Rect::new(0, 0, width, height)),
        }
    }
}

fn switch_screen(terminal: &mut Term, fullscreen: bool) -> anyhow::Result<()> {
    if fullscreen {
        execute!(terminal.backend_mut(), EnterAlternateScreen)
            .context("failed to enter alternate screen")?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
    }
    terminal.clear().context("failed to clear terminal")?;
    Ok(())
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    if app.fullscreen {
        let background = Block::default().style(Style::default().bg(app.theme.colors.bg()));
        frame.render_widget(background, area);
    }

    let area = box_area(area, app.fullscreen);
    frame.render_widget(Clear, area);
    match &app.screen {
        AppScreen::Answering => {
            frame.render_widget(QuizBox::new(&app.session, &app.input, None, app.theme), area);
        }
        AppScreen::Validation(verdict) => {
            frame.render_widget(
                QuizBox::new(&app.session, &app.input, Some(verdict), app.theme),
                area,
            );
        }
        AppScreen::Statistics => {
            if let Some(view) = app.stats_view() {
                frame.render_widget(StatsList::new(view, app.session.store(), app.theme), area);
            }
        }
    }
}
