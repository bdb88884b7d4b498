use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal events on a helper thread. Only key presses and resizes
/// are forwarded; the app redraws after each one.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                if !event::poll(poll_interval).unwrap_or(false) {
                    continue;
                }
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        tx.send(AppEvent::Key(key))
                    }
                    Ok(Event::Resize(w, h)) => tx.send(AppEvent::Resize(w, h)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "terminal read failed");
                        return;
                    }
                };
                if forwarded.is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}
