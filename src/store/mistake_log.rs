use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::engine::prompt::Prompt;

/// Append-only text log of wrong answers, for reviewing outside the app.
pub struct MistakeLog {
    path: PathBuf,
}

impl MistakeLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, prompt: &Prompt, correct: &str, submitted: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_entry(prompt, correct, submitted, &timestamp()).as_bytes())
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

fn format_entry(prompt: &Prompt, correct: &str, submitted: &str, at: &str) -> String {
    format!(
        "Question {} + {} ({at}):\n    Correct: {correct}\n    Answer: {submitted}\n\n",
        prompt.clue(),
        prompt.verb(),
    )
}
