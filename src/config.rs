use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_vocabulary_path")]
    pub vocabulary_path: String,
    #[serde(default = "default_statistics_path")]
    pub statistics_path: String,
    #[serde(default = "default_mistakes_path")]
    pub mistakes_path: String,
    #[serde(default = "default_log_path")]
    pub log_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_answer_char_limit")]
    pub answer_char_limit: usize,
    #[serde(default = "default_fullscreen")]
    pub fullscreen: bool,
}

fn data_file(name: &str) -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("conjdr")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn default_vocabulary_path() -> String {
    "words.xlsx".to_string()
}
fn default_statistics_path() -> String {
    data_file("statistics.toml")
}
fn default_mistakes_path() -> String {
    data_file("mistakes")
}
fn default_log_path() -> String {
    data_file("conjdr.log")
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_answer_char_limit() -> usize {
    30
}
fn default_fullscreen() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary_path: default_vocabulary_path(),
            statistics_path: default_statistics_path(),
            mistakes_path: default_mistakes_path(),
            log_path: default_log_path(),
            log_level: default_log_level(),
            theme: default_theme(),
            answer_char_limit: default_answer_char_limit(),
            fullscreen: default_fullscreen(),
        }
    }
}

impl Config {
    /// Loads the user's config file, or defaults when there is none.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("conjdr")
            .join("config.toml")
    }

    /// Clamps numeric fields and replaces unknown values with defaults.
    pub fn validate(&mut self) {
        self.answer_char_limit = self.answer_char_limit.clamp(1, 200);
        self.log_level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            self.log_level = default_log_level();
        }
        if self.theme.trim().is_empty() {
            self.theme = default_theme();
        }
    }

    /// Input limit that still fits every expected answer.
    pub fn answer_limit_for(&self, longest_answer: usize) -> usize {
        self.answer_char_limit.max(longest_answer)
    }
}
