use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub border: String,
    pub label: String,
    pub question: String,
    pub question_stats: String,
    pub correct: String,
    pub mistake: String,
    pub streak: String,
    pub cursor_bg: String,
    pub cursor_fg: String,
    pub help_key: String,
    pub help_msg: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // User themes shadow bundled ones.
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("conjdr")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => tracing::warn!(
                        path = %user_theme_path.display(),
                        error = %err,
                        "ignoring invalid user theme"
                    ),
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            border: "#6c7086".to_string(),
            label: "#94e2d5".to_string(),
            question: "#cdd6f4".to_string(),
            question_stats: "#a6adc8".to_string(),
            correct: "#a6e3a1".to_string(),
            mistake: "#f38ba8".to_string(),
            streak: "#f9e2af".to_string(),
            cursor_bg: "#f5e0dc".to_string(),
            cursor_fg: "#1e1e2e".to_string(),
            help_key: "#f5c2e7".to_string(),
            help_msg: "#7f849c".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn label(&self) -> Color { Self::parse_color(&self.label) }
    pub fn question(&self) -> Color { Self::parse_color(&self.question) }
    pub fn question_stats(&self) -> Color { Self::parse_color(&self.question_stats) }
    pub fn correct(&self) -> Color { Self::parse_color(&self.correct) }
    pub fn mistake(&self) -> Color { Self::parse_color(&self.mistake) }
    pub fn streak(&self) -> Color { Self::parse_color(&self.streak) }
    pub fn cursor_bg(&self) -> Color { Self::parse_color(&self.cursor_bg) }
    pub fn cursor_fg(&self) -> Color { Self::parse_color(&self.cursor_fg) }
    pub fn help_key(&self) -> Color { Self::parse_color(&self.help_key) }
    pub fn help_msg(&self) -> Color { Self::parse_color(&self.help_msg) }
}
