//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

const APP_NAME: &str = "rolodex";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "rolodex";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, from the config file merged with CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the id column in the table view.
    #[serde(default)]
    pub show_ids: bool,

    /// Accent color (ratatui color name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl UiConfig {
    /// Parses the configured accent color, falling back to cyan.
    #[must_use]
    pub fn accent(&self) -> ratatui::style::Color {
        ratatui::style::Color::from_str(&self.accent_color)
            .unwrap_or(ratatui::style::Color::Cyan)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_ids: false,
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "cyan".to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration. CLI wins.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(show_ids) = args.show_ids {
            self.ui.show_ids = show_ids;
        }
        if let Some(accent_color) = args.accent_color {
            self.ui.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("rolodex.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
        }
    }
}
