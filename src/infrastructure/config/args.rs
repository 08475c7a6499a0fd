use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rolodex",
    version,
    about = "A lightweight terminal contact panel",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Show the id column in the table view.
    #[arg(long)]
    pub show_ids: Option<bool>,

    /// Accent color (ratatui color name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
