//! Infrastructure layer with the host task and configuration adapters.

/// Application configuration.
pub mod config;
/// Panel host task.
pub mod host;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager, UiConfig};
pub use host::{PanelHandle, PanelHost};
