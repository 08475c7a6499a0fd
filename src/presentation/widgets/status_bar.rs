//! Status line widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};

/// Status line severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// One-line status message with a severity color.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    level: StatusLevel,
}

impl StatusLine {
    /// Creates a status line.
    #[must_use]
    pub fn new(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    /// Creates an info status line.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Info)
    }

    /// Creates a success status line.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Success)
    }

    /// Creates a warning status line.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Warning)
    }

    /// Creates an error status line.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Error)
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity level.
    #[must_use]
    pub const fn level(&self) -> StatusLevel {
        self.level
    }
}

impl Widget for &StatusLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        Paragraph::new(self.message.as_str())
            .style(style)
            .render(area, buf);
    }
}
