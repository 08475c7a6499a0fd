//! Key-hint footer bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Footer bar listing the key bindings available on the current screen.
#[derive(Debug, Clone)]
pub struct FooterBar {
    hints: Vec<(&'static str, &'static str)>,
    accent: Color,
}

impl FooterBar {
    /// Creates a footer from `(key, label)` pairs.
    #[must_use]
    pub fn new(hints: Vec<(&'static str, &'static str)>) -> Self {
        Self {
            hints,
            accent: Color::Cyan,
        }
    }

    /// Sets the key highlight color.
    #[must_use]
    pub const fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }
}

impl Widget for &FooterBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, label)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {label}"), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
