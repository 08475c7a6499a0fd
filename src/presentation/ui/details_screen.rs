//! Read-only record details view.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::entities::Record;
use crate::presentation::events::EventHandler;

/// Result of a key press on the details view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsAction {
    Consumed,
    Back,
}

/// Details view over a single record.
pub struct DetailsScreen<'a> {
    record: &'a Record,
    accent: Color,
}

impl<'a> DetailsScreen<'a> {
    #[must_use]
    pub const fn new(record: &'a Record, accent: Color) -> Self {
        Self { record, accent }
    }

    /// Handles a key press.
    #[must_use]
    pub fn handle_key(key: KeyEvent) -> DetailsAction {
        if EventHandler::is_back_event(&key) {
            DetailsAction::Back
        } else {
            DetailsAction::Consumed
        }
    }

    fn field_line(label: &'static str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(value),
        ])
    }
}

impl Widget for &DetailsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(" Contact Details ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [name_area, email_area, description_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(DetailsScreen::field_line("Name: ", self.record.name()))
            .render(name_area, buf);
        Paragraph::new(DetailsScreen::field_line("Email: ", self.record.email()))
            .render(email_area, buf);
        Paragraph::new(DetailsScreen::field_line(
            "Description: ",
            self.record.description(),
        ))
        .wrap(Wrap { trim: false })
        .render(description_area, buf);
    }
}
