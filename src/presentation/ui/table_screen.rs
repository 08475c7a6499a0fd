//! Table view listing all records.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::domain::entities::{Record, RecordId};
use crate::presentation::events::EventHandler;

/// Result of a key press on the table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Consumed,
    Quit,
    ViewDetails(Record),
    Edit(Record),
    Delete(RecordId),
    Create,
}

/// Selection state for the table view.
#[derive(Debug, Default)]
pub struct TableScreenState {
    table_state: TableState,
}

impl TableScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently selected record, if any.
    #[must_use]
    pub fn selected<'a>(&self, records: &'a [Record]) -> Option<&'a Record> {
        self.table_state
            .selected()
            .and_then(|index| records.get(index))
    }

    /// Keeps the selection inside the list after the cache changed.
    ///
    /// A list refresh never creates a selection; rows stay unselected
    /// until the user navigates.
    pub fn clamp(&mut self, len: usize) {
        match self.table_state.selected() {
            Some(_) if len == 0 => self.table_state.select(None),
            Some(index) if index >= len => self.table_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self
            .table_state
            .selected()
            .map_or(0, |index| (index + 1).min(len - 1));
        self.table_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let previous = self
            .table_state
            .selected()
            .map_or(0, |index| index.saturating_sub(1));
        self.table_state.select(Some(previous));
    }

    /// Handles a key press, returning the action the controller should take.
    pub fn handle_key(&mut self, key: KeyEvent, records: &[Record]) -> TableAction {
        if EventHandler::is_quit_event(&key) {
            return TableAction::Quit;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(records.len());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
            }
            KeyCode::Enter | KeyCode::Char('v') => {
                if let Some(record) = self.selected(records) {
                    return TableAction::ViewDetails(record.clone());
                }
            }
            KeyCode::Char('e') => {
                if let Some(record) = self.selected(records) {
                    return TableAction::Edit(record.clone());
                }
            }
            KeyCode::Char('d') => {
                if let Some(record) = self.selected(records) {
                    return TableAction::Delete(record.id().clone());
                }
            }
            KeyCode::Char('n') => {
                return TableAction::Create;
            }
            _ => {}
        }

        TableAction::Consumed
    }
}

/// Render type for the table view.
pub struct TableScreen<'a> {
    records: &'a [Record],
    show_ids: bool,
    accent: Color,
}

impl<'a> TableScreen<'a> {
    #[must_use]
    pub const fn new(records: &'a [Record], show_ids: bool, accent: Color) -> Self {
        Self {
            records,
            show_ids,
            accent,
        }
    }
}

impl StatefulWidget for TableScreen<'_> {
    type State = TableScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(format!(" Contacts ({}) ", self.records.len()));

        if self.records.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new("No contacts yet. Press n to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let header_style = Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD);

        let (header, widths): (Row<'_>, Vec<Constraint>) = if self.show_ids {
            (
                Row::new(vec!["Id", "Name", "Email"]).style(header_style),
                vec![
                    Constraint::Length(8),
                    Constraint::Percentage(40),
                    Constraint::Percentage(60),
                ],
            )
        } else {
            (
                Row::new(vec!["Name", "Email"]).style(header_style),
                vec![Constraint::Percentage(40), Constraint::Percentage(60)],
            )
        };

        let rows = self.records.iter().map(|record| {
            if self.show_ids {
                Row::new(vec![
                    record.id().as_str().to_string(),
                    record.name().to_string(),
                    record.email().to_string(),
                ])
            } else {
                Row::new(vec![record.name().to_string(), record.email().to_string()])
            }
        });

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        StatefulWidget::render(table, area, buf, &mut state.table_state);
    }
}
