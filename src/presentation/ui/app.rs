//! Main application orchestrator.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::domain::entities::Record;
use crate::domain::protocol::{HostEvent, UiRequest};
use crate::infrastructure::config::UiConfig;
use crate::infrastructure::host::PanelHandle;
use crate::presentation::ui::details_screen::{DetailsAction, DetailsScreen};
use crate::presentation::ui::form_screen::{FormAction, FormMode, FormScreen};
use crate::presentation::ui::table_screen::{TableAction, TableScreen, TableScreenState};
use crate::presentation::widgets::{FooterBar, StatusLine};

/// One variant per view; the details and edit views carry the record they
/// operate on, so a view without a selection cannot be represented.
enum CurrentScreen {
    Table,
    Details { record: Record },
    Edit { form: FormScreen },
    Create { form: FormScreen },
}

/// Root controller: owns the local record cache, the current screen, and the
/// host channel ends.
pub struct App {
    screen: CurrentScreen,
    records: Vec<Record>,
    table: TableScreenState,
    handle: PanelHandle,
    host_rx: mpsc::UnboundedReceiver<HostEvent>,
    status: Option<StatusLine>,
    render_fault: Option<String>,
    ui: UiConfig,
    exiting: bool,
}

impl App {
    /// Creates the app over a started host's channel ends.
    #[must_use]
    pub fn new(
        handle: PanelHandle,
        host_rx: mpsc::UnboundedReceiver<HostEvent>,
        ui: UiConfig,
    ) -> Self {
        Self {
            screen: CurrentScreen::Table,
            records: Vec::new(),
            table: TableScreenState::new(),
            handle,
            host_rx,
            status: None,
            render_fault: None,
            ui,
            exiting: false,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        // The one pull the UI ever makes; everything after arrives as
        // confirmations of its own actions.
        self.send_request(UiRequest::GetData);

        let mut terminal_events = EventStream::new();
        self.draw(terminal)?;

        while !self.exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(event) = self.host_rx.recv() => {
                    self.handle_host_event(event);
                }

                Some(Ok(event)) = terminal_event => {
                    self.handle_terminal_event(&event);
                }
            }

            self.draw(terminal)?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if self.render_fault.is_none() {
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                terminal.draw(|frame| self.render(frame)).map(|_| ())
            }));

            match outcome {
                Ok(result) => return result.map_err(Into::into),
                Err(panic_info) => {
                    let message = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        (*s).to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "unknown panic".to_string()
                    };

                    error!(panic = %message, "Rendering fault, falling back to static screen");
                    self.render_fault = Some(message);
                }
            }
        }

        terminal.draw(|frame| self.render(frame))?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        if let Some(ref message) = self.render_fault {
            let text = format!(
                "Something went wrong in the contact panel.\n\nError: {message}\n\nCheck the log file for more details."
            );
            frame.render_widget(
                Paragraph::new(text).style(Style::default().fg(Color::Red)),
                frame.area(),
            );
            return;
        }

        let accent = self.ui.accent();
        let [content_area, status_area, footer_area] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        match &self.screen {
            CurrentScreen::Table => {
                frame.render_stateful_widget(
                    TableScreen::new(&self.records, self.ui.show_ids, accent),
                    content_area,
                    &mut self.table,
                );
            }
            CurrentScreen::Details { record } => {
                let details = DetailsScreen::new(record, accent);
                frame.render_widget(&details, content_area);
            }
            CurrentScreen::Edit { form } | CurrentScreen::Create { form } => {
                frame.render_widget(form, content_area);
            }
        }

        if let Some(ref status) = self.status {
            frame.render_widget(status, status_area);
        }

        let footer = FooterBar::new(self.key_hints()).accent(accent);
        frame.render_widget(&footer, footer_area);
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.screen {
            CurrentScreen::Table => vec![
                ("↑/↓", "select"),
                ("Enter", "view"),
                ("e", "edit"),
                ("n", "new"),
                ("d", "delete"),
                ("q", "quit"),
            ],
            CurrentScreen::Details { .. } => vec![("Esc", "back to table")],
            CurrentScreen::Edit { .. } | CurrentScreen::Create { .. } => vec![
                ("Tab", "next field"),
                ("Enter", "save"),
                ("Esc", "cancel"),
            ],
        }
    }

    fn handle_terminal_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            self.handle_key(*key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any screen, including mid-form.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.exiting = true;
            return;
        }

        let screen = std::mem::replace(&mut self.screen, CurrentScreen::Table);
        self.screen = match screen {
            CurrentScreen::Table => match self.table.handle_key(key, &self.records) {
                TableAction::Quit => {
                    self.exiting = true;
                    CurrentScreen::Table
                }
                TableAction::ViewDetails(record) => CurrentScreen::Details { record },
                TableAction::Edit(record) => CurrentScreen::Edit {
                    form: FormScreen::edit(&record, self.ui.accent()),
                },
                TableAction::Create => CurrentScreen::Create {
                    form: FormScreen::create(self.ui.accent()),
                },
                TableAction::Delete(id) => {
                    self.send_request(UiRequest::DeleteEntry { id });
                    CurrentScreen::Table
                }
                TableAction::Consumed => CurrentScreen::Table,
            },

            CurrentScreen::Details { record } => match DetailsScreen::handle_key(key) {
                DetailsAction::Back => CurrentScreen::Table,
                DetailsAction::Consumed => CurrentScreen::Details { record },
            },

            CurrentScreen::Edit { mut form } => match form.handle_key(key) {
                FormAction::Submit(draft) => {
                    let FormMode::Edit { id } = form.mode().clone() else {
                        unreachable!("edit screen always holds an edit-mode form");
                    };
                    self.send_request(UiRequest::UpdateEntry {
                        data: Record::from_draft(id, draft),
                    });
                    CurrentScreen::Table
                }
                FormAction::Cancel => CurrentScreen::Table,
                FormAction::Consumed => CurrentScreen::Edit { form },
            },

            CurrentScreen::Create { mut form } => match form.handle_key(key) {
                FormAction::Submit(draft) => {
                    self.send_request(UiRequest::CreateEntry { data: draft });
                    CurrentScreen::Table
                }
                FormAction::Cancel => CurrentScreen::Table,
                FormAction::Consumed => CurrentScreen::Create { form },
            },
        };
    }

    /// Reconciles the local cache with a host event. Created/updated
    /// confirmations force the table view, interrupting an open form.
    fn handle_host_event(&mut self, event: HostEvent) {
        let force_table = event.forces_table_view();

        match event {
            HostEvent::DataUpdate { data } => {
                debug!(count = data.len(), "Received full list");
                self.records = data;
            }
            HostEvent::EntryCreated { data } => {
                info!(id = %data.id(), "Contact created");
                self.records.push(data);
                self.status = Some(StatusLine::success("Contact created"));
            }
            HostEvent::EntryUpdated { data } => {
                info!(id = %data.id(), "Contact updated");
                if let Some(slot) = self.records.iter_mut().find(|r| r.id() == data.id()) {
                    *slot = data;
                }
                self.status = Some(StatusLine::success("Contact updated"));
            }
            HostEvent::EntryDeleted { id } => {
                info!(id = %id, "Contact deleted");
                self.records.retain(|record| record.id() != &id);
                self.status = Some(StatusLine::info("Contact deleted"));
            }
        }

        if force_table {
            self.screen = CurrentScreen::Table;
        }
        self.table.clamp(self.records.len());
    }

    fn send_request(&mut self, request: UiRequest) {
        if let Err(e) = self.handle.send(request) {
            error!(error = %e, "Failed to reach panel host");
            self.status = Some(StatusLine::error(format!("Host unavailable: {e}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{RecordDraft, RecordId, seed_records};
    use crate::infrastructure::host::PanelHost;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn started_app() -> App {
        let mut host = PanelHost::new();
        let (handle, rx) = host.start().unwrap();
        App::new(handle, rx, UiConfig::default())
    }

    async fn drain_one(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(1), app.host_rx.recv())
            .await
            .expect("timed out waiting for host event")
            .expect("host closed event channel");
        app.handle_host_event(event);
    }

    #[tokio::test]
    async fn test_startup_get_data_fills_cache() {
        let mut app = started_app();
        app.send_request(UiRequest::GetData);
        drain_one(&mut app).await;

        assert_eq!(app.records.len(), 3);
        assert!(matches!(app.screen, CurrentScreen::Table));
    }

    #[tokio::test]
    async fn test_entry_created_forces_table_from_create_view() {
        let mut app = started_app();
        app.records = seed_records();
        app.handle_key(key(KeyCode::Char('n')));
        assert!(matches!(app.screen, CurrentScreen::Create { .. }));

        app.handle_host_event(HostEvent::EntryCreated {
            data: Record::new("4", "A", "a@x.com", ""),
        });

        assert!(matches!(app.screen, CurrentScreen::Table));
        assert_eq!(app.records.len(), 4);
    }

    #[tokio::test]
    async fn test_entry_updated_forces_table_from_edit_view() {
        let mut app = started_app();
        app.records = seed_records();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('e')));
        assert!(matches!(app.screen, CurrentScreen::Edit { .. }));

        app.handle_host_event(HostEvent::EntryUpdated {
            data: Record::new("1", "John Doe", "john@new.example.com", ""),
        });

        assert!(matches!(app.screen, CurrentScreen::Table));
        assert_eq!(app.records[0].email(), "john@new.example.com");
        assert_eq!(app.records.len(), 3);
    }

    #[tokio::test]
    async fn test_entry_deleted_reconciles_cache_without_forcing_view() {
        let mut app = started_app();
        app.records = seed_records();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, CurrentScreen::Details { .. }));

        app.handle_host_event(HostEvent::EntryDeleted {
            id: RecordId::from("3"),
        });

        assert!(matches!(app.screen, CurrentScreen::Details { .. }));
        assert_eq!(app.records.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_create_form_sends_nothing() {
        let mut app = started_app();
        app.records = seed_records();
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Enter));

        // Still on the form, and the host never saw a create request.
        assert!(matches!(app.screen, CurrentScreen::Create { .. }));
        let pending = tokio::time::timeout(Duration::from_millis(50), app.host_rx.recv()).await;
        assert!(pending.is_err());
    }

    #[tokio::test]
    async fn test_full_create_flow_round_trips_through_host() {
        let mut app = started_app();
        app.send_request(UiRequest::GetData);
        drain_one(&mut app).await;

        app.handle_key(key(KeyCode::Char('n')));
        for c in "Ada".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "ada@x.com".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, CurrentScreen::Table));

        drain_one(&mut app).await;
        assert_eq!(app.records.len(), 4);
        assert_eq!(app.records[3].name(), "Ada");
    }

    #[tokio::test]
    async fn test_delete_key_round_trips_through_host() {
        let mut app = started_app();
        app.send_request(UiRequest::GetData);
        drain_one(&mut app).await;

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('d')));
        drain_one(&mut app).await;

        assert_eq!(app.records.len(), 2);
        assert_eq!(app.records[0].id().as_str(), "1");
        assert_eq!(app.records[1].id().as_str(), "3");
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut app = started_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.exiting);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_from_form() {
        let mut app = started_app();
        app.records = seed_records();
        app.handle_key(key(KeyCode::Char('n')));

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.exiting);
    }

    #[tokio::test]
    async fn test_draft_submission_preserves_edit_id() {
        let mut app = started_app();
        app.send_request(UiRequest::GetData);
        drain_one(&mut app).await;

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('e')));

        // Append to the prefilled name and save.
        app.handle_key(key(KeyCode::Char('!')));
        app.handle_key(key(KeyCode::Enter));
        drain_one(&mut app).await;

        assert_eq!(app.records.len(), 3);
        assert_eq!(app.records[0].id().as_str(), "1");
        assert_eq!(app.records[0].name(), "John Doe!");
    }

    #[tokio::test]
    async fn test_host_gone_surfaces_status_error() {
        let mut app = started_app();

        // Replace the handle with one whose receiver side is gone.
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        app.handle = PanelHandle::from_sender(tx);

        app.send_request(UiRequest::GetData);
        assert!(app.status.is_some());
    }
}
