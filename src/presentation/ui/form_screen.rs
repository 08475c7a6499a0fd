//! Create/edit form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::{Record, RecordDraft, RecordId};
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::TextInput;

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: RecordId },
}

/// Result of a key press on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Consumed,
    /// The draft passed validation and should be sent to the host.
    Submit(RecordDraft),
    Cancel,
}

/// Field currently holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Email,
    Description,
}

impl FormField {
    const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Description,
            Self::Description => Self::Name,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Email => Self::Name,
            Self::Description => Self::Email,
        }
    }
}

/// Form screen holding local draft state distinct from the committed list.
pub struct FormScreen {
    mode: FormMode,
    name: TextInput,
    email: TextInput,
    description: TextInput,
    focus: FormField,
    error: Option<String>,
    accent: Color,
}

impl FormScreen {
    /// Creates an empty form for a new record.
    #[must_use]
    pub fn create(accent: Color) -> Self {
        Self::with_mode(FormMode::Create, RecordDraft::default(), accent)
    }

    /// Creates a form prefilled with an existing record's fields.
    #[must_use]
    pub fn edit(record: &Record, accent: Color) -> Self {
        Self::with_mode(
            FormMode::Edit {
                id: record.id().clone(),
            },
            record.to_draft(),
            accent,
        )
    }

    fn with_mode(mode: FormMode, draft: RecordDraft, accent: Color) -> Self {
        let mut name = TextInput::new("Name").accent(accent);
        name.set_value(draft.name);
        name.set_focused(true);

        let mut email = TextInput::new("Email")
            .placeholder("you@example.com")
            .accent(accent);
        email.set_value(draft.email);

        let mut description = TextInput::new("Description")
            .placeholder("Enter a description...")
            .accent(accent);
        description.set_value(draft.description);

        Self {
            mode,
            name,
            email,
            description,
            focus: FormField::Name,
            error: None,
            accent,
        }
    }

    /// Returns the form mode.
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Returns the current draft.
    #[must_use]
    pub fn draft(&self) -> RecordDraft {
        RecordDraft::new(
            self.name.value(),
            self.email.value(),
            self.description.value(),
        )
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Description => &mut self.description,
        }
    }

    fn set_focus(&mut self, field: FormField) {
        self.focus = field;
        self.name.set_focused(field == FormField::Name);
        self.email.set_focused(field == FormField::Email);
        self.description.set_focused(field == FormField::Description);
    }

    /// Handles a key press, returning the action the controller should take.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if EventHandler::is_submit_event(&key) {
            let draft = self.draft();
            if draft.is_submittable() {
                return FormAction::Submit(draft);
            }
            self.error = Some("Name and email are required".to_string());
            return FormAction::Consumed;
        }

        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focus.next());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focus.previous());
            }
            KeyCode::Char(c) => {
                self.error = None;
                self.focused_input_mut().input_char(c);
            }
            KeyCode::Backspace => {
                self.focused_input_mut().backspace();
            }
            KeyCode::Delete => {
                self.focused_input_mut().delete();
            }
            KeyCode::Left => {
                self.focused_input_mut().move_left();
            }
            KeyCode::Right => {
                self.focused_input_mut().move_right();
            }
            KeyCode::Home => {
                self.focused_input_mut().move_start();
            }
            KeyCode::End => {
                self.focused_input_mut().move_end();
            }
            _ => {}
        }

        FormAction::Consumed
    }

    const fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => " Create New Contact ",
            FormMode::Edit { .. } => " Edit Contact ",
        }
    }
}

impl Widget for &FormScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(self.title());

        let inner = block.inner(area);
        block.render(area, buf);

        let [name_area, email_area, description_area, _, error_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        (&self.name).render(name_area, buf);
        (&self.email).render(email_area, buf);
        (&self.description).render(description_area, buf);

        if let Some(ref message) = self.error {
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))
            .render(error_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut FormScreen, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_create_form_starts_empty_with_name_focused() {
        let form = FormScreen::create(Color::Cyan);
        assert_eq!(form.draft(), RecordDraft::default());
        assert!(form.name.is_focused());
    }

    #[test]
    fn test_edit_form_prefills_fields() {
        let record = Record::new("2", "Jane Smith", "jane.smith@example.com", "designer");
        let form = FormScreen::edit(&record, Color::Cyan);

        assert_eq!(form.draft(), record.to_draft());
        assert_eq!(
            form.mode(),
            &FormMode::Edit {
                id: RecordId::from("2")
            }
        );
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = FormScreen::create(Color::Cyan);
        type_text(&mut form, "Ada");
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "ada@x.com");
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "math");

        assert_eq!(form.draft(), RecordDraft::new("Ada", "ada@x.com", "math"));
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut form = FormScreen::create(Color::Cyan);
        form.handle_key(key(KeyCode::BackTab));
        assert!(form.description.is_focused());

        form.handle_key(key(KeyCode::Tab));
        assert!(form.name.is_focused());
    }

    #[test_case("", "a@x.com"; "blank name")]
    #[test_case("   ", "a@x.com"; "whitespace name")]
    #[test_case("Ada", ""; "blank email")]
    #[test_case("Ada", " \t "; "whitespace email")]
    fn test_blank_required_field_blocks_submit(name: &str, email: &str) {
        let mut form = FormScreen::create(Color::Cyan);
        type_text(&mut form, name);
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, email);

        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Consumed);
        assert!(form.error.is_some());
    }

    #[test]
    fn test_valid_submit_returns_untrimmed_draft() {
        let mut form = FormScreen::create(Color::Cyan);
        type_text(&mut form, " Ada ");
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "ada@x.com");

        match form.handle_key(key(KeyCode::Enter)) {
            FormAction::Submit(draft) => {
                assert_eq!(draft.name, " Ada ");
                assert_eq!(draft.email, "ada@x.com");
                assert_eq!(draft.description, "");
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = FormScreen::create(Color::Cyan);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Cancel);
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = FormScreen::create(Color::Cyan);
        form.handle_key(key(KeyCode::Enter));
        assert!(form.error.is_some());

        form.handle_key(key(KeyCode::Char('A')));
        assert!(form.error.is_none());
    }
}
