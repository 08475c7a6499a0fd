//! Contact record entity.

use serde::{Deserialize, Serialize};

/// Opaque record identifier.
///
/// Ids are plain strings on the wire; the store hands out decimal
/// counter values but nothing here assumes a numeric form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps a raw id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    name: String,
    email: String,
    description: String,
}

impl Record {
    /// Builds a record from its raw parts.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            description: description.into(),
        }
    }

    /// Attaches an id to a draft, producing a full record.
    #[must_use]
    pub fn from_draft(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            description: draft.description,
        }
    }

    /// Copies the editable fields back into a draft.
    #[must_use]
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft::new(&self.name, &self.email, &self.description)
    }

    /// Returns the record id.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The editable fields of a record, without an id.
///
/// Drafts carry whatever the user typed; values are not trimmed on
/// submission, only when checking submittability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Contact name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Free-form description.
    pub description: String,
}

impl RecordDraft {
    /// Builds a draft from its raw parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            description: description.into(),
        }
    }

    /// Whether the draft can be submitted: name and email must be
    /// non-blank after trimming.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// The three sample contacts every fresh store starts with.
#[must_use]
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new(
            "1",
            "John Doe",
            "john.doe@example.com",
            "Software developer with 5 years of experience in web development.",
        ),
        Record::new(
            "2",
            "Jane Smith",
            "jane.smith@example.com",
            "UI/UX designer passionate about creating user-friendly interfaces.",
        ),
        Record::new(
            "3",
            "Bob Johnson",
            "bob.johnson@example.com",
            "Project manager with expertise in agile methodologies.",
        ),
    ]
}
