//! Message protocol between the panel UI and the panel host.
//!
//! Each message carries a `type` discriminator on the wire; in process the
//! variants are checked at compile time. Transport is fire-and-forget: no
//! correlation ids, no acknowledgment tracking, no retries.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Record, RecordDraft, RecordId};

/// Requests sent from the UI to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiRequest {
    /// Ask for the full current list. Sent exactly once at startup.
    GetData,
    /// Append a new record; the host assigns the id.
    CreateEntry { data: RecordDraft },
    /// Replace the record with the matching id in place.
    UpdateEntry { data: Record },
    /// Remove the record with the given id.
    DeleteEntry { id: RecordId },
}

/// Events sent from the host back to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostEvent {
    /// The full current list, in insertion order.
    DataUpdate { data: Vec<Record> },
    /// A record was appended.
    EntryCreated { data: Record },
    /// A record was replaced in place.
    EntryUpdated { data: Record },
    /// A record was removed. Sent even when the id matched nothing.
    EntryDeleted { id: RecordId },
}

impl HostEvent {
    /// Whether the event must force the UI back to the table view,
    /// interrupting an in-progress edit or create form.
    #[must_use]
    pub const fn forces_table_view(&self) -> bool {
        matches!(self, Self::EntryCreated { .. } | Self::EntryUpdated { .. })
    }
}
