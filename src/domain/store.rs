//! Authoritative record store.

use tracing::debug;

use crate::domain::entities::{Record, RecordDraft, RecordId, seed_records};
use crate::domain::protocol::{HostEvent, UiRequest};

/// The single source of truth for the record list.
///
/// Owned by the host task; all mutation goes through [`RecordStore::handle`]
/// (or the individual operations in tests), so handling is inherently
/// serialized. List order is insertion order and is never reordered.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
}

impl RecordStore {
    /// Creates a store holding the three sample records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(seed_records())
    }

    /// Creates a store from an arbitrary initial list. The id counter starts
    /// one past the largest numeric id so freshly assigned ids never collide.
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|record| record.id().as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        Self { records, next_id }
    }

    /// Returns a snapshot of the current list.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a new record built from the draft and returns it.
    pub fn create(&mut self, draft: RecordDraft) -> Record {
        let id = RecordId::new(self.next_id.to_string());
        self.next_id += 1;

        let record = Record::from_draft(id, draft);
        self.records.push(record.clone());
        record
    }

    /// Replaces the record with a matching id in place, preserving position.
    /// Returns `None` when the id matches nothing; the list is left unchanged.
    pub fn update(&mut self, record: Record) -> Option<Record> {
        let slot = self
            .records
            .iter_mut()
            .find(|existing| existing.id() == record.id())?;
        *slot = record.clone();
        Some(record)
    }

    /// Removes every record with the given id (0 or 1 expected). Idempotent.
    pub fn delete(&mut self, id: &RecordId) {
        self.records.retain(|record| record.id() != id);
    }

    /// Applies a request and returns the event to echo back, if any.
    ///
    /// An update referencing an unknown id is silently dropped (no reply);
    /// a delete is acknowledged unconditionally.
    pub fn handle(&mut self, request: UiRequest) -> Option<HostEvent> {
        match request {
            UiRequest::GetData => Some(HostEvent::DataUpdate {
                data: self.records(),
            }),
            UiRequest::CreateEntry { data } => {
                let record = self.create(data);
                debug!(id = %record.id(), "Record created");
                Some(HostEvent::EntryCreated { data: record })
            }
            UiRequest::UpdateEntry { data } => match self.update(data) {
                Some(record) => Some(HostEvent::EntryUpdated { data: record }),
                None => {
                    debug!("Update for unknown id dropped");
                    None
                }
            },
            UiRequest::DeleteEntry { id } => {
                self.delete(&id);
                Some(HostEvent::EntryDeleted { id })
            }
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
