//! Domain entity definitions.

mod record;

pub use record::{Record, RecordDraft, RecordId, seed_records};
