//! Domain layer with the record entity, store, and channel protocol.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// UI/host message protocol.
pub mod protocol;
/// Authoritative record store.
pub mod store;

pub use entities::{Record, RecordDraft, RecordId};
pub use errors::HostError;
pub use protocol::{HostEvent, UiRequest};
pub use store::RecordStore;
