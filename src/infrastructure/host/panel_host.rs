//! Panel host task.
//!
//! The host owns the authoritative [`RecordStore`] and answers UI requests
//! over an in-process channel pair. [`PanelHost::start`] spawns the task and
//! hands back a request handle plus the event receiver; requests are applied
//! one at a time in arrival order, so the store needs no locking.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::errors::HostError;
use crate::domain::protocol::{HostEvent, UiRequest};
use crate::domain::store::RecordStore;

/// Handle for dispatching requests to a running host task.
///
/// Sends are fire-and-forget; the reply, if any, arrives on the event
/// receiver returned by [`PanelHost::start`].
#[derive(Debug, Clone)]
pub struct PanelHandle {
    request_tx: mpsc::UnboundedSender<UiRequest>,
}

impl PanelHandle {
    /// Dispatches a request to the host.
    ///
    /// # Errors
    /// Returns `HostError::ChannelClosed` if the host task has stopped.
    pub fn send(&self, request: UiRequest) -> Result<(), HostError> {
        self.request_tx
            .send(request)
            .map_err(|e| HostError::channel_closed(format!("{:?}", e.0)))
    }

    /// Builds a handle over a raw sender, for wiring up test doubles.
    #[cfg(test)]
    pub(crate) fn from_sender(request_tx: mpsc::UnboundedSender<UiRequest>) -> Self {
        Self { request_tx }
    }
}

/// The authoritative-store side of the panel, run as a spawned task.
pub struct PanelHost {
    store: Option<RecordStore>,
    running: Arc<AtomicBool>,
}

impl PanelHost {
    /// Creates a host seeded with the three sample records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(RecordStore::new())
    }

    /// Creates a host over a prepared store.
    #[must_use]
    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store: Some(store),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the host task is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Spawns the host task.
    ///
    /// # Errors
    /// Returns `HostError::AlreadyStarted` if the task is already running.
    pub fn start(
        &mut self,
    ) -> Result<(PanelHandle, mpsc::UnboundedReceiver<HostEvent>), HostError> {
        if self.running.load(Ordering::SeqCst) {
            return Err(HostError::AlreadyStarted);
        }
        let Some(store) = self.store.take() else {
            return Err(HostError::AlreadyStarted);
        };

        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let running = self.running.clone();
        running.store(true, Ordering::SeqCst);

        tokio::spawn(async move {
            run_host_loop(store, request_rx, event_tx).await;
            running.store(false, Ordering::SeqCst);
        });

        info!("Panel host started");
        Ok((PanelHandle { request_tx }, event_rx))
    }
}

impl Default for PanelHost {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_host_loop(
    mut store: RecordStore,
    mut request_rx: mpsc::UnboundedReceiver<UiRequest>,
    event_tx: mpsc::UnboundedSender<HostEvent>,
) {
    while let Some(request) = request_rx.recv().await {
        debug!(request = ?request, "Handling panel request");

        if let Some(event) = store.handle(request)
            && event_tx.send(event).is_err()
        {
            warn!("Event receiver dropped, stopping panel host");
            break;
        }
    }

    info!(records = store.len(), "Panel host stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Record, RecordDraft, RecordId};
    use std::time::Duration;

    async fn recv(rx: &mut mpsc::UnboundedReceiver<HostEvent>) -> HostEvent {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out waiting for host event")
            .expect("host closed event channel")
    }

    #[tokio::test]
    async fn test_get_data_returns_seeds() {
        let mut host = PanelHost::new();
        let (handle, mut rx) = host.start().unwrap();

        handle.send(UiRequest::GetData).unwrap();

        match recv(&mut rx).await {
            HostEvent::DataUpdate { data } => {
                assert_eq!(data.len(), 3);
                assert_eq!(data[0].name(), "John Doe");
            }
            other => panic!("expected DataUpdate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_data_round_trip() {
        let mut host = PanelHost::new();
        let (handle, mut rx) = host.start().unwrap();

        handle
            .send(UiRequest::CreateEntry {
                data: RecordDraft::new("A", "a@x.com", ""),
            })
            .unwrap();

        let created = match recv(&mut rx).await {
            HostEvent::EntryCreated { data } => data,
            other => panic!("expected EntryCreated, got {other:?}"),
        };
        assert_eq!(created.name(), "A");
        assert_eq!(created.email(), "a@x.com");
        assert_eq!(created.description(), "");

        handle.send(UiRequest::GetData).unwrap();
        match recv(&mut rx).await {
            HostEvent::DataUpdate { data } => {
                let matches = data.iter().filter(|r| r.id() == created.id()).count();
                assert_eq!(matches, 1);
                assert_eq!(data.len(), 4);
            }
            other => panic!("expected DataUpdate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_sends_nothing() {
        let mut host = PanelHost::new();
        let (handle, mut rx) = host.start().unwrap();

        handle
            .send(UiRequest::UpdateEntry {
                data: Record::new("99", "Ghost", "ghost@x.com", ""),
            })
            .unwrap();

        // The drop is silent: the next reply must be for the follow-up request.
        handle.send(UiRequest::GetData).unwrap();
        match recv(&mut rx).await {
            HostEvent::DataUpdate { data } => assert_eq!(data.len(), 3),
            other => panic!("expected DataUpdate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_acknowledged_unconditionally() {
        let mut host = PanelHost::new();
        let (handle, mut rx) = host.start().unwrap();

        handle
            .send(UiRequest::DeleteEntry {
                id: RecordId::from("2"),
            })
            .unwrap();
        assert_eq!(
            recv(&mut rx).await,
            HostEvent::EntryDeleted {
                id: RecordId::from("2")
            }
        );

        handle
            .send(UiRequest::DeleteEntry {
                id: RecordId::from("2"),
            })
            .unwrap();
        assert_eq!(
            recv(&mut rx).await,
            HostEvent::EntryDeleted {
                id: RecordId::from("2")
            }
        );

        handle.send(UiRequest::GetData).unwrap();
        match recv(&mut rx).await {
            HostEvent::DataUpdate { data } => {
                assert_eq!(data.len(), 2);
                assert_eq!(data[0].id().as_str(), "1");
                assert_eq!(data[1].id().as_str(), "3");
            }
            other => panic!("expected DataUpdate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_start_twice_fails() {
        let mut host = PanelHost::new();
        let (_handle, _rx) = host.start().unwrap();

        assert!(matches!(host.start(), Err(HostError::AlreadyStarted)));
    }
}
