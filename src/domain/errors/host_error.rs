//! Host lifecycle error types.

use thiserror::Error;

/// Faults in the panel host lifecycle.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host task was started twice.
    #[error("panel host is already running")]
    AlreadyStarted,

    /// The host task is gone and can no longer accept requests.
    #[error("panel host channel closed: {message}")]
    ChannelClosed {
        /// Context about what was being sent.
        message: String,
    },
}

impl HostError {
    /// Creates a channel-closed error.
    #[must_use]
    pub fn channel_closed(message: impl Into<String>) -> Self {
        Self::ChannelClosed {
            message: message.into(),
        }
    }
}
