//! Error taxonomy for the storage and messaging transports
//!
//! Classification and probing never produce errors (bad input resolves to
//! an absent verdict or the `-` sentinel); only the external collaborators
//! can fail, and none of these failures is fatal to the extension.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("storage operation failed: {0}")]
    Storage(String),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure modes of a cross-context message round-trip. There is no
/// explicit deadline; failure is reported by the channel itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("no receiving context for message")]
    NoReceiver,

    #[error("channel closed before a response arrived")]
    Closed,
}
