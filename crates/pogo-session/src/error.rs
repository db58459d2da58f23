//! Error types for the session layer.

use pogo_protocol::{Outcome, ProtocolError};
use pogo_transport::TransportError;

/// Errors returned by session operations.
///
/// Every failure is local to the operation that produced it: the session
/// stays in whatever state it was in and can be called again.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The auth provider couldn't log in. Returned as the provider
    /// reported it.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The transport failed. `init`, `get_player` and `get_inventory`
    /// return the transport's error unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// `announce` couldn't complete its round trip. The underlying
    /// transport error is logged, not returned.
    #[error("request failed")]
    RequestFailed,

    /// `init` got a response without an endpoint assignment, so the
    /// session can't be bound.
    #[error("could not initialize session, the service might be down")]
    ServiceUnavailable,

    /// The response status code classified as something other than
    /// success.
    #[error("server returned {0}")]
    Status(Outcome),

    /// A result payload was missing or couldn't be decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Turns a classified outcome into a result.
pub(crate) fn check(outcome: Outcome) -> Result<(), SessionError> {
    if outcome.is_success() {
        Ok(())
    } else {
        Err(SessionError::Status(outcome))
    }
}
