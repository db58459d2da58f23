//! Unified error type for pogo.

use pogo_protocol::ProtocolError;
use pogo_session::SessionError;
use pogo_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates the `From` impls, so
/// `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum PogoError {
    /// A transport-level error (HTTP status, connection, body codec).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, missing result).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session-level error (auth, binding, status).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Invalid configuration, such as a bad log filter or coordinate.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::ConnectionFailed("refused".into());
        let pogo_err: PogoError = err.into();
        assert!(matches!(pogo_err, PogoError::Transport(_)));
        assert!(pogo_err.to_string().contains("refused"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::MissingReturn { index: 0, len: 0 };
        let pogo_err: PogoError = err.into();
        assert!(matches!(
            pogo_err,
            PogoError::Protocol(ProtocolError::MissingReturn { index: 0, len: 0 })
        ));
        assert_eq!(pogo_err.to_string(), "no result at index 0 (response has 0)");
    }

    #[test]
    fn test_from_session_error() {
        let err = SessionError::ServiceUnavailable;
        let pogo_err: PogoError = err.into();
        assert!(matches!(pogo_err, PogoError::Session(_)));
        assert!(pogo_err.to_string().contains("service might be down"));
    }

    #[test]
    fn test_config_error_display() {
        let err = PogoError::Config("POGO_LAT is not a number".into());
        assert_eq!(
            err.to_string(),
            "configuration error: POGO_LAT is not a number"
        );
    }
}
