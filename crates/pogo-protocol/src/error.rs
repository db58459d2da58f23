//! Error types for the protocol layer.
//!
//! Each crate in pogo defines its own error enum. A `ProtocolError` means
//! the problem is in the bytes (serializing, deserializing, or a response
//! that doesn't have the shape the call expected), not in the network or
//! in authentication.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a Rust type).
    ///
    /// Common causes: malformed payload, wrong message type at an index,
    /// or a truncated body.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The response carries fewer results than the position asked for.
    ///
    /// Results are positional, so this means the server answered a
    /// different batch than the one we sent.
    #[error("no result at index {index} (response has {len})")]
    MissingReturn { index: usize, len: usize },
}
