//! Codec trait and implementations for payload bytes.
//!
//! Sub-requests and results are opaque bytes inside an envelope. A codec
//! turns the typed messages in [`messages`](crate::GetPlayerResponse) into
//! those bytes and back. The session doesn't care which format is used; it
//! only needs something that implements [`Codec`].
//!
//! [`JsonCodec`] is the one shipped today. A protobuf codec can be added
//! behind another feature without touching the session.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// Encodes Rust types to bytes and decodes bytes back.
///
/// `Send + Sync + 'static` so a codec can live inside a session that is
/// moved between tokio tasks.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if the value can't be represented
    /// in this format.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed or don't
    /// match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;

    /// Media type of the bytes this codec produces, for transports that
    /// label their bodies.
    fn content_type(&self) -> &'static str {
        "application/octet-stream"
    }
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// Behind the `json` feature (enabled by default).
///
/// ## Example
///
/// ```rust
/// use pogo_protocol::{Codec, GetInventoryMessage, JsonCodec};
///
/// let codec = JsonCodec;
/// let msg = GetInventoryMessage { last_timestamp_ms: 1_469_000_000_000 };
///
/// let bytes = codec.encode(&msg).unwrap();
/// let decoded: GetInventoryMessage = codec.decode(&bytes).unwrap();
/// assert_eq!(msg, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
