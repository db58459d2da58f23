use pogo_protocol::ProtocolError;

/// Errors that can occur in the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client failed after connecting (TLS, redirect, body read).
    #[cfg(feature = "http")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("unexpected http status {0}")]
    HttpStatus(u16),

    /// The envelope couldn't be encoded, or the body couldn't be decoded.
    #[error("envelope codec failed: {0}")]
    Codec(#[from] ProtocolError),

    /// The remote end couldn't be reached. `HttpTransport` reports refused
    /// and unroutable connections this way.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}
