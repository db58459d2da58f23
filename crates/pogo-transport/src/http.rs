//! HTTP transport implementation using `reqwest`.

use pogo_protocol::{Codec, JsonCodec, RequestEnvelope, ResponseEnvelope};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};

use crate::{Transport, TransportError};

/// User agent the RPC frontend expects from the game client.
const CLIENT_USER_AGENT: &str = "Niantic App";

/// A [`Transport`] that POSTs the encoded envelope to the RPC URL and
/// decodes the response body.
///
/// The body is labelled with the codec's
/// [`content_type`](Codec::content_type). A refused or unreachable host
/// surfaces as [`TransportError::ConnectionFailed`]; every other client
/// failure as [`TransportError::Http`].
///
/// `reqwest::Client` keeps its own connection pool, so one transport
/// should be reused for the lifetime of a session.
pub struct HttpTransport<C: Codec = JsonCodec> {
    client: reqwest::Client,
    codec: C,
}

impl HttpTransport<JsonCodec> {
    /// Creates a transport with a default client and the JSON codec.
    pub fn new() -> Self {
        Self::with_codec(reqwest::Client::new(), JsonCodec)
    }
}

impl Default for HttpTransport<JsonCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Codec> HttpTransport<C> {
    /// Creates a transport from a preconfigured client (proxy, timeouts,
    /// TLS roots) and an envelope codec.
    pub fn with_codec(client: reqwest::Client, codec: C) -> Self {
        Self { client, codec }
    }
}

impl<C: Codec> Transport for HttpTransport<C> {
    async fn request(
        &self,
        url: &str,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseEnvelope, TransportError> {
        let body = self.codec.encode(envelope)?;
        tracing::trace!(url, bytes = body.len(), "sending envelope");

        let response = self
            .client
            .post(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(CONTENT_TYPE, self.codec.content_type())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    TransportError::ConnectionFailed(e.to_string())
                } else {
                    TransportError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, %status, "rpc endpoint rejected request");
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        let data = response.bytes().await?;
        tracing::trace!(url, bytes = data.len(), "received envelope");
        Ok(ResponseEnvelope::decode(&self.codec, &data)?)
    }
}
