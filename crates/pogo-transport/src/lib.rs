//! Transport abstraction layer for pogo.
//!
//! Provides the [`Transport`] trait: one request envelope in, one response
//! envelope out, against a given URL. The session never knows how the
//! bytes travel.
//!
//! # Feature Flags
//!
//! - `http` (default) — [`HttpTransport`], HTTP POST via `reqwest`

mod error;
#[cfg(feature = "http")]
mod http;

pub use error::TransportError;
#[cfg(feature = "http")]
pub use http::HttpTransport;

use std::future::Future;

use pogo_protocol::{RequestEnvelope, ResponseEnvelope};

/// Performs a single RPC round trip.
///
/// Implementations own serialization of the envelope and any connection
/// handling. Timeouts, retries and backoff belong here too (usually as a
/// wrapper around another `Transport`); the session calls `request` once
/// per operation and never retries.
pub trait Transport: Send + Sync + 'static {
    /// Sends `envelope` to `url` and waits for the response envelope.
    ///
    /// The returned future is `Send` so a session can be driven from a
    /// spawned task.
    fn request(
        &self,
        url: &str,
        envelope: &RequestEnvelope,
    ) -> impl Future<Output = Result<ResponseEnvelope, TransportError>> + Send;
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pogo_geo::Coordinate;
    use pogo_protocol::{AuthInfo, RequestType, SubRequest};

    use super::*;

    /// Answers every request with one empty result per sub-request and
    /// remembers the URLs it was called with.
    struct EchoTransport {
        urls: Mutex<Vec<String>>,
    }

    impl Transport for EchoTransport {
        async fn request(
            &self,
            url: &str,
            envelope: &RequestEnvelope,
        ) -> Result<ResponseEnvelope, TransportError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(ResponseEnvelope {
                status_code: 1,
                request_id: envelope.request_id,
                api_url: String::new(),
                returns: vec![Vec::new(); envelope.requests.len()],
            })
        }
    }

    #[tokio::test]
    async fn test_request_answers_positionally() {
        let transport = EchoTransport {
            urls: Mutex::new(Vec::new()),
        };
        let envelope = RequestEnvelope::new(
            AuthInfo::new("ptc", "t"),
            &Coordinate::default(),
            vec![
                SubRequest::new(RequestType::GetPlayer),
                SubRequest::new(RequestType::GetInventory),
            ],
        );

        let response = transport
            .request("https://example.test/rpc", &envelope)
            .await
            .unwrap();

        assert_eq!(response.returns.len(), 2);
        assert_eq!(
            *transport.urls.lock().unwrap(),
            vec!["https://example.test/rpc".to_string()]
        );
    }

    #[test]
    fn test_transport_error_display() {
        assert_eq!(
            TransportError::HttpStatus(503).to_string(),
            "unexpected http status 503"
        );
        assert_eq!(
            TransportError::ConnectionFailed("refused".into()).to_string(),
            "connection failed: refused"
        );
    }
}
