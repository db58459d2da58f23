//! The RPC session: authentication, endpoint binding, and the typed calls.
//!
//! A session is the client's record of one logged-in player at one
//! position. It tracks:
//! - WHO the player is (an [`AuthProvider`])
//! - WHERE they are (a [`Coordinate`], fixed for the session's lifetime)
//! - WHICH endpoint to talk to (the shared entry URL, then a dedicated one)

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use pogo_geo::{cell_ids, Coordinate};
use pogo_protocol::{
    classify, constants, AuthInfo, Codec, DownloadSettingsMessage, GetInventoryMessage,
    GetInventoryResponse, GetMapObjectsMessage, GetMapObjectsResponse, GetPlayerResponse,
    JsonCodec, Outcome, ProtocolError, RequestEnvelope, RequestType, ResponseEnvelope,
    SubRequest,
};
use pogo_transport::{Transport, TransportError};
use serde::{Deserialize, Serialize};

use crate::error::check;
use crate::{AuthProvider, SessionError};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for a session.
///
/// The defaults are the values the live service expects. Overriding
/// `default_url` is mostly useful for pointing a session at a test
/// server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Entry point used until `init` binds the session.
    pub default_url: String,

    /// Settings version sent with every download-settings sub-request.
    pub settings_hash: String,

    /// Log full request and response envelopes at debug level.
    pub debug: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_url: constants::DEFAULT_URL.to_string(),
            settings_hash: constants::DOWNLOAD_SETTINGS_HASH.to_string(),
            debug: false,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Where a session is in its endpoint lifecycle.
///
/// ```text
///   Bootstrapped ──(init ok)──→ Bound
/// ```
///
/// There is no way back: once bound, a session talks to its dedicated
/// endpoint until it is dropped. A failed `init` leaves the session
/// Bootstrapped and `init` may be called again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No endpoint assigned yet; requests go to the default URL.
    Bootstrapped,

    /// The server assigned a dedicated endpoint.
    Bound,
}

// ---------------------------------------------------------------------------
// Announcement
// ---------------------------------------------------------------------------

/// What `announce` returns: the decoded map objects together with the
/// classified status of the response.
///
/// The server may send usable map data alongside a non-success status,
/// so the two are reported together and the caller decides.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub map_objects: GetMapObjectsResponse,
    pub outcome: Outcome,
}

impl Announcement {
    /// The map objects if the status was a success, otherwise the status
    /// as an error.
    pub fn into_result(self) -> Result<GetMapObjectsResponse, SessionError> {
        check(self.outcome)?;
        Ok(self.map_objects)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// An RPC session for one player at one coordinate.
///
/// Operations take one round trip each and are meant to be awaited one at
/// a time; `init` needs `&mut self` because it rebinds the endpoint.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use pogo_geo::Coordinate;
/// use pogo_session::{Session, SessionConfig, StaticTokenProvider};
/// use pogo_transport::HttpTransport;
///
/// # async fn run() -> Result<(), pogo_session::SessionError> {
/// let provider = Arc::new(StaticTokenProvider::new("ptc", "token"));
/// let mut session = Session::new(
///     provider,
///     HttpTransport::new(),
///     Coordinate::new(40.7589, -73.9851, 10.0),
///     SessionConfig::default(),
/// );
///
/// session.init().await?;
/// let map = session.announce().await?.into_result()?;
/// println!("{} cells", map.map_cells.len());
/// # Ok(())
/// # }
/// ```
pub struct Session<A: AuthProvider, T: Transport, C: Codec = JsonCodec> {
    coordinate: Coordinate,
    endpoint: Option<String>,
    provider: Arc<A>,
    transport: T,
    codec: C,
    config: SessionConfig,
}

impl<A: AuthProvider, T: Transport> Session<A, T, JsonCodec> {
    /// Creates a Bootstrapped session that encodes payloads as JSON.
    pub fn new(
        provider: Arc<A>,
        transport: T,
        coordinate: Coordinate,
        config: SessionConfig,
    ) -> Self {
        Self::with_codec(provider, transport, JsonCodec, coordinate, config)
    }
}

impl<A: AuthProvider, T: Transport, C: Codec> Session<A, T, C> {
    /// Creates a Bootstrapped session with a custom payload codec.
    pub fn with_codec(
        provider: Arc<A>,
        transport: T,
        codec: C,
        coordinate: Coordinate,
        config: SessionConfig,
    ) -> Self {
        Self {
            coordinate,
            endpoint: None,
            provider,
            transport,
            codec,
            config,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.endpoint {
            Some(_) => SessionState::Bound,
            None => SessionState::Bootstrapped,
        }
    }

    /// The URL the next call goes to.
    pub fn url(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(&self.config.default_url)
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one envelope carrying `requests` and returns the raw response.
    ///
    /// The auth block is read from the provider on every call. Results are
    /// returned undecoded; `returns[i]` answers `requests[i]`.
    pub async fn call(
        &self,
        requests: Vec<SubRequest>,
    ) -> Result<ResponseEnvelope, TransportError> {
        let auth = AuthInfo::new(self.provider.provider_string(), self.provider.access_token());
        let envelope = RequestEnvelope::new(auth, &self.coordinate, requests);
        let url = self.url();

        tracing::debug!(url, count = envelope.requests.len(), "rpc call");
        if self.config.debug {
            tracing::debug!(?envelope, "request envelope");
        }

        let result = self.transport.request(url, &envelope).await;

        if self.config.debug {
            match &result {
                Ok(response) => tracing::debug!(?response, "response envelope"),
                Err(e) => tracing::debug!(error = %e, "no response envelope"),
            }
        }
        result
    }

    /// Logs in and binds the session to the endpoint the server assigns.
    ///
    /// Sends the player profile request together with the usual
    /// housekeeping bundle. On success the session is Bound.
    ///
    /// # Errors
    /// - the provider's error if login fails (no request is sent)
    /// - [`SessionError::Transport`] if the round trip fails
    /// - [`SessionError::ServiceUnavailable`] if the response assigns no
    ///   endpoint
    pub async fn init(&mut self) -> Result<(), SessionError> {
        self.provider.login().await?;

        let requests = vec![
            SubRequest::new(RequestType::GetPlayer),
            SubRequest::new(RequestType::GetHatchedEggs),
            SubRequest::new(RequestType::GetInventory),
            SubRequest::new(RequestType::CheckAwardedBadges),
            self.download_settings()?,
        ];

        let response = self.call(requests).await?;

        if response.api_url.is_empty() {
            tracing::warn!(
                status_code = response.status_code,
                "init response assigned no endpoint"
            );
            return Err(SessionError::ServiceUnavailable);
        }

        self.endpoint = Some(constants::endpoint_url(&response.api_url));
        tracing::info!(url = self.url(), "session bound");
        Ok(())
    }

    /// Publishes the player's presence and returns what's around them.
    ///
    /// Queries the map objects of the player's cell neighbourhood along
    /// with the housekeeping bundle (hatched eggs, inventory since now,
    /// badges, settings).
    ///
    /// # Errors
    /// - [`SessionError::RequestFailed`] if the round trip fails; the
    ///   transport error itself is only logged
    /// - [`SessionError::Status`] if the map objects can't be decoded and
    ///   the response status is not a success
    /// - [`SessionError::Protocol`] if the map objects can't be decoded
    ///   despite a success status
    pub async fn announce(&self) -> Result<Announcement, SessionError> {
        let cells = cell_ids(&self.coordinate);
        let now = now_ms();

        let map_objects = GetMapObjectsMessage {
            since_timestamp_ms: vec![0; cells.len()],
            cell_id: cells,
            latitude: self.coordinate.latitude,
            longitude: self.coordinate.longitude,
        };
        let inventory = GetInventoryMessage {
            last_timestamp_ms: now,
        };

        let requests = vec![
            SubRequest::with_message(RequestType::GetMapObjects, &map_objects, &self.codec)?,
            SubRequest::new(RequestType::GetHatchedEggs),
            SubRequest::with_message(RequestType::GetInventory, &inventory, &self.codec)?,
            SubRequest::new(RequestType::CheckAwardedBadges),
            self.download_settings()?,
        ];

        let response = match self.call(requests).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "announce round trip failed");
                return Err(SessionError::RequestFailed);
            }
        };

        let outcome = classify(response.status_code);
        if !outcome.is_success() {
            tracing::debug!(status_code = response.status_code, %outcome, "announce status");
        }

        match response.decode_return::<GetMapObjectsResponse, _>(&self.codec, 0) {
            Ok(map_objects) => Ok(Announcement {
                map_objects,
                outcome,
            }),
            Err(e) => {
                check(outcome)?;
                Err(e.into())
            }
        }
    }

    /// Fetches the player's profile.
    ///
    /// # Errors
    /// The transport's error unchanged, or [`SessionError::Protocol`] if
    /// the result is missing or malformed.
    pub async fn get_player(&self) -> Result<GetPlayerResponse, SessionError> {
        self.single(RequestType::GetPlayer).await
    }

    /// Fetches the player's inventory.
    ///
    /// # Errors
    /// Same as [`get_player`](Self::get_player).
    pub async fn get_inventory(&self) -> Result<GetInventoryResponse, SessionError> {
        self.single(RequestType::GetInventory).await
    }

    /// Sends one argument-less sub-request and decodes its result.
    async fn single<R: serde::de::DeserializeOwned>(
        &self,
        request_type: RequestType,
    ) -> Result<R, SessionError> {
        let response = self.call(vec![SubRequest::new(request_type)]).await?;
        Ok(response.decode_return(&self.codec, 0)?)
    }

    fn download_settings(&self) -> Result<SubRequest, ProtocolError> {
        let message = DownloadSettingsMessage {
            hash: self.config.settings_hash.clone(),
        };
        SubRequest::with_message(RequestType::DownloadSettings, &message, &self.codec)
    }
}

/// Wall-clock milliseconds since the Unix epoch.
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
