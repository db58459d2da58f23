//! Request and response envelopes.
//!
//! Every RPC is one envelope out and one envelope back. The request side
//! carries who we are (auth), where we are (coordinate), and an ordered
//! batch of sub-requests. The response side carries a status code, an
//! optional endpoint assignment, and one opaque result per sub-request, in
//! the same order.
//!
//! ```text
//! RequestEnvelope                      ResponseEnvelope
//! ┌──────────────────────────┐        ┌──────────────────────────┐
//! │ request_id, status_code  │        │ status_code, api_url     │
//! │ lat / lng / alt          │        │ returns:                 │
//! │ auth_info                │        │   [0] ← answers req[0]   │
//! │ requests:                │  ───→  │   [1] ← answers req[1]   │
//! │   [0] GET_MAP_OBJECTS    │        │   ...                    │
//! │   [1] GET_HATCHED_EGGS   │        └──────────────────────────┘
//! │   ...                    │
//! └──────────────────────────┘
//! ```

use std::fmt;

use pogo_geo::Coordinate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::constants::{AUTH_TOKEN_UNKNOWN2, REQUEST_ID, REQUEST_STATUS_CODE, UNKNOWN12};
use crate::{Codec, ProtocolError};

// ---------------------------------------------------------------------------
// RequestType
// ---------------------------------------------------------------------------

/// The kind of a sub-request. Discriminants are the upstream wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum RequestType {
    GetPlayer = 2,
    GetInventory = 4,
    DownloadSettings = 5,
    GetMapObjects = 106,
    GetHatchedEggs = 126,
    CheckAwardedBadges = 129,
}

impl RequestType {
    /// The numeric code the server uses for this request type.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GetPlayer => "GET_PLAYER",
            Self::GetInventory => "GET_INVENTORY",
            Self::DownloadSettings => "DOWNLOAD_SETTINGS",
            Self::GetMapObjects => "GET_MAP_OBJECTS",
            Self::GetHatchedEggs => "GET_HATCHED_EGGS",
            Self::CheckAwardedBadges => "CHECK_AWARDED_BADGES",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// SubRequest
// ---------------------------------------------------------------------------

/// One entry of a batched request.
///
/// `request_message` is the codec-encoded message for this type, or empty
/// for types that take no arguments. Nothing here validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRequest {
    pub request_type: RequestType,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_message: Vec<u8>,
}

impl SubRequest {
    /// A sub-request with no message body.
    pub fn new(request_type: RequestType) -> Self {
        Self {
            request_type,
            request_message: Vec::new(),
        }
    }

    /// A sub-request whose body is `message` encoded with `codec`.
    pub fn with_message<T: Serialize, C: Codec>(
        request_type: RequestType,
        message: &T,
        codec: &C,
    ) -> Result<Self, ProtocolError> {
        Ok(Self {
            request_type,
            request_message: codec.encode(message)?,
        })
    }
}

// ---------------------------------------------------------------------------
// AuthInfo
// ---------------------------------------------------------------------------

/// The token block inside [`AuthInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub contents: String,
    pub unknown2: i32,
}

/// Who is calling: the auth provider's name and its access token.
///
/// Built fresh for every call from the provider, so a token refreshed by
/// the provider is picked up on the next request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub provider: String,
    pub token: AuthToken,
}

impl AuthInfo {
    pub fn new(provider: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            token: AuthToken {
                contents: access_token.into(),
                unknown2: AUTH_TOKEN_UNKNOWN2,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// RequestEnvelope
// ---------------------------------------------------------------------------

/// The outbound envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub status_code: i32,
    pub request_id: u64,
    pub requests: Vec<SubRequest>,

    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,

    pub auth_info: AuthInfo,

    pub unknown12: i64,
}

impl RequestEnvelope {
    /// Builds an envelope with the fixed protocol fields filled in.
    ///
    /// ```rust
    /// use pogo_geo::Coordinate;
    /// use pogo_protocol::{constants, AuthInfo, RequestEnvelope, RequestType, SubRequest};
    ///
    /// let env = RequestEnvelope::new(
    ///     AuthInfo::new("ptc", "token"),
    ///     &Coordinate::new(1.0, 2.0, 3.0),
    ///     vec![SubRequest::new(RequestType::GetPlayer)],
    /// );
    /// assert_eq!(env.request_id, constants::REQUEST_ID);
    /// assert_eq!(env.longitude, 2.0);
    /// ```
    pub fn new(auth_info: AuthInfo, coordinate: &Coordinate, requests: Vec<SubRequest>) -> Self {
        Self {
            status_code: REQUEST_STATUS_CODE,
            request_id: REQUEST_ID,
            requests,
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            altitude: coordinate.altitude,
            auth_info,
            unknown12: UNKNOWN12,
        }
    }

    /// The request types in batch order.
    pub fn request_types(&self) -> Vec<RequestType> {
        self.requests.iter().map(|r| r.request_type).collect()
    }
}

// ---------------------------------------------------------------------------
// ResponseEnvelope
// ---------------------------------------------------------------------------

/// The inbound envelope.
///
/// `returns[i]` is the result of `requests[i]` of the envelope that
/// produced it. Results stay as bytes until decoded by
/// [`decode_return`](Self::decode_return).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status_code: i32,

    #[serde(default)]
    pub request_id: u64,

    /// Endpoint fragment assigned to this session. Empty unless the server
    /// is (re)binding the client.
    #[serde(default)]
    pub api_url: String,

    #[serde(default)]
    pub returns: Vec<Vec<u8>>,
}

impl ResponseEnvelope {
    /// Decodes the envelope framing from raw bytes. Result payloads are
    /// left opaque.
    pub fn decode<C: Codec>(codec: &C, data: &[u8]) -> Result<Self, ProtocolError> {
        codec.decode(data)
    }

    /// Returns the raw result at `index`.
    pub fn raw_return(&self, index: usize) -> Result<&[u8], ProtocolError> {
        self.returns
            .get(index)
            .map(Vec::as_slice)
            .ok_or(ProtocolError::MissingReturn {
                index,
                len: self.returns.len(),
            })
    }

    /// Decodes the result at `index` as `T`.
    pub fn decode_return<T: DeserializeOwned, C: Codec>(
        &self,
        codec: &C,
        index: usize,
    ) -> Result<T, ProtocolError> {
        codec.decode(self.raw_return(index)?)
    }
}
