//! Wire protocol for pogo.
//!
//! This crate defines what the client and the game's RPC frontend
//! exchange:
//!
//! - **Envelopes** ([`RequestEnvelope`], [`ResponseEnvelope`]) — the
//!   top-level containers carrying auth, location, and a batch of
//!   sub-requests (or their results).
//! - **Messages** ([`GetMapObjectsMessage`], [`GetPlayerResponse`], etc.) —
//!   the typed payloads that travel inside a sub-request or result.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how payloads become bytes.
//! - **Status** ([`classify`], [`Outcome`]) — what the response's status
//!   code means.
//! - **Constants** ([`constants`]) — fixed values the server checks.
//!
//! # Architecture
//!
//! ```text
//! Session (typed calls) → Protocol (Envelope) → Transport (HTTP)
//! ```
//!
//! Results inside a response envelope stay opaque bytes until the caller
//! asks for the one it expects via [`ResponseEnvelope::decode_return`].

mod codec;
pub mod constants;
mod envelope;
mod error;
mod messages;
mod status;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use envelope::{
    AuthInfo, AuthToken, RequestEnvelope, RequestType, ResponseEnvelope,
    SubRequest,
};
pub use error::ProtocolError;
pub use messages::{
    DownloadSettingsMessage, Fort, GetInventoryMessage, GetInventoryResponse,
    GetMapObjectsMessage, GetMapObjectsResponse, GetPlayerResponse,
    InventoryDelta, InventoryItem, MapCell, MapObjectsStatus, NearbyPokemon,
    PlayerCurrency, PlayerData, WildPokemon,
};
pub use status::{classify, Outcome};
