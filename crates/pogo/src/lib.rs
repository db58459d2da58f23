//! # pogo
//!
//! Client library for the Pokémon GO RPC frontend.
//!
//! A [`Session`](prelude::Session) logs a player in through an
//! [`AuthProvider`](prelude::AuthProvider), binds to the endpoint the
//! server assigns, and then asks about the world around the player's
//! [`Coordinate`](prelude::Coordinate). Every call is one batched envelope
//! sent over a [`Transport`](prelude::Transport).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pogo::prelude::*;
//!
//! # async fn run() -> Result<(), PogoError> {
//! let provider = Arc::new(StaticTokenProvider::new("ptc", "token"));
//! let mut session = Session::new(
//!     provider,
//!     HttpTransport::new(),
//!     Coordinate::new(40.7589, -73.9851, 10.0),
//!     SessionConfig::default(),
//! );
//!
//! session.init().await?;
//! let player = session.get_player().await?;
//! let map = session.announce().await?.into_result()?;
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::PogoError;

pub use pogo_geo as geo;
pub use pogo_protocol as protocol;
pub use pogo_session as session;
pub use pogo_transport as transport;

/// Installs a `tracing` subscriber that honours `RUST_LOG`, falling back
/// to `default_directive` when the variable is unset or invalid.
///
/// Meant for binaries. Returns an error if a global subscriber is
/// already installed.
pub fn init_tracing(default_directive: &str) -> Result<(), PogoError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| PogoError::Config(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| PogoError::Config(e.to_string()))
}

pub mod prelude {
    pub use crate::PogoError;
    pub use pogo_geo::{cell_ids, Coordinate};
    pub use pogo_protocol::{
        classify, Codec, GetInventoryResponse, GetMapObjectsResponse, GetPlayerResponse,
        JsonCodec, Outcome, RequestEnvelope, RequestType, ResponseEnvelope, SubRequest,
    };
    pub use pogo_session::{
        Announcement, AuthProvider, Session, SessionConfig, SessionError, SessionState,
        StaticTokenProvider,
    };
    pub use pogo_transport::{HttpTransport, Transport, TransportError};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_second_install_returns_config_error() {
        // Whichever call installs first, a second global subscriber is refused.
        let _ = init_tracing("info");

        let result = init_tracing("debug");

        assert!(
            matches!(result, Err(PogoError::Config(_))),
            "expected Config error, got {result:?}"
        );
    }
}
