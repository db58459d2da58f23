//! Player session for pogo.
//!
//! This crate drives the conversation with the game's RPC frontend:
//!
//! 1. **Authentication** — who the player is ([`AuthProvider`] trait)
//! 2. **Endpoint binding** — moving from the shared entry URL to the
//!    endpoint the server assigns ([`Session::init`])
//! 3. **Typed calls** — [`Session::announce`], [`Session::get_player`],
//!    [`Session::get_inventory`], each one envelope round trip
//!
//! # How it fits in the stack
//!
//! ```text
//! Application (above)  ← holds a Session, calls announce in a loop
//!     ↕
//! Session Layer (this crate)  ← auth, endpoint state, request batches
//!     ↕
//! Protocol + Geo (below)  ← envelopes, payload codecs, S2 cells
//!     ↕
//! Transport (below)  ← one HTTP round trip per call
//! ```

mod auth;
mod error;
mod session;

pub use auth::{AuthProvider, StaticTokenProvider};
pub use error::SessionError;
pub use session::{Announcement, Session, SessionConfig, SessionState};
