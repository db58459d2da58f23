//! Geographic primitives for pogo.
//!
//! Two things live here:
//!
//! - **Coordinates** ([`Coordinate`]) — the device-reported position that
//!   every request envelope carries.
//! - **Cell neighbourhoods** ([`cell_ids`]) — the set of S2 cells that
//!   describe "what's around the player" to the map-objects query.
//!
//! # How it fits in the stack
//!
//! ```text
//! Session (above)  ← asks for cell ids when announcing presence
//!     ↕
//! Geo (this crate)  ← coordinate storage and S2 cell indexing
//! ```

mod cells;
mod coordinate;

pub use cells::{cell_ids, CELL_ID_LEVEL, NEIGHBORHOOD_SIZE};
pub use coordinate::Coordinate;
