//! S2 cell neighbourhoods.
//!
//! The map-objects query doesn't send a radius. Instead it sends a list of
//! S2 cell ids: the cell the player stands in plus the cells that share an
//! edge with it. The server answers with whatever it knows about those
//! cells, so the query size stays fixed no matter how crowded the area is.
//!
//! S2 cells are quadrilaterals on the faces of a projected cube, so each
//! cell has exactly four edge neighbours and the neighbourhood is five ids.

use s2::cellid::CellID;
use s2::latlng::LatLng;

use crate::Coordinate;

/// Subdivision level of the cells sent to the server.
///
/// Level 15 cells are roughly 300 metres across. The server indexes map
/// objects at this level and rejects other levels.
pub const CELL_ID_LEVEL: u64 = 15;

/// Number of ids returned by [`cell_ids`]: the origin plus its four edge
/// neighbours.
pub const NEIGHBORHOOD_SIZE: usize = 5;

/// Returns the level-15 cell containing `coordinate`, followed by its edge
/// neighbours in S2 order (down, right, up, left in face-local ij space).
///
/// The result is deterministic. A point exactly on a cell boundary is
/// assigned by S2's own projection rules.
pub fn cell_ids(coordinate: &Coordinate) -> Vec<u64> {
    let latlng = LatLng::from_degrees(coordinate.latitude, coordinate.longitude);
    let origin = CellID::from(&latlng).parent(CELL_ID_LEVEL);

    let mut ids = Vec::with_capacity(NEIGHBORHOOD_SIZE);
    ids.push(origin.0);
    ids.extend(origin.edge_neighbors().iter().map(|cell| cell.0));
    ids
}
