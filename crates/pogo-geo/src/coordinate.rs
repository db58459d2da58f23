//! The player's geographic fix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A geographic position: longitude and latitude in degrees, altitude in
/// game units.
///
/// A session is constructed with one coordinate and never changes it, so
/// this type has no setters. Build a new session to move the player.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl Coordinate {
    /// Creates a coordinate. Argument order follows the usual
    /// "lat, lng" convention of maps, not the field order.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}, alt {:.1})",
            self.latitude, self.longitude, self.altitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maps_arguments_to_fields() {
        let c = Coordinate::new(40.7589, -73.9851, 12.0);
        assert_eq!(c.latitude, 40.7589);
        assert_eq!(c.longitude, -73.9851);
        assert_eq!(c.altitude, 12.0);
    }

    #[test]
    fn test_display_is_lat_first() {
        let c = Coordinate::new(1.5, -2.25, 3.0);
        assert_eq!(c.to_string(), "(1.500000, -2.250000, alt 3.0)");
    }

    #[test]
    fn test_serializes_with_named_fields() {
        let c = Coordinate::new(1.0, 2.0, 3.0);
        let json: serde_json::Value = serde_json::to_value(c).unwrap();
        assert_eq!(json["latitude"], 1.0);
        assert_eq!(json["longitude"], 2.0);
        assert_eq!(json["altitude"], 3.0);
    }
}
