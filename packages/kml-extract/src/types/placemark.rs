//! Placemark records - one flat row per located KML point.

use serde::{Deserialize, Serialize};

/// Name used when a placemark has no `name` element or its text is empty.
pub const NAME_NOT_FOUND: &str = "N/A";

/// Coordinates used when a `Point` has no usable `coordinates` text.
pub const COORDINATES_NOT_FOUND: &str = "Coordinates not found";

/// A named point pulled out of a KML document.
///
/// Coordinates are kept exactly as they appear in the source
/// (`lon,lat[,alt]`, trimmed). Splitting into components happens lazily
/// through the accessors so nothing is lost before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacemarkRecord {
    /// Placemark label, or [`NAME_NOT_FOUND`]
    pub name: String,

    /// Raw coordinate triple, or [`COORDINATES_NOT_FOUND`]
    pub coordinates: String,
}

impl PlacemarkRecord {
    /// Create a new record from a name and a raw coordinate string.
    pub fn new(name: impl Into<String>, coordinates: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinates: coordinates.into(),
        }
    }

    /// Create a record for a `Point` that carried no coordinates.
    pub fn missing_coordinates(name: impl Into<String>) -> Self {
        Self::new(name, COORDINATES_NOT_FOUND)
    }

    /// False when the coordinates are the not-found sentinel.
    pub fn has_coordinates(&self) -> bool {
        self.coordinates != COORDINATES_NOT_FOUND
    }

    /// Longitude component, if present.
    pub fn longitude(&self) -> Option<&str> {
        self.component(0)
    }

    /// Latitude component, if present.
    pub fn latitude(&self) -> Option<&str> {
        self.component(1)
    }

    /// Altitude component, if present. KML allows it to be omitted.
    pub fn altitude(&self) -> Option<&str> {
        self.component(2)
    }

    /// Longitude, latitude and altitude with missing parts as `""`.
    pub fn fields(&self) -> [&str; 3] {
        [
            self.longitude().unwrap_or(""),
            self.latitude().unwrap_or(""),
            self.altitude().unwrap_or(""),
        ]
    }

    fn component(&self, index: usize) -> Option<&str> {
        self.coordinates.split(',').nth(index)
    }
}
