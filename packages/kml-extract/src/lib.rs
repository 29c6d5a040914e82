//! KML Placemark Extraction Library
//!
//! Pulls named Point placemarks (label plus `lon,lat[,alt]`) out of a KML
//! document and flattens them into rows for CSV output.
//!
//! # Usage
//!
//! ```rust
//! use kml_extract::{extract, format_csv};
//!
//! let kml = r#"<kml xmlns="http://www.opengis.net/kml/2.2">
//!   <Placemark>
//!     <name>TL 05</name>
//!     <Point><coordinates>-94.816,29.315,-27.465</coordinates></Point>
//!   </Placemark>
//! </kml>"#;
//!
//! let records = extract(kml);
//! assert_eq!(records[0].name, "TL 05");
//! assert_eq!(
//!     format_csv(&records),
//!     "Name,Longitude,Latitude,Altitude\n\"TL 05\",-94.816,29.315,-27.465\n"
//! );
//! ```
//!
//! # Modules
//!
//! - [`pipeline`] - Extraction and formatting
//! - [`types`] - Placemark records and output configuration
//! - [`error`] - Typed errors
//! - [`testing`] - KML fixtures for tests

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractError, Result};
pub use pipeline::{
    extract, format_csv, format_json, format_listing, render, try_extract, CSV_HEADER,
    NO_DATA_MESSAGE,
};
pub use types::{
    config::{OutputConfig, OutputFormat, UnknownFormat},
    placemark::{PlacemarkRecord, COORDINATES_NOT_FOUND, NAME_NOT_FOUND},
};
