//! Extraction pipeline - the core of the library.
//!
//! Two steps, both pure:
//! - Extract: markup -> ordered [`PlacemarkRecord`](crate::PlacemarkRecord)s
//! - Format: records -> CSV, console listing or JSON

pub mod extract;
pub mod format;

pub use extract::{extract, try_extract};
pub use format::{format_csv, format_json, format_listing, render, CSV_HEADER, NO_DATA_MESSAGE};
