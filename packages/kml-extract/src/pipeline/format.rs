//! Formatting - render extracted records as CSV, a console listing or JSON.
//!
//! All functions here are pure: they build strings and leave writing them
//! anywhere to the caller.

use std::fmt::Write;

use crate::error::Result;
use crate::types::config::OutputFormat;
use crate::types::placemark::PlacemarkRecord;

/// Header row of the CSV output.
pub const CSV_HEADER: &str = "Name,Longitude,Latitude,Altitude";

/// Listing shown when there is nothing to list.
pub const NO_DATA_MESSAGE: &str = "No data extracted or an error occurred.";

/// Render records as `Name,Longitude,Latitude,Altitude` rows.
///
/// The name is always quoted; coordinate components are written as found.
/// Components a record does not have are left empty.
pub fn format_csv(records: &[PlacemarkRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        let [lon, lat, alt] = record.fields();
        // Writing into a String cannot fail
        let _ = writeln!(out, "{},{lon},{lat},{alt}", quote(&record.name));
    }

    out
}

/// Render one `Name: ..., Coordinates: ...` line per record.
pub fn format_listing(records: &[PlacemarkRecord]) -> String {
    if records.is_empty() {
        return format!("{NO_DATA_MESSAGE}\n");
    }

    records.iter().fold(String::new(), |mut out, record| {
        let _ = writeln!(
            out,
            "Name: {}, Coordinates: {}",
            record.name, record.coordinates
        );
        out
    })
}

/// Render records as a pretty-printed, newline-terminated JSON array.
pub fn format_json(records: &[PlacemarkRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Render records in the requested format.
pub fn render(records: &[PlacemarkRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => Ok(format_csv(records)),
        OutputFormat::Json => format_json(records),
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_single_record() {
        let records = vec![PlacemarkRecord::new("TL 05", "-94.816,29.315,-27.465")];

        assert_eq!(
            format_csv(&records),
            "Name,Longitude,Latitude,Altitude\n\"TL 05\",-94.816,29.315,-27.465\n"
        );
    }

    #[test]
    fn test_csv_empty_is_header_only() {
        assert_eq!(format_csv(&[]), "Name,Longitude,Latitude,Altitude\n");
    }

    #[test]
    fn test_csv_missing_components_are_empty() {
        let records = vec![
            PlacemarkRecord::new("two", "1,2"),
            PlacemarkRecord::new("one", "1"),
            PlacemarkRecord::missing_coordinates("none"),
        ];

        let csv = format_csv(&records);
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(
            rows,
            vec![
                "\"two\",1,2,",
                "\"one\",1,,",
                "\"none\",Coordinates not found,,",
            ]
        );
    }

    #[test]
    fn test_csv_extra_components_are_dropped() {
        let records = vec![PlacemarkRecord::new("A", "1,2,3,4")];
        assert!(format_csv(&records).ends_with("\"A\",1,2,3\n"));
    }

    #[test]
    fn test_csv_quotes_in_name_are_doubled() {
        let records = vec![PlacemarkRecord::new("Pier \"B\"", "1,2,3")];
        assert!(format_csv(&records).ends_with("\"Pier \"\"B\"\"\",1,2,3\n"));
    }

    #[test]
    fn test_listing() {
        let records = vec![
            PlacemarkRecord::new("BEND 03", "-94.8156,29.3170,0"),
            PlacemarkRecord::missing_coordinates("RED 02"),
        ];

        assert_eq!(
            format_listing(&records),
            "Name: BEND 03, Coordinates: -94.8156,29.3170,0\n\
             Name: RED 02, Coordinates: Coordinates not found\n"
        );
    }

    #[test]
    fn test_listing_empty() {
        assert_eq!(
            format_listing(&[]),
            "No data extracted or an error occurred.\n"
        );
    }

    #[test]
    fn test_json() {
        let records = vec![PlacemarkRecord::new("TL 05", "1,2,3")];
        let json = format_json(&records).unwrap();
        assert!(json.ends_with("]\n"));
        let parsed: Vec<PlacemarkRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let records = vec![PlacemarkRecord::new("TL 05", "1,2,3")];
        assert_eq!(
            render(&records, OutputFormat::Csv).unwrap(),
            format_csv(&records)
        );
        assert!(render(&records, OutputFormat::Json)
            .unwrap()
            .starts_with('['));
    }
}
