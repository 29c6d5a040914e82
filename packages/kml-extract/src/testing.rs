//! Testing utilities - KML fixtures.
//!
//! Builds documents shaped like the ones Google Earth Pro exports: a
//! default KML namespace plus `gx`, `kml` and `atom` declarations, styles
//! ahead of the content, and placemarks inside a `Folder`.

use std::fmt::Write;

/// One placemark entry in a [`KmlDocument`].
#[derive(Debug, Clone)]
enum Entry {
    Point {
        name: Option<String>,
        coordinates: Option<String>,
    },
    NoPoint {
        name: String,
    },
}

/// Builder for KML documents used in tests.
#[derive(Debug, Clone, Default)]
pub struct KmlDocument {
    title: Option<String>,
    entries: Vec<Entry>,
}

impl KmlDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document `<name>`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a named Point placemark.
    pub fn with_point(mut self, name: impl Into<String>, coordinates: impl Into<String>) -> Self {
        self.entries.push(Entry::Point {
            name: Some(name.into()),
            coordinates: Some(coordinates.into()),
        });
        self
    }

    /// Add a Point placemark with no `<name>` element.
    pub fn with_unnamed_point(mut self, coordinates: impl Into<String>) -> Self {
        self.entries.push(Entry::Point {
            name: None,
            coordinates: Some(coordinates.into()),
        });
        self
    }

    /// Add a placemark whose `<Point>` has no `<coordinates>` element.
    pub fn with_empty_point(mut self, name: impl Into<String>) -> Self {
        self.entries.push(Entry::Point {
            name: Some(name.into()),
            coordinates: None,
        });
        self
    }

    /// Add a placemark carrying a LineString instead of a Point.
    pub fn with_line(mut self, name: impl Into<String>) -> Self {
        self.entries.push(Entry::NoPoint { name: name.into() });
        self
    }

    /// Render the document.
    pub fn build(&self) -> String {
        let mut kml = String::from(concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<kml xmlns=\"http://www.opengis.net/kml/2.2\" ",
            "xmlns:gx=\"http://www.google.com/kml/ext/2.2\" ",
            "xmlns:kml=\"http://www.opengis.net/kml/2.2\" ",
            "xmlns:atom=\"http://www.w3.org/2005/Atom\">\n",
            "<Document>\n",
        ));
        if let Some(title) = &self.title {
            let _ = writeln!(kml, "\t<name>{}</name>", escape(title));
        }
        kml.push_str(concat!(
            "\t<Style id=\"IconStyle10\">\n",
            "\t\t<IconStyle><scale>0.75</scale><Icon><href>Layer1_Symbol_0.png</href></Icon></IconStyle>\n",
            "\t\t<LabelStyle><color>ff000000</color><scale>0.833333</scale></LabelStyle>\n",
            "\t</Style>\n",
            "\t<Folder id=\"Layer1\">\n",
            "\t\t<name>Nodes</name>\n",
        ));

        for (index, entry) in self.entries.iter().enumerate() {
            let _ = writeln!(kml, "\t\t<Placemark id=\"ID_{:05}\">", index);
            match entry {
                Entry::Point { name, coordinates } => {
                    if let Some(name) = name {
                        let _ = writeln!(kml, "\t\t\t<name>{}</name>", escape(name));
                    }
                    kml.push_str("\t\t\t<Snippet maxLines=\"0\"></Snippet>\n");
                    kml.push_str("\t\t\t<description><![CDATA[...]]></description>\n");
                    kml.push_str("\t\t\t<styleUrl>#IconStyle10</styleUrl>\n");
                    kml.push_str("\t\t\t<Point>\n");
                    if let Some(coordinates) = coordinates {
                        let _ = writeln!(
                            kml,
                            "\t\t\t\t<coordinates>{}</coordinates>",
                            escape(coordinates)
                        );
                    }
                    kml.push_str("\t\t\t</Point>\n");
                }
                Entry::NoPoint { name } => {
                    let _ = writeln!(kml, "\t\t\t<name>{}</name>", escape(name));
                    kml.push_str(
                        "\t\t\t<LineString><coordinates>-94.81,29.31,0 -94.82,29.32,0</coordinates></LineString>\n",
                    );
                }
            }
            kml.push_str("\t\t</Placemark>\n");
        }

        kml.push_str(concat!(
            "\t\t<atom:link rel=\"app\" href=\"https://www.google.com/earth/about/versions/#earth-pro\" ",
            "title=\"Google Earth Pro 7.3.6.10201\"></atom:link>\n",
            "\t</Folder>\n",
            "</Document>\n",
            "</kml>\n",
        ));
        kml
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A small inspection-path export with three Point placemarks.
pub fn inspection_path() -> KmlDocument {
    KmlDocument::new()
        .with_title("InspectionPathNodes.kml")
        .with_point("BEND 03", "-94.81564172531924,29.3170487068911,0")
        .with_point("TL 04", "-94.81638801960614,29.31437279319067,-26.56299999999464")
        .with_point("TL 06 - EXT", "-94.81657933740547,29.3182391411681,0")
}
