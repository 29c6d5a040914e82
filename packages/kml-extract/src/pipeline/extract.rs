//! Extraction - walk a KML document and collect Point placemarks.
//!
//! Element lookups match on the XML *local name*. `<Placemark>`,
//! `<kml:Placemark>` and a `Placemark` under a default namespace all resolve
//! to the same tag, so documents work regardless of which namespace
//! declarations the producing tool emitted.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, error};

use crate::error::{ExtractError, Result};
use crate::types::placemark::{PlacemarkRecord, NAME_NOT_FOUND};

const PLACEMARK: &[u8] = b"Placemark";
const NAME: &[u8] = b"name";
const POINT: &[u8] = b"Point";
const COORDINATES: &[u8] = b"coordinates";

/// Extract every Point placemark from `markup`, in document order.
///
/// Never fails: a document that cannot be read is logged and yields an
/// empty vector. Use [`try_extract`] to see the error instead.
pub fn extract(markup: &str) -> Vec<PlacemarkRecord> {
    match try_extract(markup) {
        Ok(records) => records,
        Err(err) => {
            error!(error = %err, "Failed to extract placemarks from KML");
            Vec::new()
        }
    }
}

/// Extract every Point placemark from `markup`, returning the first error.
///
/// No partial results: if any part of the document is malformed the whole
/// extraction fails.
pub fn try_extract(markup: &str) -> Result<Vec<PlacemarkRecord>> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.expand_empty_elements = true;
    config.check_end_names = true;

    let mut walker = PlacemarkWalker::default();

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::parse(position, e.to_string()))?;

        match event {
            Event::Start(e) => {
                // Attributes are parsed lazily; walk them so malformed ones fail the document
                for attribute in e.attributes().with_checks(true) {
                    attribute.map_err(|err| ExtractError::parse(position, err.to_string()))?;
                }
                walker.open(e.local_name().as_ref(), position)?;
            }
            Event::End(_) => walker.close(position)?,
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| ExtractError::parse(position, err.to_string()))?;
                walker.text(&text, position)?;
            }
            Event::CData(e) => {
                // Input is a &str, so CDATA content is always UTF-8
                let text = String::from_utf8_lossy(&e);
                walker.text(&text, position)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes
            _ => {}
        }
    }

    walker.finish(reader.buffer_position() as u64)
}

/// What an open element means to the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Placemark,
    /// First direct `name` child of the innermost open placemark
    Name,
    /// First direct `Point` child of the innermost open placemark
    Point,
    /// First direct `coordinates` child of that `Point`
    Coordinates,
    Other,
}

#[derive(Debug)]
enum PointState {
    Absent,
    Present {
        coordinates: Option<String>,
    },
}

/// A placemark whose end tag has not been seen yet.
#[derive(Debug)]
struct PendingPlacemark {
    /// Position in the output, fixed when the start tag is read
    slot: usize,
    name: Option<String>,
    point: PointState,
}

impl PendingPlacemark {
    fn new(slot: usize) -> Self {
        Self {
            slot,
            name: None,
            point: PointState::Absent,
        }
    }

    fn into_record(self) -> Option<PlacemarkRecord> {
        let name = non_empty_trimmed(self.name).unwrap_or_else(|| NAME_NOT_FOUND.to_string());

        match self.point {
            PointState::Absent => {
                debug!(name = %name, "Skipping placemark without a Point");
                None
            }
            PointState::Present { coordinates } => Some(match non_empty_trimmed(coordinates) {
                Some(coordinates) => PlacemarkRecord::new(name, coordinates),
                None => PlacemarkRecord::missing_coordinates(name),
            }),
        }
    }
}

fn non_empty_trimmed(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[derive(Debug, Default)]
struct PlacemarkWalker {
    frames: Vec<Frame>,
    pending: Vec<PendingPlacemark>,
    slots: Vec<Option<PlacemarkRecord>>,
    root_closed: bool,
}

impl PlacemarkWalker {
    fn open(&mut self, local_name: &[u8], position: u64) -> Result<()> {
        if self.frames.is_empty() && self.root_closed {
            return Err(ExtractError::parse(
                position,
                "junk after document element",
            ));
        }

        let parent = self.frames.last().copied();
        let frame = match (local_name, parent) {
            (PLACEMARK, _) => {
                let slot = self.slots.len();
                self.slots.push(None);
                self.pending.push(PendingPlacemark::new(slot));
                Frame::Placemark
            }
            (NAME, Some(Frame::Placemark)) => {
                let placemark = self.innermost()?;
                if placemark.name.is_none() {
                    placemark.name = Some(String::new());
                    Frame::Name
                } else {
                    Frame::Other
                }
            }
            (POINT, Some(Frame::Placemark)) => {
                let placemark = self.innermost()?;
                if matches!(placemark.point, PointState::Absent) {
                    placemark.point = PointState::Present { coordinates: None };
                    Frame::Point
                } else {
                    Frame::Other
                }
            }
            (COORDINATES, Some(Frame::Point)) => match &mut self.innermost()?.point {
                PointState::Present { coordinates } if coordinates.is_none() => {
                    *coordinates = Some(String::new());
                    Frame::Coordinates
                }
                _ => Frame::Other,
            },
            _ => Frame::Other,
        };

        self.frames.push(frame);
        Ok(())
    }

    fn close(&mut self, position: u64) -> Result<()> {
        let frame = self
            .frames
            .pop()
            .ok_or_else(|| ExtractError::parse(position, "end tag without a start tag"))?;

        if frame == Frame::Placemark {
            let placemark = self.pending.pop().ok_or_else(|| {
                ExtractError::Unexpected(format!(
                    "placemark closed at byte {position} was never opened"
                ))
            })?;
            let slot = placemark.slot;
            let record = placemark.into_record();
            let entry = self.slots.get_mut(slot).ok_or_else(|| {
                ExtractError::Unexpected(format!("no output slot {slot} for placemark"))
            })?;
            *entry = record;
        }

        if self.frames.is_empty() {
            self.root_closed = true;
        }
        Ok(())
    }

    fn text(&mut self, text: &str, position: u64) -> Result<()> {
        match self.frames.last().copied() {
            None if !text.trim().is_empty() => Err(ExtractError::parse(
                position,
                "text outside the root element",
            )),
            Some(Frame::Name) => {
                if let Some(name) = self.innermost()?.name.as_mut() {
                    name.push_str(text);
                }
                Ok(())
            }
            Some(Frame::Coordinates) => {
                if let PointState::Present {
                    coordinates: Some(coordinates),
                } = &mut self.innermost()?.point
                {
                    coordinates.push_str(text);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn innermost(&mut self) -> Result<&mut PendingPlacemark> {
        self.pending
            .last_mut()
            .ok_or_else(|| ExtractError::Unexpected("no open placemark".to_string()))
    }

    fn finish(self, position: u64) -> Result<Vec<PlacemarkRecord>> {
        if !self.frames.is_empty() {
            return Err(ExtractError::parse(
                position,
                format!(
                    "document ended with {} unclosed element(s)",
                    self.frames.len()
                ),
            ));
        }
        if !self.root_closed {
            return Err(ExtractError::parse(position, "no element found"));
        }

        let placemarks = self.slots.len();
        let records: Vec<PlacemarkRecord> = self.slots.into_iter().flatten().collect();
        debug!(
            placemarks,
            records = records.len(),
            "Extracted placemarks from KML"
        );
        Ok(records)
    }
}
