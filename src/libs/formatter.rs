//! Display formatting for composed timeline segments.
//!
//! Converts segments into pre-formatted string rows ready for table
//! rendering and data export. Times are shown as 12-hour clock faces and
//! durations as "HH:MM"; pre-formatting keeps table views and CSV/JSON
//! export byte-identical.

use crate::libs::clock::{format_minutes, format_minutes_12h};
use crate::libs::timeline::Segment;
use serde::{Deserialize, Serialize};

/// A formatted segment row for display and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedSegment {
    /// Sequential number within the breakdown, starting from 1.
    pub id: i32,
    /// Segment name ("Work block" or the break label).
    pub name: String,
    /// Formatted start time (e.g. "9:00 AM").
    pub start: String,
    /// Formatted end time (e.g. "5:00 PM").
    pub end: String,
    /// Formatted duration (e.g. "08:00").
    pub duration: String,
}

/// Formatting extension for a composed segment list.
pub trait SegmentGroup {
    fn format(&self) -> Vec<FormattedSegment>;
}

impl SegmentGroup for Vec<Segment> {
    fn format(&self) -> Vec<FormattedSegment> {
        self.iter()
            .enumerate()
            .map(|(index, segment)| FormattedSegment {
                id: (index + 1) as i32,
                name: segment.kind.to_string(),
                start: format_minutes_12h(segment.start_minutes),
                end: format_minutes_12h(segment.end_minutes),
                duration: format_minutes(segment.duration_minutes),
            })
            .collect()
    }
}
