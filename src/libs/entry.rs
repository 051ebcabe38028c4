//! Entry rows: the input contract with the presentation layer.
//!
//! An entry row is one line of the calculator form: a shift or break label
//! plus optional start and end clock times. Clock fields are lenient: an
//! empty or unparseable time leaves the field absent and the interval
//! builder drops the row silently, mirroring a partially-filled form row.

use crate::libs::clock::ClockInput;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether a row is the primary work shift or a break interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Shift,
    Break,
}

/// One row of the calculator form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRow {
    pub kind: EntryKind,
    /// Category tag; for breaks this drives classification.
    pub label: String,
    /// Interval start clock face, absent when unfilled or unparseable.
    #[serde(default, with = "lenient_clock")]
    pub start: Option<ClockInput>,
    /// Interval end clock face, absent when unfilled or unparseable.
    #[serde(default, with = "lenient_clock")]
    pub end: Option<ClockInput>,
}

impl EntryRow {
    pub fn new(kind: EntryKind, label: &str, start: Option<ClockInput>, end: Option<ClockInput>) -> Self {
        Self {
            kind,
            label: label.to_string(),
            start,
            end,
        }
    }

    /// Builds a row from clock strings, tolerating unparseable times.
    pub fn from_clock_strs(kind: EntryKind, label: &str, start: &str, end: &str) -> Self {
        Self::new(kind, label, ClockInput::from_str(start).ok(), ClockInput::from_str(end).ok())
    }
}

/// The stock break roster offered by the original calculator form.
pub fn default_break_labels() -> Vec<&'static str> {
    vec!["Break 1", "Break 2", "Lunch", "Outage"]
}

/// A blank entry file: one shift row plus the stock break roster, all
/// times unfilled.
pub fn template_rows() -> Vec<EntryRow> {
    let mut rows = vec![EntryRow::new(EntryKind::Shift, "Shift", None, None)];
    rows.extend(
        default_break_labels()
            .into_iter()
            .map(|label| EntryRow::new(EntryKind::Break, label, None, None)),
    );
    rows
}

/// Loads entry rows from a JSON file (an array of rows).
pub fn load_entries(path: &std::path::Path) -> anyhow::Result<Vec<EntryRow>> {
    let file = std::fs::File::open(path)?;
    let rows: Vec<EntryRow> = serde_json::from_reader(file)?;
    Ok(rows)
}

/// Parses an inline shift spec such as `"9:00 AM-5:00 PM"`.
pub fn parse_shift_spec(spec: &str) -> anyhow::Result<EntryRow> {
    let (start, end) = split_time_range(spec)?;
    Ok(EntryRow::from_clock_strs(EntryKind::Shift, "Shift", start, end))
}

/// Parses an inline break spec such as `"Lunch=12:00 PM-1:00 PM"`.
///
/// A spec without a label (`"12:00 PM-1:00 PM"`) gets the generic "Break"
/// label.
pub fn parse_rest_spec(spec: &str) -> anyhow::Result<EntryRow> {
    let (label, range) = match spec.split_once('=') {
        Some((label, range)) => (label.trim(), range),
        None => ("Break", spec),
    };
    let (start, end) = split_time_range(range)?;
    Ok(EntryRow::from_clock_strs(EntryKind::Break, label, start, end))
}

fn split_time_range(range: &str) -> anyhow::Result<(&str, &str)> {
    range
        .split_once('-')
        .map(|(s, e)| (s.trim(), e.trim()))
        .ok_or_else(|| anyhow::anyhow!("expected START-END time range, got '{}'", range))
}

/// Serde adapter storing clock faces as display strings and tolerating
/// anything unparseable on the way in.
mod lenient_clock {
    use super::ClockInput;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &Option<ClockInput>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(clock) => serializer.serialize_some(&clock.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ClockInput>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| ClockInput::from_str(&s).ok()))
    }
}
