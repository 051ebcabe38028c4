use serde::{Deserialize, Serialize};
use std::fmt;

/// The four boundary kinds a timeline event can carry.
///
/// The variant order is the tie-break used when sorting events that share a
/// minute: an end followed by a start at the same instant must read as a
/// work segment, not a zero-width gap, so `BreakEnd` sorts before
/// `BreakStart` and the shift boundaries bracket everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    WorkStart,
    BreakEnd,
    BreakStart,
    WorkEnd,
}

impl EventKind {
    /// Whether the interval to the right of an event of this kind is worked
    /// time.
    pub fn opens_work(&self) -> bool {
        matches!(self, EventKind::WorkStart | EventKind::BreakEnd)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventKind::WorkStart => write!(f, "work start"),
            EventKind::WorkEnd => write!(f, "work end"),
            EventKind::BreakStart => write!(f, "break start"),
            EventKind::BreakEnd => write!(f, "break end"),
        }
    }
}

/// A single clock event on the extended minute timeline.
///
/// Immutable once built: the accounting engine and the compositor only ever
/// read events, and every computation pass rebuilds them from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Absolute minute offset on the extended timeline; may exceed 1440 for
    /// overnight spans.
    pub minutes: i64,
    pub kind: EventKind,
    /// Category tag of the owning interval (e.g. "Lunch", "Break 1").
    pub label: String,
}

impl TimelineEvent {
    pub fn new(minutes: i64, kind: EventKind, label: &str) -> Self {
        Self {
            minutes,
            kind,
            label: label.to_string(),
        }
    }

    /// Sort key shared by the accounting engine and the compositor.
    pub fn sort_key(&self) -> (i64, EventKind) {
        (self.minutes, self.kind)
    }
}
