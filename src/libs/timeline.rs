//! Timeline compositor: events to non-overlapping display segments.
//!
//! Sorts the event set by `(minutes, kind)`, where the kind tie-break makes
//! an end-then-start at the same instant read as work rather than a
//! zero-width gap, then walks adjacent pairs and emits one segment per
//! pair with positive duration. Purely derived from the events; never feeds back into
//! accounting.

use crate::libs::category::BreakCategory;
use crate::libs::event::TimelineEvent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a display segment represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "label")]
pub enum SegmentKind {
    /// Worked time between boundaries.
    Work,
    /// A break interval, tagged with the opening event's label.
    Break(String),
}

impl SegmentKind {
    /// Category of a break segment; work segments have none.
    pub fn category(&self) -> Option<BreakCategory> {
        match self {
            SegmentKind::Work => None,
            SegmentKind::Break(label) => Some(BreakCategory::classify(label)),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SegmentKind::Work => write!(f, "Work block"),
            SegmentKind::Break(label) => write!(f, "{}", label),
        }
    }
}

/// One display segment of the composed timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start_minutes: i64,
    pub end_minutes: i64,
    pub duration_minutes: i64,
    pub kind: SegmentKind,
}

/// Composes sorted, non-overlapping segments from an event set.
///
/// Recomputed fully on every call; zero-duration pairs are skipped so the
/// ruler and legend carry no visual noise.
pub fn compose_segments(events: &[TimelineEvent]) -> Vec<Segment> {
    let mut sorted: Vec<&TimelineEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.sort_key());

    sorted
        .windows(2)
        .filter_map(|pair| {
            let (left, right) = (pair[0], pair[1]);
            let duration = right.minutes - left.minutes;
            if duration <= 0 {
                return None;
            }
            let kind = if left.kind.opens_work() {
                SegmentKind::Work
            } else {
                SegmentKind::Break(left.label.clone())
            };
            Some(Segment {
                start_minutes: left.minutes,
                end_minutes: right.minutes,
                duration_minutes: duration,
                kind,
            })
        })
        .collect()
}

/// Events sorted by the compositor's order, for consumers that need the
/// ordering but not the segments (e.g. the narrative summary).
pub fn sorted_events(events: &[TimelineEvent]) -> Vec<TimelineEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.sort_key());
    sorted
}
