//! Interval builder: entry rows to typed timeline events.
//!
//! For every row whose start and end both parse, two events are emitted
//! (start/end of a shift or break). An end that numerically precedes its
//! start crossed the anchor boundary and is rolled over by +1440 minutes,
//! per interval, never globally. Rows with an unparseable side are omitted
//! without error; a pass with no valid shift pair fails with
//! [`ComputeError::MissingShiftBoundary`].

use crate::libs::clock::{parse_optional, AnchorPolicy, MINUTES_PER_DAY};
use crate::libs::entry::{EntryKind, EntryRow};
use crate::libs::event::{EventKind, TimelineEvent};
use crate::libs::ledger::ComputeError;

/// Builds the event set for a computation pass.
pub fn build_events(rows: &[EntryRow], policy: AnchorPolicy) -> Result<Vec<TimelineEvent>, ComputeError> {
    let mut events = Vec::with_capacity(rows.len() * 2);
    let mut has_shift = false;

    for row in rows {
        let start = parse_optional(row.start.as_ref(), policy);
        let end = parse_optional(row.end.as_ref(), policy);
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            // Partially-filled row: drop it, this is not an error.
            _ => continue,
        };

        // Overnight roll-over, applied per interval.
        let end = if end < start { end + MINUTES_PER_DAY } else { end };

        match row.kind {
            EntryKind::Shift => {
                has_shift = true;
                events.push(TimelineEvent::new(start, EventKind::WorkStart, &row.label));
                events.push(TimelineEvent::new(end, EventKind::WorkEnd, &row.label));
            }
            EntryKind::Break => {
                events.push(TimelineEvent::new(start, EventKind::BreakStart, &row.label));
                events.push(TimelineEvent::new(end, EventKind::BreakEnd, &row.label));
            }
        }
    }

    if !has_shift {
        return Err(ComputeError::MissingShiftBoundary);
    }

    Ok(events)
}
