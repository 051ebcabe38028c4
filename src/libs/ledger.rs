//! Accounting engine for the workday ledger.
//!
//! This module is the heart of the calculator: it clips break intervals to
//! the shift window, classifies them by label, sums durations per category,
//! computes overage against the configured allotments, and derives the net
//! productive time and the total the employee owes back.
//!
//! ## Accounting model
//!
//! ```text
//! gross          = work end - work start
//! clipped(b)     = max(0, min(b.end, work end) - max(b.start, work start))
//! net productive = gross - Σ clipped break durations
//! overage(group) = max(0, clipped - allotment)     for Break/Lunch groups
//!                = clipped                          for Outage groups
//!                = 0 (credit, tracked separately)   for Makeup groups
//! total to repay = Σ overage
//! ```
//!
//! Conservation holds by construction: net productive time plus the sum of
//! clipped break durations equals the gross shift duration, exactly. No
//! minute is double-counted or dropped.
//!
//! The engine is a pure function of its inputs. Errors are values from the
//! [`ComputeError`] taxonomy; no partial ledger is ever produced.

use crate::libs::category::{Allotment, BreakCategory, CategoryLimits};
use crate::libs::event::{EventKind, TimelineEvent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hard failures of a computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComputeError {
    /// No valid shift start/end pair was entered.
    #[error("no valid shift start and end pair was entered")]
    MissingShiftBoundary,
    /// Shift end does not come after shift start even after roll-over.
    #[error("shift end must come after shift start")]
    InvalidShiftWindow,
}

/// Clipped minutes of one label group (e.g. "Break 1", "Lunch").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelTotal {
    pub label: String,
    pub category: BreakCategory,
    pub minutes: i64,
}

/// Overage of one label group past its category allotment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOverage {
    pub label: String,
    pub category: BreakCategory,
    pub overage_minutes: i64,
}

/// The computed workday ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Shift start on the extended timeline.
    pub shift_start: i64,
    /// Shift end on the extended timeline.
    pub shift_end: i64,
    /// Gross shift duration in minutes.
    pub gross_minutes: i64,
    /// Clipped minutes per label group, zero-duration groups omitted.
    pub label_totals: Vec<LabelTotal>,
    /// Clipped minutes per category, zero categories omitted.
    pub category_totals: BTreeMap<BreakCategory, i64>,
    /// Per-label overage details, zero overages omitted.
    pub overages: Vec<LabelOverage>,
    /// Gross minutes minus every clipped break minute.
    pub net_productive_minutes: i64,
    /// Makeup time already repaid; informational, never owed.
    pub makeup_minutes: i64,
    /// Total minutes to repay across all overage-bearing categories.
    pub total_to_repay: i64,
}

/// Computes the ledger for one pass over an event set.
///
/// When duplicate shift boundaries exist, the first chronological
/// `WorkStart` and `WorkEnd` are authoritative; later duplicates are
/// ignored by accounting.
pub fn compute_ledger(events: &[TimelineEvent], limits: &CategoryLimits) -> Result<Ledger, ComputeError> {
    let shift_start = first_of_kind(events, EventKind::WorkStart).ok_or(ComputeError::MissingShiftBoundary)?;
    let shift_end = first_of_kind(events, EventKind::WorkEnd).ok_or(ComputeError::MissingShiftBoundary)?;

    let gross_minutes = shift_end - shift_start;
    if gross_minutes <= 0 {
        return Err(ComputeError::InvalidShiftWindow);
    }

    // Pair break starts with break ends by label equality, in chronological
    // order within each label group.
    let mut grouped: BTreeMap<&str, (Vec<i64>, Vec<i64>)> = BTreeMap::new();
    for event in events {
        match event.kind {
            EventKind::BreakStart => grouped.entry(&event.label).or_default().0.push(event.minutes),
            EventKind::BreakEnd => grouped.entry(&event.label).or_default().1.push(event.minutes),
            _ => {}
        }
    }

    let mut label_totals = Vec::new();
    let mut category_totals: BTreeMap<BreakCategory, i64> = BTreeMap::new();
    let mut overages = Vec::new();
    let mut clipped_total = 0;
    let mut makeup_minutes = 0;
    let mut total_to_repay = 0;

    for (label, (mut starts, mut ends)) in grouped {
        starts.sort_unstable();
        ends.sort_unstable();

        let clipped: i64 = starts
            .iter()
            .zip(ends.iter())
            .map(|(&start, &end)| (end.min(shift_end) - start.max(shift_start)).max(0))
            .sum();
        clipped_total += clipped;

        // Groups fully outside the shift or of zero length contribute
        // nothing to the category totals; the timeline still shows them.
        if clipped == 0 {
            continue;
        }

        let category = BreakCategory::classify(label);
        *category_totals.entry(category).or_default() += clipped;
        label_totals.push(LabelTotal {
            label: label.to_string(),
            category,
            minutes: clipped,
        });

        let overage = match limits.allotment(category) {
            Allotment::Limit(allowed) => (clipped - allowed).max(0),
            Allotment::AllOwed => clipped,
            Allotment::Credit => {
                makeup_minutes += clipped;
                0
            }
        };
        if overage > 0 {
            total_to_repay += overage;
            overages.push(LabelOverage {
                label: label.to_string(),
                category,
                overage_minutes: overage,
            });
        }
    }

    Ok(Ledger {
        shift_start,
        shift_end,
        gross_minutes,
        label_totals,
        category_totals,
        overages,
        net_productive_minutes: gross_minutes - clipped_total,
        makeup_minutes,
        total_to_repay,
    })
}

/// First chronological event of the given kind, by the shared sort order.
fn first_of_kind(events: &[TimelineEvent], kind: EventKind) -> Option<i64> {
    events.iter().filter(|e| e.kind == kind).map(|e| e.minutes).min()
}
