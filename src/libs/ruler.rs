//! Marker and range math for the time ruler.
//!
//! The ruler shows an extended hour range (default 12..32, noon to 8 AM the
//! next day) with dual 12h/24h labels. A marker sits at a whole hour; its
//! position is a percentage of the active range, and the inverse mapping
//! snaps a fractional position back to the nearest hour. All of it is pure
//! math; the presentation layer owns the selected hour and nothing here
//! mutates state.

use crate::libs::event::TimelineEvent;
use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// The active display range of the ruler, in extended hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: i64,
    pub end: i64,
}

impl HourRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn total_hours(&self) -> i64 {
        self.end - self.start
    }

    /// Marker position for an hour, as a percentage clamped to `[0, 100]`.
    pub fn marker_percent(&self, hour: i64) -> f64 {
        let total = self.total_hours();
        if total <= 0 {
            return 0.0;
        }
        let percent = (hour - self.start) as f64 / total as f64 * 100.0;
        percent.clamp(0.0, 100.0)
    }

    /// Inverse of [`marker_percent`]: snaps a fractional position
    /// (`0.0..=1.0`) to the nearest whole hour of the range.
    ///
    /// [`marker_percent`]: HourRange::marker_percent
    pub fn nearest_hour(&self, fraction: f64) -> i64 {
        let clamped = fraction.clamp(0.0, 1.0);
        self.start + (clamped * self.total_hours() as f64).round() as i64
    }

    /// Clamps an hour into the range.
    pub fn clamp_hour(&self, hour: i64) -> i64 {
        hour.clamp(self.start, self.end)
    }

    /// Initial marker hour: the current wall-clock hour, clamped into the
    /// range the way the original ruler seeded itself.
    pub fn initial_hour(&self, now: chrono::NaiveTime) -> i64 {
        self.clamp_hour(i64::from(now.hour()))
    }

    /// Display framing for an event set: floor of the earliest event hour to
    /// ceiling of the latest. Falls back to `self` when there are no events.
    pub fn zoomed(&self, events: &[TimelineEvent]) -> HourRange {
        let min = events.iter().map(|e| e.minutes).min();
        let max = events.iter().map(|e| e.minutes).max();
        match (min, max) {
            (Some(min), Some(max)) if max > min => HourRange::new(min.div_euclid(60), (max + 59).div_euclid(60)),
            _ => *self,
        }
    }

    /// Hours of the range, for label and tick generation.
    pub fn hours(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

impl Default for HourRange {
    fn default() -> Self {
        // Permanent range from 12 PM to 32h, the original's day model.
        Self { start: 12, end: 32 }
    }
}

/// 12-hour label for an extended hour (0 and 24 render as 12).
pub fn hour_12(hour_ext: i64) -> i64 {
    let h = hour_ext.rem_euclid(12);
    if h == 0 {
        12
    } else {
        h
    }
}

/// Whether an extended hour reads PM on a 12-hour clock.
pub fn is_pm(hour_ext: i64) -> bool {
    let in_day = hour_ext.rem_euclid(24);
    in_day >= 12
}

/// Major tick marks fall every three hours.
pub fn is_major_tick(hour_ext: i64) -> bool {
    hour_ext % 3 == 0
}

/// The dual clock readout for a selected hour: `(24h, 12h, AM/PM)`.
pub fn clock_readout(hour_ext: i64) -> (i64, i64, &'static str) {
    let meridiem = if is_pm(hour_ext) { "PM" } else { "AM" };
    (hour_ext, hour_12(hour_ext), meridiem)
}
