//! 12-hour clock-face parsing and minute-offset formatting.
//!
//! The engine models the workday as a continuous minute line that starts at a
//! configurable anchor and spans past 24h, so overnight shifts never need
//! date arithmetic. This module converts user-facing clock faces (hour 1-12,
//! minute 0-59, AM/PM) onto that line and back.
//!
//! ## Anchor policy
//!
//! A computation pass may anchor the timeline at any hour. Clock values that
//! land before the anchor on a naive 24h clock are folded forward by +1440
//! minutes so ordering stays monotonic (1 AM sorts after an 11 PM start on a
//! noon-anchored line). The fold is unconditional and must be applied with
//! the same policy to every input of a single pass; with the default
//! midnight anchor it is a no-op and overnight spans are carried by the
//! per-interval roll-over in the interval builder.
//!
//! ## Parsing semantics
//!
//! Invalid clock faces are absence, not errors: `parse_clock_input` returns
//! `None` for an out-of-range hour or minute, and the owning interval is
//! simply dropped from accounting. This mirrors partially-filled entry rows
//! in the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minutes in one 24-hour day cycle.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// AM/PM half of a 12-hour clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// A raw 12-hour clock face as supplied by the presentation layer.
///
/// Values are not validated on construction; range checking happens in
/// [`parse_clock_input`] so that out-of-range input degrades to an absent
/// interval instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockInput {
    /// Clock hour, expected in `1..=12`.
    pub hour: u32,
    /// Clock minute, expected in `0..=59`.
    pub minute: u32,
    /// AM or PM half of the day.
    pub meridiem: Meridiem,
}

impl ClockInput {
    pub fn new(hour: u32, minute: u32, meridiem: Meridiem) -> Self {
        Self { hour, minute, meridiem }
    }
}

impl fmt::Display for ClockInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

/// Parses clock strings such as `"9:05 AM"` or `"12:30pm"`.
///
/// This is the import convenience for CLI arguments and JSON entry files;
/// range validation still happens at parse-to-minutes time.
impl FromStr for ClockInput {
    type Err = ClockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        let (time_part, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
            (rest.trim_end(), Meridiem::Am)
        } else if let Some(rest) = lower.strip_suffix("pm") {
            (rest.trim_end(), Meridiem::Pm)
        } else {
            return Err(ClockParseError(trimmed.to_string()));
        };

        let (hour_str, minute_str) = time_part.split_once(':').ok_or_else(|| ClockParseError(trimmed.to_string()))?;
        let hour = hour_str.trim().parse::<u32>().map_err(|_| ClockParseError(trimmed.to_string()))?;
        let minute = minute_str.trim().parse::<u32>().map_err(|_| ClockParseError(trimmed.to_string()))?;

        Ok(ClockInput::new(hour, minute, meridiem))
    }
}

/// Error returned when a clock string cannot be split into its parts.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized clock time '{0}', expected e.g. '9:05 AM'")]
pub struct ClockParseError(pub String);

/// Where the extended timeline begins.
///
/// Clock values strictly before the anchor minute are folded forward by one
/// full day so they sort after late-evening values. The policy is part of
/// the configuration and applies to every clock input of a computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorPolicy {
    /// Minute of the naive 24h day where the extended timeline starts.
    pub anchor_minute: i64,
}

impl AnchorPolicy {
    /// Timeline starts at midnight; the fold never applies.
    pub fn midnight() -> Self {
        Self { anchor_minute: 0 }
    }

    /// Timeline starts at noon, the original ruler's 12..32 day model.
    pub fn noon() -> Self {
        Self { anchor_minute: 12 * 60 }
    }

    /// Anchor at the start of the given hour of the naive 24h day.
    pub fn at_hour(hour: i64) -> Self {
        Self { anchor_minute: hour.clamp(0, 23) * 60 }
    }

    /// Folds a naive-day minute offset onto the extended timeline.
    pub fn fold(&self, minutes: i64) -> i64 {
        if minutes < self.anchor_minute {
            minutes + MINUTES_PER_DAY
        } else {
            minutes
        }
    }
}

impl Default for AnchorPolicy {
    fn default() -> Self {
        Self::midnight()
    }
}

/// Converts a 12-hour clock face into an absolute minute offset on the
/// extended timeline, or `None` when the face is out of range.
///
/// Conversion follows the usual 12-hour rules: 12 AM is hour 0, 12 PM stays
/// hour 12, any other PM hour gains 12. The anchor fold is applied last.
pub fn parse_clock_input(hour: u32, minute: u32, meridiem: Meridiem, policy: AnchorPolicy) -> Option<i64> {
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let h24 = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };

    Some(policy.fold(i64::from(h24) * 60 + i64::from(minute)))
}

/// Parses an optional clock face through the anchor policy.
///
/// Absent input yields absent output; this is what lets partially-filled
/// entry rows drop out of the computation silently.
pub fn parse_optional(input: Option<&ClockInput>, policy: AnchorPolicy) -> Option<i64> {
    input.and_then(|c| parse_clock_input(c.hour, c.minute, c.meridiem, policy))
}

/// Formats a signed minute total as `HH:MM` (e.g. `08:30`, `-01:15`).
pub fn format_minutes(total_minutes: i64) -> String {
    let sign = if total_minutes < 0 { "-" } else { "" };
    let abs = total_minutes.abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

/// Formats an extended minute offset as a 12-hour clock face, modulo one day
/// (e.g. minute 1500 renders as `1:00 AM`).
pub fn format_minutes_12h(total_minutes: i64) -> String {
    let in_day = total_minutes.rem_euclid(MINUTES_PER_DAY);
    let hours = in_day / 60;
    let minutes = in_day % 60;
    let meridiem = if hours >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let mut hour12 = hours % 12;
    if hour12 == 0 {
        hour12 = 12;
    }
    format!("{}:{:02} {}", hour12, minutes, meridiem)
}
