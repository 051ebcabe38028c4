//! Break interval classification and per-category allotments.
//!
//! Every non-shift interval belongs to one [`BreakCategory`], assigned once
//! at interval-creation time. The case-insensitive substring match on the
//! label exists only as an import convenience at the boundary; everything
//! downstream works with the enum, never the raw label.
//!
//! Allotments come from configuration: Break and Lunch carry a free minute
//! budget and only time past it is owed back, every Outage minute is owed
//! back, and Makeup time is credit that was already repaid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a non-shift interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakCategory {
    Break,
    Lunch,
    Outage,
    Makeup,
    Unclassified,
}

impl BreakCategory {
    /// Derives the category from an interval label.
    ///
    /// Substring checks are case-insensitive and applied in precedence
    /// order: outage, makeup ("reposición" in the original tool), lunch,
    /// then break. Anything else is an ad-hoc labeled interval.
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("outage") {
            BreakCategory::Outage
        } else if lower.contains("reposición") || lower.contains("reposicion") || lower.contains("makeup") {
            BreakCategory::Makeup
        } else if lower.contains("lunch") {
            BreakCategory::Lunch
        } else if lower.contains("break") {
            BreakCategory::Break
        } else {
            BreakCategory::Unclassified
        }
    }

    pub fn all() -> [BreakCategory; 5] {
        [
            BreakCategory::Break,
            BreakCategory::Lunch,
            BreakCategory::Outage,
            BreakCategory::Makeup,
            BreakCategory::Unclassified,
        ]
    }
}

impl fmt::Display for BreakCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BreakCategory::Break => write!(f, "Break"),
            BreakCategory::Lunch => write!(f, "Lunch"),
            BreakCategory::Outage => write!(f, "Outage"),
            BreakCategory::Makeup => write!(f, "Makeup"),
            BreakCategory::Unclassified => write!(f, "Unclassified"),
        }
    }
}

/// How a category's minutes count against the total to repay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allotment {
    /// Free minutes per label group; only the excess is owed.
    Limit(i64),
    /// Every minute is owed back.
    AllOwed,
    /// Time already repaid; displayed, never owed.
    Credit,
}

/// Per-category allotment configuration.
///
/// Unclassified intervals behave like ad-hoc breaks and share the break
/// allotment, applied per label group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimits {
    /// Free minutes for each break-labeled interval group.
    pub break_minutes: i64,
    /// Free minutes for each lunch-labeled interval group.
    pub lunch_minutes: i64,
}

impl CategoryLimits {
    pub fn allotment(&self, category: BreakCategory) -> Allotment {
        match category {
            BreakCategory::Break | BreakCategory::Unclassified => Allotment::Limit(self.break_minutes),
            BreakCategory::Lunch => Allotment::Limit(self.lunch_minutes),
            BreakCategory::Outage => Allotment::AllOwed,
            BreakCategory::Makeup => Allotment::Credit,
        }
    }
}

impl Default for CategoryLimits {
    fn default() -> Self {
        Self {
            break_minutes: 15,
            lunch_minutes: 60,
        }
    }
}
