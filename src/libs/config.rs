//! Configuration management for the jornada calculator.
//!
//! Holds the per-category break allotments, the timeline anchor hour, and
//! the ruler's display range. Configuration is stored as JSON in the
//! platform-specific application data directory and is always optional:
//! a missing file yields the defaults (Break 15, Lunch 60, midnight anchor,
//! ruler 12..32).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jornada::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or defaults
//! let config = Config::read()?;
//!
//! // Run the interactive setup wizard and persist the result
//! Config::init()?.save()?;
//! # Ok(())
//! # }
//! ```

use crate::libs::category::CategoryLimits;
use crate::libs::clock::AnchorPolicy;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::ruler::HourRange;
use crate::msg_error;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Per-category free-minute allotments.
    #[serde(default)]
    pub limits: CategoryLimits,
    /// Hour of the naive 24h day where the extended timeline starts.
    #[serde(default)]
    pub anchor_hour: i64,
    /// Display range of the time ruler, in extended hours.
    #[serde(default)]
    pub ruler: HourRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: CategoryLimits::default(),
            anchor_hour: 0,
            ruler: HourRange::default(),
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist or cannot be parsed.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(&path)?;
        match serde_json::from_reader(file) {
            Ok(config) => Ok(config),
            Err(_) => {
                msg_error!(Message::ConfigParseError);
                Ok(Self::default())
            }
        }
    }

    /// Persists the configuration as pretty JSON.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Deletes the configuration file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard for allotments, anchor, and ruler range.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;
        let theme = ColorfulTheme::default();

        let break_minutes: i64 = Input::with_theme(&theme)
            .with_prompt("Free minutes per break")
            .default(current.limits.break_minutes)
            .interact_text()?;
        let lunch_minutes: i64 = Input::with_theme(&theme)
            .with_prompt("Free minutes for lunch")
            .default(current.limits.lunch_minutes)
            .interact_text()?;
        let anchor_hour: i64 = Input::with_theme(&theme)
            .with_prompt("Timeline anchor hour (0 = midnight, 12 = noon)")
            .default(current.anchor_hour)
            .validate_with(|h: &i64| if (0..=23).contains(h) { Ok(()) } else { Err("hour must be 0..=23") })
            .interact_text()?;
        let ruler_start: i64 = Input::with_theme(&theme)
            .with_prompt("Ruler range start hour")
            .default(current.ruler.start)
            .interact_text()?;
        let ruler_end: i64 = Input::with_theme(&theme)
            .with_prompt("Ruler range end hour")
            .default(current.ruler.end)
            .validate_with(move |end: &i64| if *end > ruler_start { Ok(()) } else { Err("end must be after start") })
            .interact_text()?;

        Ok(Self {
            limits: CategoryLimits {
                break_minutes,
                lunch_minutes,
            },
            anchor_hour,
            ruler: HourRange::new(ruler_start, ruler_end),
        })
    }

    /// Anchor policy for a computation pass under this configuration.
    ///
    /// The default midnight anchor suits ordinary daytime shifts. Breaks in
    /// an overnight shift are only clipped correctly when the anchor falls
    /// before the shift start (`anchor_hour` 12 for a 10 PM to 6 AM shift):
    /// the fold then carries post-midnight times past the shift start
    /// instead of leaving them at the top of the day. Anchoring at noon by
    /// default is not an option, as it would fold every pre-noon time of a
    /// daytime shift into the next day.
    pub fn anchor_policy(&self) -> AnchorPolicy {
        AnchorPolicy::at_hour(self.anchor_hour)
    }
}
