//! Terminal time ruler command.
//!
//! Draws the extended-hour ruler with dual 12h/24h labels and a marker at
//! the selected hour. The marker defaults to the current wall-clock hour
//! clamped into the range; `--at` exercises the inverse position-to-hour
//! mapping used by drag selection.

use crate::{
    libs::{config::Config, messages::Message, ruler::HourRange, view::View},
    msg_bail_anyhow,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct RulerArgs {
    #[arg(long, help = "Marker hour in extended 24h+ form (e.g. 26 for 2 AM next day)")]
    hour: Option<i64>,
    #[arg(long, value_name = "PERCENT", help = "Snap the marker to the nearest hour at this position (0-100)")]
    at: Option<f64>,
    #[arg(long, value_name = "START..END", help = "Override the configured hour range, e.g. 12..32")]
    range: Option<String>,
}

pub fn cmd(ruler_args: RulerArgs) -> Result<()> {
    let config = Config::read()?;
    let range = match &ruler_args.range {
        Some(spec) => parse_range(spec)?,
        None => config.ruler,
    };

    let selected = if let Some(percent) = ruler_args.at {
        range.nearest_hour(percent / 100.0)
    } else if let Some(hour) = ruler_args.hour {
        range.clamp_hour(hour)
    } else {
        range.initial_hour(Local::now().time())
    };

    View::ruler(&range, selected)?;
    Ok(())
}

fn parse_range(spec: &str) -> Result<HourRange> {
    let parts = match spec.split_once("..") {
        Some((start, end)) => start.trim().parse::<i64>().ok().zip(end.trim().parse::<i64>().ok()),
        None => None,
    };
    match parts {
        Some((start, end)) if end > start => Ok(HourRange::new(start, end)),
        _ => msg_bail_anyhow!(Message::RangeSpecInvalid(spec.to_string())),
    }
}
