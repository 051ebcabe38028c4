//! Workday ledger computation command.
//!
//! Runs one full computation pass (parse, build, account, compose) over the
//! supplied entry rows and prints the segment breakdown, category totals,
//! overage details, the time ruler, and optionally the narrative summary.
//! Engine errors are presented, never propagated as failures of the
//! process: an unfilled form is a user state, not a crash.

use crate::{
    libs::{
        builder::build_events,
        config::Config,
        entry::{self, EntryRow},
        formatter::SegmentGroup,
        ledger::compute_ledger,
        messages::Message,
        narrative::narrative_summary,
        timeline::{compose_segments, sorted_events},
        view::View,
    },
    msg_debug, msg_error, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

/// Where the entry rows of a computation pass come from: a JSON file or
/// inline interval specs. Shared by `calc` and `export`.
#[derive(Debug, Args)]
pub struct EntrySource {
    #[arg(short, long, help = "JSON file with entry rows")]
    file: Option<PathBuf>,
    #[arg(long, help = "Shift interval, e.g. \"9:00 AM-5:00 PM\"")]
    shift: Option<String>,
    #[arg(long = "rest", value_name = "SPEC", help = "Break interval, e.g. \"Lunch=12:00 PM-1:00 PM\" (repeatable)")]
    rests: Vec<String>,
}

impl EntrySource {
    /// Collects entry rows from the file or the inline specs.
    ///
    /// Inline break specs without a shift still produce rows; the builder
    /// reports the missing shift boundary for them.
    pub fn rows(&self) -> Result<Vec<EntryRow>> {
        if let Some(path) = &self.file {
            return entry::load_entries(path);
        }

        let mut rows = Vec::new();
        if let Some(shift) = &self.shift {
            rows.push(entry::parse_shift_spec(shift)?);
        }
        for rest in &self.rests {
            rows.push(entry::parse_rest_spec(rest)?);
        }
        Ok(rows)
    }
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    #[command(flatten)]
    source: EntrySource,
    #[arg(long, help = "Employee name for the narrative summary")]
    employee: Option<String>,
    #[arg(long, help = "Frame the ruler to the event envelope")]
    zoom: bool,
    #[arg(long, help = "Print a starter entry file with the stock break roster and exit")]
    template: bool,
}

pub fn cmd(calc_args: CalcArgs) -> Result<()> {
    if calc_args.template {
        println!("{}", serde_json::to_string_pretty(&entry::template_rows())?);
        return Ok(());
    }

    let config = Config::read()?;
    let rows = calc_args.source.rows()?;

    let events = match build_events(&rows, config.anchor_policy()) {
        Ok(events) => events,
        Err(e) => {
            msg_error!(Message::ComputationFailed(e.to_string()));
            return Ok(());
        }
    };
    msg_debug!("built {} events from {} entry rows", events.len(), rows.len());

    let dropped = rows.len() - events.len() / 2;
    if dropped > 0 {
        msg_warning!(Message::RowsDropped(dropped));
    }
    if events.len() == 2 {
        msg_info!(Message::NoBreaksEntered);
    }

    let ledger = match compute_ledger(&events, &config.limits) {
        Ok(ledger) => ledger,
        Err(e) => {
            msg_error!(Message::ComputationFailed(e.to_string()));
            return Ok(());
        }
    };
    let segments = compose_segments(&events);

    let date = Local::now().format("%B %-d, %Y").to_string();
    msg_print!(Message::LedgerHeader(date), true);

    View::segments(&segments.format())?;
    View::ledger(&ledger)?;

    let range = if calc_args.zoom { config.ruler.zoomed(&events) } else { config.ruler };
    let marker_hour = range.clamp_hour(ledger.shift_start / 60);
    println!();
    View::ruler(&range, marker_hour)?;

    if let Some(employee) = calc_args.employee {
        msg_print!(Message::NarrativeHeader, true);
        println!("{}", narrative_summary(&sorted_events(&events), &employee));
    }

    Ok(())
}
