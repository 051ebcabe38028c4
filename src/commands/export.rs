//! Ledger export command.
//!
//! Runs the same computation pass as `calc` and writes the result to disk
//! in CSV or JSON format instead of printing tables.

use super::calc::EntrySource;
use crate::{
    libs::{
        builder::build_events,
        config::Config,
        export::{ExportData, ExportFormat},
        formatter::SegmentGroup,
        ledger::compute_ledger,
        messages::Message,
        timeline::compose_segments,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    source: EntrySource,
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv, help = "Export format")]
    format: ExportFormat,
    #[arg(short, long, help = "Output file path (defaults to ledger.<format>)")]
    output: Option<PathBuf>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let rows = export_args.source.rows()?;

    let events = match build_events(&rows, config.anchor_policy()) {
        Ok(events) => events,
        Err(e) => {
            msg_error!(Message::ComputationFailed(e.to_string()));
            return Ok(());
        }
    };
    let ledger = match compute_ledger(&events, &config.limits) {
        Ok(ledger) => ledger,
        Err(e) => {
            msg_error!(Message::ComputationFailed(e.to_string()));
            return Ok(());
        }
    };
    let segments = compose_segments(&events).format();

    let path = export_args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("ledger.{}", export_args.format)));
    ExportData::new(ledger, segments).write(export_args.format, &path)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
