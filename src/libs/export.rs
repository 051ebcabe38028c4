//! Data export for computed ledgers.
//!
//! Writes the result of a computation pass to disk in CSV or JSON format.
//! JSON carries the full ledger plus the composed segments; CSV carries the
//! segment breakdown rows, which is the tabular part of the result.

use crate::libs::formatter::FormattedSegment;
use crate::libs::ledger::Ledger;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything one computation pass produces, bundled for export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub ledger: Ledger,
    pub segments: Vec<FormattedSegment>,
}

impl ExportData {
    pub fn new(ledger: Ledger, segments: Vec<FormattedSegment>) -> Self {
        Self { ledger, segments }
    }

    /// Writes the data to `path` in the requested format.
    pub fn write(&self, format: ExportFormat, path: &Path) -> Result<()> {
        match format {
            ExportFormat::Csv => self.write_csv(path),
            ExportFormat::Json => self.write_json(path),
        }
    }

    fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["#", "SEGMENT", "START", "END", "DURATION"])?;
        for segment in &self.segments {
            writer.write_record([
                segment.id.to_string(),
                segment.name.clone(),
                segment.start.clone(),
                segment.end.clone(),
                segment.duration.clone(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
