//! # Jornada - Workday Time Ledger
//!
//! A command-line calculator that turns a day's clock-in/clock-out events
//! into a time ledger: net productive time, per-category break totals,
//! overage to repay, and a terminal time ruler with dual 12h/24h readouts.
//!
//! ## Features
//!
//! - **Clock Parsing**: 12-hour clock faces onto an extended minute timeline
//! - **Interval Accounting**: break clipping, classification, and overage
//! - **Timeline Composition**: sorted, non-overlapping display segments
//! - **Time Ruler**: dual-label hour ruler with marker and zoom framing
//! - **Narrative Summary**: readable sentences describing the workday
//! - **Data Export**: CSV and JSON export of the computed ledger
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jornada::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
