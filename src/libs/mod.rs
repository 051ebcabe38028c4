//! Core library modules for the jornada application.
//!
//! Serves as the main entry point for all jornada library components. The
//! time-interval accounting engine (`clock`, `builder`, `ledger`,
//! `timeline`, `ruler`) is pure: every computation pass rebuilds its
//! entities from explicit inputs and returns errors as values. Everything
//! else is infrastructure around it.
//!
//! ## Dataflow
//!
//! ```text
//! entry rows -> clock parser -> interval builder -> accounting engine (ledger)
//!                                        \-> timeline compositor (segments)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use jornada::libs::builder::build_events;
//! use jornada::libs::category::CategoryLimits;
//! use jornada::libs::clock::AnchorPolicy;
//! use jornada::libs::entry::{EntryKind, EntryRow};
//! use jornada::libs::ledger::compute_ledger;
//!
//! # fn main() -> Result<(), jornada::libs::ledger::ComputeError> {
//! let rows = vec![EntryRow::from_clock_strs(EntryKind::Shift, "Shift", "9:00 AM", "5:00 PM")];
//! let events = build_events(&rows, AnchorPolicy::midnight())?;
//! let ledger = compute_ledger(&events, &CategoryLimits::default())?;
//! assert_eq!(ledger.gross_minutes, 480);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod category;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod event;
pub mod export;
pub mod formatter;
pub mod ledger;
pub mod messages;
pub mod narrative;
pub mod ruler;
pub mod timeline;
pub mod view;
