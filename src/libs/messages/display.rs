//! Display implementation for jornada application messages.
//!
//! Single source of truth for all user-facing message text: the `Display`
//! impl below converts structured [`Message`] values into the strings the
//! `msg_*` macros print or trace.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigParseError => "Failed to parse configuration, using defaults".to_string(),

            // === LEDGER MESSAGES ===
            Message::LedgerHeader(date) => format!("Workday ledger for {}", date),
            Message::ComputationFailed(reason) => format!("Could not compute the ledger: {}", reason),
            Message::RowsDropped(count) => format!("{} incomplete entry row(s) were left out of the ledger", count),
            Message::NoBreaksEntered => "No break intervals entered; the whole shift counts as productive time".to_string(),
            Message::NarrativeHeader => "Summary".to_string(),

            // === RULER MESSAGES ===
            Message::RangeSpecInvalid(spec) => format!("Invalid hour range '{}', expected START..END", spec),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
        };
        write!(f, "{}", text)
    }
}
