#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigParseError,

    // === LEDGER MESSAGES ===
    LedgerHeader(String),      // date
    ComputationFailed(String), // engine error text
    RowsDropped(usize),        // count of incomplete entry rows
    NoBreaksEntered,
    NarrativeHeader,

    // === RULER MESSAGES ===
    RangeSpecInvalid(String), // raw spec

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
}
