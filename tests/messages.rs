#[cfg(test)]
mod tests {
    use jornada::libs::messages::Message;

    // Display is the single source of message text for the msg_* macros.
    #[test]
    fn test_message_display_text() {
        assert_eq!(Message::ConfigSaved.to_string(), "Configuration saved successfully");
        assert_eq!(Message::LedgerHeader("August 28, 2026".to_string()).to_string(), "Workday ledger for August 28, 2026");
        assert_eq!(Message::RowsDropped(2).to_string(), "2 incomplete entry row(s) were left out of the ledger");
        assert_eq!(
            Message::ComputationFailed("no shift boundary".to_string()).to_string(),
            "Could not compute the ledger: no shift boundary"
        );
        assert_eq!(
            Message::RangeSpecInvalid("12-32".to_string()).to_string(),
            "Invalid hour range '12-32', expected START..END"
        );
    }

    #[test]
    fn test_message_macros_print_through_display() {
        // The macros only format and print; this pins their input surface.
        jornada::msg_print!(Message::NarrativeHeader);
        jornada::msg_success!(Message::ExportCompleted("ledger.csv".to_string()));
        jornada::msg_info!(Message::NoBreaksEntered);
    }
}
