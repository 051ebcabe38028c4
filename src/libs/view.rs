use crate::libs::clock::format_minutes;
use crate::libs::formatter::FormattedSegment;
use crate::libs::ledger::Ledger;
use crate::libs::ruler::{self, HourRange};
use anyhow::Result;
use prettytable::{row, Table};

/// Width of one hour column in the terminal ruler.
const HOUR_COL: usize = 4;

pub struct View {}

impl View {
    /// Prints the segment-by-segment breakdown of the workday.
    pub fn segments(segments: &Vec<FormattedSegment>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "SEGMENT", "START", "END", "DURATION"]);
        for segment in segments {
            table.add_row(row![segment.id, segment.name, segment.start, segment.end, segment.duration]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints category totals and overage details of a ledger.
    pub fn ledger(ledger: &Ledger) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["CATEGORY", "TOTAL"]);
        for (category, minutes) in &ledger.category_totals {
            table.add_row(row![category.to_string(), format_minutes(*minutes)]);
        }
        table.printstd();

        if !ledger.overages.is_empty() {
            let mut overages = Table::new();
            overages.add_row(row!["OVER ALLOTMENT", "CATEGORY", "OWED"]);
            for overage in &ledger.overages {
                overages.add_row(row![overage.label, overage.category.to_string(), format_minutes(overage.overage_minutes)]);
            }
            overages.printstd();
        }

        println!("Gross shift:     {}", format_minutes(ledger.gross_minutes));
        println!("Net productive:  {}", format_minutes(ledger.net_productive_minutes));
        if ledger.makeup_minutes > 0 {
            println!("Makeup credit:   {}", format_minutes(ledger.makeup_minutes));
        }
        println!("Total to repay:  {}", format_minutes(ledger.total_to_repay));

        Ok(())
    }

    /// Draws the dual-label time ruler with the marker at the selected hour.
    ///
    /// Top labels are extended 24h+ hours, bottom labels their 12-hour
    /// faces; major ticks fall every three hours, matching the original
    /// ruler's layout.
    pub fn ruler(range: &HourRange, selected_hour: i64) -> Result<()> {
        let mut marker_line = String::new();
        let mut top_line = String::new();
        let mut tick_line = String::new();
        let mut bottom_line = String::new();

        for hour in range.hours() {
            let marker = if hour == selected_hour { "▼" } else { " " };
            marker_line.push_str(&format!("{:>width$}", marker, width = HOUR_COL));
            top_line.push_str(&format!("{:>width$}", hour, width = HOUR_COL));
            let tick = if ruler::is_major_tick(hour) { "|" } else { "'" };
            tick_line.push_str(&format!("{:>width$}", tick, width = HOUR_COL));
            bottom_line.push_str(&format!("{:>width$}", ruler::hour_12(hour), width = HOUR_COL));
        }

        println!("{}", marker_line);
        println!("{}", top_line);
        println!("{}", tick_line);
        println!("{}", bottom_line);

        let pm_hours: Vec<i64> = range.hours().filter(|&h| ruler::is_pm(h)).collect();
        let am_hours: Vec<i64> = range.hours().filter(|&h| !ruler::is_pm(h)).collect();
        if let (Some(pm_first), Some(pm_last)) = (pm_hours.first(), pm_hours.last()) {
            print!("PM {}-{}", pm_first, pm_last);
        }
        if let (Some(am_first), Some(am_last)) = (am_hours.first(), am_hours.last()) {
            print!("   AM (extended) {}-{}", am_first, am_last);
        }
        println!();

        let (h24, h12, meridiem) = ruler::clock_readout(selected_hour);
        println!(
            "Marker at {:.1}% | 24h: {}  12h: {} {}",
            range.marker_percent(selected_hour),
            h24,
            h12,
            meridiem
        );

        Ok(())
    }
}
