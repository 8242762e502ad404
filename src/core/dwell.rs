//! Per-identifier dwell time.
//!
//! Each record contributes `now - logged_at` to its identifier's bucket and
//! the contributions are summed. This does not pair entry and exit events:
//! two scans of the same tag both count their full distance to `now`.
//! Future-dated records contribute nothing.

use crate::models::{DwellReport, Record};
use crate::ui::messages::header;
use crate::utils::time::minutes_since;
use chrono::NaiveDateTime;

pub fn calculate(records: &[Record], now: NaiveDateTime) -> DwellReport {
    let mut report = DwellReport::new();
    for r in records {
        report
            .entry(r.rfid_number.clone())
            .or_default()
            .add_minutes(minutes_since(r.logged_at, now));
    }
    report
}

/// One line per identifier: `<rfid>: <H> hours, <M> minutes`.
pub fn format_lines(report: &DwellReport) -> Vec<String> {
    report
        .iter()
        .map(|(rfid, time)| format!("{rfid}: {time}"))
        .collect()
}

pub fn print_report(report: &DwellReport) {
    header("Dwell time per RFID");
    for line in format_lines(report) {
        println!("{line}");
    }
}
