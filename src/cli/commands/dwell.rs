use crate::cli::commands::convert::NO_DATA_MESSAGE;
use crate::config::Config;
use crate::core::dwell::print_report;
use crate::core::{ConvertLogic, ConvertOptions};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::RunClock;

/// Handle the `dwell` subcommand
pub fn handle(cfg: &Config) -> AppResult<()> {
    let opts = ConvertOptions::from_config(cfg);
    let clock = RunClock::start();

    match ConvertLogic::dwell_only(&opts, &clock)? {
        None => info(NO_DATA_MESSAGE),
        Some(report) if report.is_empty() => info("No records in input file."),
        Some(report) => print_report(&report),
    }
    Ok(())
}
