use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dwell::print_report;
use crate::core::{ConvertLogic, ConvertOptions, RunOutcome};
use crate::errors::AppResult;
use crate::models::RecordLayout;
use crate::ui::messages::{info, success};
use crate::utils::RunClock;

pub const SUCCESS_MESSAGE: &str =
    "Conversion successful. JSON file created and CSV file moved to 'done' folder.";
pub const NO_DATA_MESSAGE: &str = "No CSV file found. No conversion performed.";

/// Handle the `convert` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        layout,
        split,
        envelope,
        processing_time,
        dwell,
    } = cmd
    {
        let mut opts = ConvertOptions::from_config(cfg);

        // flags only switch features on
        if *split {
            opts.layout = RecordLayout::Split;
        } else if let Some(l) = layout {
            opts.layout = *l;
        }
        opts.annotations.envelope |= *envelope;
        opts.annotations.processing_time |= *processing_time;
        opts.dwell |= *dwell;

        let clock = RunClock::start();
        match ConvertLogic::run(&opts, &clock)? {
            RunOutcome::NoData => info(NO_DATA_MESSAGE),
            RunOutcome::Converted(summary) => {
                success(SUCCESS_MESSAGE);
                if let Some(report) = &summary.dwell {
                    print_report(report);
                }
            }
        }
    }
    Ok(())
}
