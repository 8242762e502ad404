use crate::models::RecordLayout;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rfidconv
/// Converts RFID access-log CSV files to JSON and archives them
#[derive(Parser)]
#[command(
    name = "rfidconv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert an RFID access-log CSV to JSON and move the CSV to a 'done' folder",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the input CSV path
    #[arg(global = true, long = "input", value_name = "FILE")]
    pub input: Option<String>,

    /// Override the directory the JSON file is written to
    #[arg(global = true, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the input CSV to JSON and archive it
    Convert {
        #[arg(
            long = "layout",
            value_enum,
            help = "Render the logged moment as one date_time field or split date/time"
        )]
        layout: Option<RecordLayout>,

        #[arg(long = "split", conflicts_with = "layout", help = "Shortcut for --layout split")]
        split: bool,

        #[arg(long = "envelope", help = "Wrap records in {time_stamp, data}")]
        envelope: bool,

        #[arg(
            long = "processing-time",
            help = "Annotate every record with the batch processing time in seconds"
        )]
        processing_time: bool,

        #[arg(long = "dwell", help = "Also print the dwell time per RFID")]
        dwell: bool,
    },

    /// Print the dwell time per RFID without converting or archiving
    Dwell,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long = "check", help = "Check the configuration file for missing or unknown keys")]
        check: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file (with --init)")]
        force: bool,
    },
}
