use crate::config::Config;
use crate::core::archive::{self, ArchiveOutcome};
use crate::core::reader::{self, ReadOutcome};
use crate::core::transform::{self, Annotations};
use crate::core::{dwell, writer};
use crate::errors::AppResult;
use crate::models::{DwellReport, RecordLayout};
use crate::utils::RunClock;
use std::path::PathBuf;

/// Everything one run needs, resolved from config and CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub done_dir: String,
    pub delimiter: u8,
    pub layout: RecordLayout,
    pub annotations: Annotations,
    pub dwell: bool,
}

impl ConvertOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            input: cfg.input_path(),
            output_dir: cfg.output_dir_path(),
            done_dir: cfg.done_dir.clone(),
            delimiter: cfg.delimiter_byte(),
            layout: cfg.layout,
            annotations: Annotations {
                envelope: cfg.envelope,
                processing_time: cfg.processing_time,
            },
            dwell: cfg.dwell,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub records: usize,
    pub archive: ArchiveOutcome,
    pub dwell: Option<DwellReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Input file absent: nothing written, nothing moved.
    NoData,
    Converted(RunSummary),
}

pub struct ConvertLogic;

impl ConvertLogic {
    /// read → write → archive → (dwell)
    ///
    /// A malformed row aborts before anything is written.
    pub fn run(opts: &ConvertOptions, clock: &RunClock) -> AppResult<RunOutcome> {
        let records = match reader::read_records(&opts.input, opts.delimiter, opts.layout)? {
            ReadOutcome::NoInput => return Ok(RunOutcome::NoData),
            ReadOutcome::Rows(records) => records,
        };

        let document = transform::build_document(records, clock, opts.annotations);
        let output = writer::output_path(&opts.output_dir, clock);
        writer::write_json_file(&document, &output)?;

        let archive = archive::archive_input(&opts.input, &opts.done_dir)?;

        let dwell = opts
            .dwell
            .then(|| dwell::calculate(document.records(), clock.now()));

        tracing::info!(
            input = %opts.input.display(),
            output = %output.display(),
            records = document.len(),
            "conversion completed"
        );

        Ok(RunOutcome::Converted(RunSummary {
            output,
            records: document.len(),
            archive,
            dwell,
        }))
    }

    /// Read the input and compute dwell times only; writes and moves nothing.
    pub fn dwell_only(opts: &ConvertOptions, clock: &RunClock) -> AppResult<Option<DwellReport>> {
        match reader::read_records(&opts.input, opts.delimiter, opts.layout)? {
            ReadOutcome::NoInput => Ok(None),
            ReadOutcome::Rows(records) => Ok(Some(dwell::calculate(&records, clock.now()))),
        }
    }
}
