//! Post-processing steps applied to the parsed records before writing.

use crate::models::{Document, Record, RunEnvelope};
use crate::utils::RunClock;

/// Which optional annotations a run applies on top of the base records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotations {
    pub envelope: bool,
    pub processing_time: bool,
}

/// Stamp every record with the seconds spent on the batch so far.
pub fn annotate_processing_time(records: &mut [Record], seconds: f64) {
    for r in records.iter_mut() {
        r.processing_time = Some(seconds);
    }
}

/// Build the output document from the parsed records.
pub fn build_document(mut records: Vec<Record>, clock: &RunClock, opts: Annotations) -> Document {
    if opts.processing_time {
        annotate_processing_time(&mut records, clock.elapsed().as_secs_f64());
    }

    if opts.envelope {
        Document::Envelope(RunEnvelope {
            time_stamp: clock.time_stamp(),
            data: records,
        })
    } else {
        Document::Records(records)
    }
}
