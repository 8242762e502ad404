use super::record::Record;
use serde::Serialize;

/// Batch wrapper: one timestamp for the whole run plus its records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunEnvelope {
    pub time_stamp: String,
    pub data: Vec<Record>,
}

/// What ends up in the output file: either a bare array or an envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Records(Vec<Record>),
    Envelope(RunEnvelope),
}

impl Document {
    pub fn records(&self) -> &[Record] {
        match self {
            Document::Records(records) => records,
            Document::Envelope(env) => &env.data,
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
