use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How the logged moment is rendered in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordLayout {
    /// `date_time: "YYYY-MM-DD HH:MM:SS"`
    #[default]
    Combined,
    /// `date: "YYYY-MM-DD"`, `time: "HH:MM:SS"`
    Split,
}

/// Rendered form of the logged moment, flattened into the record object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordMoment {
    Combined { date_time: String },
    Split { date: String, time: String },
}

impl RecordMoment {
    pub fn render(at: &NaiveDateTime, layout: RecordLayout) -> Self {
        match layout {
            RecordLayout::Combined => RecordMoment::Combined {
                date_time: at.format(DATE_TIME_FORMAT).to_string(),
            },
            RecordLayout::Split => RecordMoment::Split {
                date: at.format(DATE_FORMAT).to_string(),
                time: at.format(TIME_FORMAT).to_string(),
            },
        }
    }
}

/// One transformed RFID log entry, ready for JSON output.
///
/// Field order here is the key order in the emitted JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: i64,
    pub rfid_number: String,
    #[serde(flatten)]
    pub moment: RecordMoment,
    /// Seconds spent on the whole batch; the same value on every record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,

    #[serde(skip)]
    pub logged_at: NaiveDateTime,
}

impl Record {
    pub fn new(id: i64, rfid_number: String, logged_at: NaiveDateTime, layout: RecordLayout) -> Self {
        Self {
            id,
            rfid_number,
            moment: RecordMoment::render(&logged_at, layout),
            processing_time: None,
            logged_at,
        }
    }
}
