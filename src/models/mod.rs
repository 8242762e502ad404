pub mod dwell;
pub mod envelope;
pub mod raw_row;
pub mod record;

pub use dwell::{DwellReport, DwellTime};
pub use envelope::{Document, RunEnvelope};
pub use raw_row::{ColumnIndex, RawRow};
pub use record::{Record, RecordLayout, RecordMoment};
