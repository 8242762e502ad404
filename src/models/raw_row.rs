use crate::errors::{AppError, AppResult};
use csv::StringRecord;

/// Required header columns of an RFID access-log file.
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "rfid_number", "date", "time"];

/// Column positions resolved once from the header row.
///
/// Column order in the file is free and extra columns are ignored. A
/// column that is missing from the header is only reported once a data
/// row actually needs it, so a header-only file is still a valid (empty)
/// input.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    id: Option<usize>,
    rfid_number: Option<usize>,
    date: Option<usize>,
    time: Option<usize>,
}

impl ColumnIndex {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            id: position("id"),
            rfid_number: position("rfid_number"),
            date: position("date"),
            time: position("time"),
        }
    }

    /// Names of required columns absent from the header.
    pub fn missing(&self) -> Vec<&'static str> {
        let found = [self.id, self.rfid_number, self.date, self.time];
        REQUIRED_COLUMNS
            .iter()
            .zip(found)
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// One data row as read from the CSV, still textual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: u64,
    pub id: String,
    pub rfid_number: String,
    pub date: String,
    pub time: String,
}

impl RawRow {
    pub fn from_record(record: &StringRecord, columns: &ColumnIndex, line: u64) -> AppResult<Self> {
        let get = |idx: Option<usize>, name: &str| -> AppResult<String> {
            idx.and_then(|i| record.get(i))
                .map(str::to_string)
                .ok_or_else(|| AppError::MissingColumn {
                    column: name.to_string(),
                    line,
                })
        };

        Ok(Self {
            line,
            id: get(columns.id, "id")?,
            rfid_number: get(columns.rfid_number, "rfid_number")?,
            date: get(columns.date, "date")?,
            time: get(columns.time, "time")?,
        })
    }
}
