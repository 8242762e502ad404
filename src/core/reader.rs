//! CSV reader and row transformer.

use crate::errors::{AppError, AppResult};
use crate::models::{ColumnIndex, RawRow, Record, RecordLayout};
use chrono::{NaiveDateTime, Timelike};
use std::fs;
use std::io;
use std::path::Path;

/// Pattern of the `date` + `time` columns joined by a single space.
pub const INPUT_DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of reading the input file.
///
/// `NoInput` means the file was not there at all; an existing file with a
/// header and no rows is `Rows(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    NoInput,
    Rows(Vec<Record>),
}

/// Read the whole CSV at `path` and convert each data row into a [`Record`].
///
/// The first malformed row aborts the read.
pub fn read_records(path: &Path, delimiter: u8, layout: RecordLayout) -> AppResult<ReadOutcome> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "input file not found");
            return Ok(ReadOutcome::NoInput);
        }
        Err(e) => return Err(e.into()),
    };

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let records = parse_csv(content, delimiter, layout)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "input parsed");
    Ok(ReadOutcome::Rows(records))
}

/// Parse CSV content (header row included) into records, in input order.
pub fn parse_csv(content: &[u8], delimiter: u8, layout: RecordLayout) -> AppResult<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(content);

    let columns = ColumnIndex::from_headers(rdr.headers()?);
    let missing = columns.missing();
    if !missing.is_empty() {
        tracing::warn!(?missing, "required columns absent from header");
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = result?;
        // header is line 1
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);
        let raw = RawRow::from_record(&row, &columns, line)?;
        records.push(transform_row(&raw, layout)?);
    }

    Ok(records)
}

/// Convert one textual row into a record.
pub fn transform_row(raw: &RawRow, layout: RecordLayout) -> AppResult<Record> {
    let id: i64 = raw.id.trim().parse().map_err(|_| AppError::InvalidId {
        value: raw.id.clone(),
        line: raw.line,
    })?;

    let logged_at = parse_logged_at(&raw.date, &raw.time).ok_or_else(|| {
        AppError::InvalidDateTime {
            value: format!("{} {}", raw.date, raw.time),
            line: raw.line,
        }
    })?;

    Ok(Record::new(id, raw.rfid_number.clone(), logged_at, layout))
}

/// Parse `DD.MM.YYYY` and `HH:MM:SS` into one moment.
///
/// Second `60` is rejected: chrono stores it as a leap second, which has no
/// valid wall-clock rendering.
pub fn parse_logged_at(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), INPUT_DATE_TIME_FORMAT)
        .ok()
        .filter(|dt| dt.nanosecond() < 1_000_000_000)
}
