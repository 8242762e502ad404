use crate::errors::{AppError, AppResult};
use crate::utils::RunClock;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output file name for a run: `rfid_tags_<YYYY-MM-DD>.json`.
pub fn output_file_name(clock: &RunClock) -> String {
    format!("rfid_tags_{}.json", clock.date_label())
}

pub fn output_path(dir: &Path, clock: &RunClock) -> PathBuf {
    dir.join(output_file_name(clock))
}

/// Serialize `value` as JSON indented by four spaces.
pub fn to_pretty_json<T: Serialize>(value: &T) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    let fmt = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `value` to `path`, replacing any existing file.
pub fn write_json_file<T: Serialize>(value: &T, path: &Path) -> AppResult<()> {
    let json = to_pretty_json(value)?;
    let wrap = |source| AppError::Write {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    out.write_all(&json).map_err(wrap)?;
    out.flush().map_err(wrap)?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "JSON written");
    Ok(())
}
