use crate::errors::AppResult;
use crate::utils::path::parent_dir;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to the consumed input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// File now lives at the contained path.
    Moved(PathBuf),
    /// File was no longer at its original location; nothing to do.
    AlreadyGone,
}

/// `<dir of input>/<done_dir>`
pub fn done_dir_for(input: &Path, done_dir: &str) -> PathBuf {
    parent_dir(input).join(done_dir)
}

/// Move `input` into the `done_dir` sibling directory, keeping its file name.
///
/// - `done_dir` is created when missing
/// - a file that already disappeared is a no-op, never an error
/// - rename first; when that fails (e.g. across devices) copy + remove
/// - an older file with the same name inside `done_dir` is replaced
pub fn archive_input(input: &Path, done_dir: &str) -> AppResult<ArchiveOutcome> {
    let Some(file_name) = input.file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("input path has no file name: {}", input.display()),
        )
        .into());
    };

    if !input.exists() {
        tracing::info!(path = %input.display(), "input already gone, nothing to archive");
        return Ok(ArchiveOutcome::AlreadyGone);
    }

    let dest_dir = done_dir_for(input, done_dir);
    fs::create_dir_all(&dest_dir)?;
    let dest = dest_dir.join(file_name);

    match move_or_copy(input, &dest) {
        Ok(()) => {
            tracing::debug!(from = %input.display(), to = %dest.display(), "input archived");
            Ok(ArchiveOutcome::Moved(dest))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ArchiveOutcome::AlreadyGone),
        Err(e) => Err(e.into()),
    }
}

fn move_or_copy(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, "rename failed, falling back to copy");
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
