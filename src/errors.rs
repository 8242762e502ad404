//! Unified application error type.
//! Every module (reader, writer, archiver, config, cli) returns AppError so
//! that a failed run surfaces through a single path in `main`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot write output file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // CSV / row parsing
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' (line {line})")]
    MissingColumn { column: String, line: u64 },

    #[error("Invalid id '{value}' (line {line})")]
    InvalidId { value: String, line: u64 },

    #[error("Invalid date/time '{value}' (line {line}), expected DD.MM.YYYY HH:MM:SS")]
    InvalidDateTime { value: String, line: u64 },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
