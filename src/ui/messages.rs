//! Operator-facing console lines: one colored icon plus the message.
//! Diagnostics belong to `tracing`, not here.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        format!("{}{}{} {}{}", self.color(), BOLD, self.icon(), RESET, msg)
    }
}

/// "No data" and other neutral outcomes.
pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Warning.line(msg));
}

/// Fatal errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Tone::Error.line(msg));
}

/// Title line before a multi-line report (dwell summary).
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {}{}", Tone::Info.color(), BOLD, msg, RESET);
}
