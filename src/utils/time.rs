//! Run clock: the single "now" of a run, plus helpers on top of it.

use crate::models::record::{DATE_FORMAT, DATE_TIME_FORMAT};
use chrono::{Local, NaiveDateTime};
use std::time::{Duration, Instant};

/// Captured once at the start of a run and passed to every step that
/// needs the current moment (output name, envelope, dwell).
#[derive(Debug, Clone, Copy)]
pub struct RunClock {
    now: NaiveDateTime,
    started: Instant,
}

impl RunClock {
    pub fn start() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Clock pinned to a given moment; used by tests and replays.
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            now,
            started: Instant::now(),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// `YYYY-MM-DD HH:MM:SS`
    pub fn time_stamp(&self) -> String {
        self.now.format(DATE_TIME_FORMAT).to_string()
    }

    /// `YYYY-MM-DD`
    pub fn date_label(&self) -> String {
        self.now.format(DATE_FORMAT).to_string()
    }
}

/// Whole minutes from `then` to `now`; zero when `then` lies in the future.
pub fn minutes_since(then: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (now - then).num_minutes().max(0)
}
