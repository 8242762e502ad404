use std::collections::BTreeMap;
use std::fmt;

/// Accumulated time for one identifier. `minutes` stays in `0..60`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DwellTime {
    pub hours: i64,
    pub minutes: i64,
}

impl DwellTime {
    pub fn from_minutes(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    /// Add whole minutes, rolling overflow into hours.
    pub fn add_minutes(&mut self, minutes: i64) {
        *self = Self::from_minutes(self.total_minutes() + minutes.max(0));
    }
}

impl fmt::Display for DwellTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours, {} minutes", self.hours, self.minutes)
    }
}

/// Identifier → accumulated dwell time, ordered by identifier.
pub type DwellReport = BTreeMap<String, DwellTime>;
