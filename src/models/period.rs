//! Validated `(year, month)` accounting period of a timesheet.

use crate::core::calendar;
use crate::errors::{AppError, AppResult};
use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A calendar month. The month is always in `1..=12`, so the day count of a
/// `Period` can be computed without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidPeriod(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// Period containing today's date (local time).
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        let (y, m) = s
            .split_once('-')
            .ok_or_else(|| AppError::InvalidPeriod(s.to_string()))?;

        if y.len() != 4 || m.is_empty() || m.len() > 2 {
            return Err(AppError::InvalidPeriod(s.to_string()));
        }

        let year: i32 = y
            .parse()
            .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
        let month: u32 = m
            .parse()
            .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;

        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days of this month (28..=31).
    pub fn day_count(&self) -> u32 {
        calendar::month_last_day(self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

// Deserialization goes through `Period::new` so that a sheet file with
// month 13 is rejected on load instead of producing an invalid value.
impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Period::new(raw.year, raw.month).map_err(serde::de::Error::custom)
    }
}
