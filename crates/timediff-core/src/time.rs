//! Wall-clock time of day without a date component.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Errors from parsing an `HH:MM` endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The input had no `:` between hour and minute.
    #[error("missing ':' in time endpoint: {input}")]
    MissingSeparator { input: String },

    /// The hour or minute was not an integer.
    #[error("invalid {field} in time endpoint: {input}")]
    InvalidNumber { field: &'static str, input: String },
}

/// An hour/minute pair.
///
/// Values are not range-checked: `25:99` parses and takes part in
/// minute arithmetic like any other endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeEndpoint {
    pub hour: i32,
    pub minute: i32,
}

impl TimeEndpoint {
    pub const fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }

    /// Minutes elapsed since midnight.
    pub fn minute_of_day(self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Signed same-day difference `end - self` in minutes.
    ///
    /// An `end` earlier than `self` yields a negative value; there is no
    /// wraparound past midnight.
    pub fn minutes_until(self, end: Self) -> i64 {
        end.minute_of_day() - self.minute_of_day()
    }
}

impl fmt::Display for TimeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeEndpoint {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((hour, minute)) = trimmed.split_once(':') else {
            return Err(TimeParseError::MissingSeparator {
                input: s.to_string(),
            });
        };

        let hour = hour.parse().map_err(|_| TimeParseError::InvalidNumber {
            field: "hour",
            input: s.to_string(),
        })?;
        let minute = minute.parse().map_err(|_| TimeParseError::InvalidNumber {
            field: "minute",
            input: s.to_string(),
        })?;

        Ok(Self { hour, minute })
    }
}
