//! Validated dashboard query date.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// A calendar date given as `YYYY-MM-DD`.
///
/// Month and day may be written with one or two digits; the parsed value is
/// always zero-padded. `Display` renders the midnight timestamp
/// (`2015-12-01 00:00:00`), [`QueryDate::as_query_str`] the bare date used in
/// dashboard URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QueryDate(NaiveDate);

impl QueryDate {
    pub fn parse(input: &str) -> DomainResult<Self> {
        let invalid = || DomainError::InvalidDate(input.to_string());

        let parts: Vec<&str> = input.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid());
        };
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || !all_digits(year) {
            return Err(invalid());
        }
        if month.len() > 2 || !all_digits(month) || day.len() > 2 || !all_digits(day) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// `YYYY-MM-DD`, as used in the `date=` query parameter.
    pub fn as_query_str(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl FromStr for QueryDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for QueryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 00:00:00", self.0.format("%Y-%m-%d"))
    }
}
