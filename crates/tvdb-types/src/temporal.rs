use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Separator between the day, month and year components of a date string.
///
/// Season registration and the most-awaited query use different separators,
/// and each operation accepts only its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateDelimiter {
    /// `dd:mm:yyyy`
    Colon,
    /// `dd::mm::yyyy`
    DoubleColon,
}

impl DateDelimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateDelimiter::Colon => ":",
            DateDelimiter::DoubleColon => "::",
        }
    }
}

/// Calendar date stored as the comparable integer `yyyymmdd`.
///
/// The integer is the zero-padded concatenation of year, month and day, so
/// numeric order equals chronological order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseDate(u32);

impl ReleaseDate {
    /// Build a date from its components, rejecting impossible calendar dates.
    pub fn from_ymd(year: u32, month: u32, day: u32) -> Result<Self, TypeError> {
        let naive = i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
            .ok_or_else(|| TypeError::InvalidDate {
                input: format!("{day:02}-{month:02}-{year:04}"),
                reason: "not a calendar date".into(),
            })?;
        Ok(Self::from_naive(naive))
    }

    /// Parse `dd<sep>mm<sep>yyyy`.
    ///
    /// Day and month take one or two digits, the year exactly four.
    pub fn parse(input: &str, delimiter: DateDelimiter) -> Result<Self, TypeError> {
        let sep = delimiter.as_str();
        let invalid = |reason: String| TypeError::InvalidDate {
            input: input.to_string(),
            reason,
        };

        let parts: Vec<&str> = input.trim().split(sep).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid(format!("expected dd{sep}mm{sep}yyyy")));
        };

        let day = numeric_component(day, 1..=2).ok_or_else(|| invalid("bad day".into()))?;
        let month = numeric_component(month, 1..=2).ok_or_else(|| invalid("bad month".into()))?;
        let year = numeric_component(year, 4..=4).ok_or_else(|| invalid("bad year".into()))?;

        Self::from_ymd(year, month, day).map_err(|_| invalid("not a calendar date".into()))
    }

    /// Parse the `dd:mm:yyyy` form used when registering seasons.
    pub fn parse_season(input: &str) -> Result<Self, TypeError> {
        Self::parse(input, DateDelimiter::Colon)
    }

    /// Parse the `dd::mm::yyyy` form used by the most-awaited query.
    pub fn parse_query(input: &str) -> Result<Self, TypeError> {
        Self::parse(input, DateDelimiter::DoubleColon)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        // Negative years clamp to 0.
        let year = date.year().max(0) as u32;
        Self(year * 10_000 + date.month() * 100 + date.day())
    }

    /// The local calendar date of the host.
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    pub fn as_yyyymmdd(&self) -> u32 {
        self.0
    }

    pub fn year(&self) -> u32 {
        self.0 / 10_000
    }

    pub fn month(&self) -> u32 {
        (self.0 / 100) % 100
    }

    pub fn day(&self) -> u32 {
        self.0 % 100
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Render with the given separator, zero-padded.
    pub fn format(&self, delimiter: DateDelimiter) -> String {
        let sep = delimiter.as_str();
        format!(
            "{:02}{sep}{:02}{sep}{:04}",
            self.day(),
            self.month(),
            self.year()
        )
    }
}

fn numeric_component(raw: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&raw.len()) || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl fmt::Debug for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReleaseDate({})", self.0)
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DateDelimiter::Colon))
    }
}
