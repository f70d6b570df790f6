//! Timestamp parsing and the display styles used by the `datetime` template filter.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("unknown datetime style '{0}' (expected 'full' or 'medium')")]
    UnknownStyle(String),

    #[error("'{0}' is not a recognised timestamp")]
    InvalidTimestamp(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    #[default]
    Medium,
}

impl DateStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

impl FromStr for DateStyle {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "medium" => Ok(Self::Medium),
            other => Err(DateFormatError::UnknownStyle(other.to_string())),
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

/// Parses RFC 3339 (converted to UTC), ISO-like naive timestamps with a
/// space or `T` separator, or a bare date (midnight).
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn format_datetime(value: &str, style: DateStyle) -> Result<String, DateFormatError> {
    let timestamp = parse_timestamp(value)
        .ok_or_else(|| DateFormatError::InvalidTimestamp(value.to_string()))?;
    Ok(timestamp.format(style.pattern()).to_string())
}
