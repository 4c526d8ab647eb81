pub mod clock;
pub mod config;

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::SigmaError;

/// pt-BR short date, e.g. 27/04/2025.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, SigmaError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| SigmaError::InvalidDate(raw.to_string()))
}

/// Accepts `YYYY-MM-DDTHH:MM`, with optional seconds, or a space instead of `T`.
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, SigmaError> {
    let raw_trimmed = raw.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw_trimmed, fmt).ok())
        .ok_or_else(|| SigmaError::InvalidDateTime(raw.to_string()))
}
