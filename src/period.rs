// SPDX-License-Identifier: MIT

//! Period resolution for stats queries.
//!
//! A period is either a month (`YYYY-MM`) or a year (`YYYY`). Rather than
//! branching on the token shape at each call site, the parsed period carries
//! its own date range and sub-period key function: week-of-month when the
//! period is a month, month-of-year when it is a year.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::AppError;

/// A validated aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Month { year: i32, month: u32 },
    Year { year: i32 },
}

/// Pivot key for breaking a period into sub-periods.
///
/// Serializes as a bare number (month view) or string (year view), matching
/// the shape the charting front end consumes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum SubperiodKey {
    /// `iso_year * 100 + iso_week`, so weeks sort correctly across year
    /// boundaries.
    IsoWeek(i32),
    /// Two-digit month number, "01" through "12".
    MonthOfYear(String),
}

impl PeriodKind {
    /// Resolve a period from the `month` / `year` query parameters.
    ///
    /// Exactly one is expected; when both are supplied, `month` wins.
    /// Missing or malformed tokens are a validation error, never coerced.
    pub fn from_params(month: Option<&str>, year: Option<&str>) -> Result<Self, AppError> {
        match (month, year) {
            (Some(m), _) => {
                let (year, month) = parse_month_token(m)?;
                Ok(PeriodKind::Month { year, month })
            }
            (None, Some(y)) => {
                let year = parse_year_token(y)?;
                Ok(PeriodKind::Year { year })
            }
            (None, None) => Err(AppError::BadRequest(
                "month or year query param required (YYYY-MM or YYYY)".to_string(),
            )),
        }
    }

    /// Half-open calendar range `[start, end)` covered by this period.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        match *self {
            PeriodKind::Month { year, month } => {
                let start = first_of_month(year, month);
                let end = if month == 12 {
                    first_of_month(year + 1, 1)
                } else {
                    first_of_month(year, month + 1)
                };
                (start, end)
            }
            PeriodKind::Year { year } => (first_of_month(year, 1), first_of_month(year + 1, 1)),
        }
    }

    /// Sub-period pivot key for a date inside this period.
    pub fn subperiod_key(&self, date: NaiveDate) -> SubperiodKey {
        match self {
            PeriodKind::Month { .. } => {
                let iso = date.iso_week();
                SubperiodKey::IsoWeek(iso.year() * 100 + iso.week() as i32)
            }
            PeriodKind::Year { .. } => SubperiodKey::MonthOfYear(format!("{:02}", date.month())),
        }
    }
}

/// Parse a strict `YYYY-MM` token.
pub fn parse_month_token(token: &str) -> Result<(i32, u32), AppError> {
    let invalid =
        || AppError::BadRequest(format!("invalid month param '{}': expected YYYY-MM", token));

    let (year_part, month_part) = token.split_once('-').ok_or_else(invalid)?;
    if year_part.len() != 4 || month_part.len() != 2 || !all_digits(year_part) || !all_digits(month_part)
    {
        return Err(invalid());
    }

    let year: i32 = year_part.parse().map_err(|_| invalid())?;
    let month: u32 = month_part.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}

/// Parse a strict `YYYY` token.
pub fn parse_year_token(token: &str) -> Result<i32, AppError> {
    let invalid = || AppError::BadRequest(format!("invalid year param '{}': expected YYYY", token));

    if token.len() != 4 || !all_digits(token) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // month is validated to 1..=12 before we get here
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid first-of-month date")
}
