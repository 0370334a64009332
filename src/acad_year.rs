//! Academic year tokens and the "current academic year" calculation
//!
//! NUS academic years run from August to the following May and are written
//! as `2024-2025`. From June onwards a date counts towards the upcoming
//! academic year, so the new catalog becomes selectable as soon as the
//! upstream starts publishing it.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Default earliest academic year offered for selection
pub const DEFAULT_START_YEAR: i32 = 2021;

/// Month from which a date counts towards the upcoming academic year
const ROLLOVER_MONTH: u32 = 6;

/// Error returned when parsing an academic year token fails
#[derive(Debug, Error)]
#[error("invalid academic year '{0}': expected consecutive years like 2024-2025")]
pub struct ParseAcademicYearError(String);

/// An academic year token such as `2024-2025`.
///
/// The second year is always the first year plus one. Values built with
/// [`AcademicYear::starting`] uphold this by construction; `FromStr`
/// rejects tokens that don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AcademicYear {
    start: i32,
}

impl AcademicYear {
    /// Creates the academic year beginning in `start` (e.g. 2024 -> `2024-2025`)
    pub fn starting(start: i32) -> Self {
        Self { start }
    }

    /// Returns the calendar year this academic year begins in
    pub fn start_year(&self) -> i32 {
        self.start
    }

    /// Computes the academic year a given date falls into.
    ///
    /// Dates in June or later belong to the academic year starting that
    /// calendar year; earlier dates belong to the one started the year
    /// before. Total over any valid date.
    pub fn current(today: NaiveDate) -> Self {
        if today.month() >= ROLLOVER_MONTH {
            Self::starting(today.year())
        } else {
            Self::starting(today.year() - 1)
        }
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.start + 1)
    }
}

impl FromStr for AcademicYear {
    type Err = ParseAcademicYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAcademicYearError(s.to_string());
        let (first, second) = s.split_once('-').ok_or_else(err)?;
        let first: i32 = first.trim().parse().map_err(|_| err())?;
        let second: i32 = second.trim().parse().map_err(|_| err())?;
        if second != first + 1 {
            return Err(err());
        }
        Ok(Self::starting(first))
    }
}

/// Enumerates the selectable academic years as of a given date.
///
/// Builds every year from `start_year` through one past the current
/// academic year, sorted descending (newest first), and returns the
/// current year alongside.
///
/// # Arguments
/// * `start_year` - Calendar year the earliest option begins in
/// * `today` - The date to compute "current" from
///
/// # Returns
/// The option list and the current academic year.
pub fn academic_year_options(start_year: i32, today: NaiveDate) -> (Vec<AcademicYear>, AcademicYear) {
    let current = AcademicYear::current(today);
    let mut years: Vec<AcademicYear> = (start_year..=current.start_year() + 1)
        .map(AcademicYear::starting)
        .collect();
    years.reverse();
    (years, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_display_format() {
        assert_eq!(AcademicYear::starting(2024).to_string(), "2024-2025");
        assert_eq!(AcademicYear::starting(1999).to_string(), "1999-2000");
    }

    #[test]
    fn test_current_after_rollover_month() {
        assert_eq!(
            AcademicYear::current(date(2024, 7, 15)),
            AcademicYear::starting(2024)
        );
        assert_eq!(
            AcademicYear::current(date(2024, 12, 31)),
            AcademicYear::starting(2024)
        );
    }

    #[test]
    fn test_current_before_rollover_month() {
        assert_eq!(
            AcademicYear::current(date(2024, 3, 1)),
            AcademicYear::starting(2023)
        );
        assert_eq!(
            AcademicYear::current(date(2024, 1, 1)),
            AcademicYear::starting(2023)
        );
    }

    #[test]
    fn test_current_at_rollover_boundary() {
        // June 1 already counts towards the new academic year
        assert_eq!(
            AcademicYear::current(date(2024, 6, 1)),
            AcademicYear::starting(2024)
        );
        // May 31 still belongs to the previous one
        assert_eq!(
            AcademicYear::current(date(2024, 5, 31)),
            AcademicYear::starting(2023)
        );
    }

    #[test]
    fn test_options_span_and_order() {
        let (years, current) = academic_year_options(2021, date(2024, 7, 1));

        let expected: Vec<AcademicYear> =
            [2025, 2024, 2023, 2022, 2021].map(AcademicYear::starting).to_vec();
        assert_eq!(years, expected, "Options should run newest to oldest");
        assert_eq!(current, AcademicYear::starting(2024));
    }

    #[test]
    fn test_options_include_one_year_past_current() {
        let (years, current) = academic_year_options(2021, date(2024, 3, 1));

        assert_eq!(current, AcademicYear::starting(2023));
        assert_eq!(years.first(), Some(&AcademicYear::starting(2024)));
        assert_eq!(years.last(), Some(&AcademicYear::starting(2021)));
    }

    #[test]
    fn test_parse_valid_token() {
        let year: AcademicYear = "2024-2025".parse().unwrap();
        assert_eq!(year, AcademicYear::starting(2024));
    }

    #[test]
    fn test_parse_rejects_non_consecutive_years() {
        assert!("2024-2026".parse::<AcademicYear>().is_err());
        assert!("2024-2024".parse::<AcademicYear>().is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        assert!("2024".parse::<AcademicYear>().is_err());
        assert!("not a year".parse::<AcademicYear>().is_err());
        assert!("".parse::<AcademicYear>().is_err());
    }

    #[test]
    fn test_parse_display_roundtrip() {
        let year = AcademicYear::starting(2022);
        let parsed: AcademicYear = year.to_string().parse().unwrap();
        assert_eq!(parsed, year);
    }

    #[test]
    fn test_ordering_by_start_year() {
        assert!(AcademicYear::starting(2022) < AcademicYear::starting(2023));
    }
}
