//! Advancing a schedule's next due date.
//!
//! Months are added with day overflow rolling into the following month:
//! the date moves to the first of the target month and then forward by
//! the original day-of-month minus one. So 2023-01-31 plus one month is
//! 2023-03-03 and 2024-02-29 plus one year is 2025-03-01.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::types::Frequency;

/// Advances `date` by one period of `frequency`.
///
/// Returns `None` only if the result leaves the supported calendar range.
#[must_use]
pub fn checked_advance(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    let first_of_month = date.with_day(1)?;
    let target_month = first_of_month.checked_add_months(Months::new(frequency.months()))?;
    target_month.checked_add_days(Days::new(u64::from(date.day0())))
}

/// Advances `date` by one period of `frequency`.
///
/// Results past the end of the supported calendar saturate at
/// [`NaiveDate::MAX`], so the date still never decreases.
#[must_use]
pub fn advance(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    checked_advance(date, frequency).unwrap_or(NaiveDate::MAX)
}
