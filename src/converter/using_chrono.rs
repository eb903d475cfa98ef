use chrono::{Months, NaiveDate, Utc};

use super::common::days;
use super::count::UnitCount;

/// Number of minutes in the given count of calendar months, starting from
/// today's date.
///
/// Month lengths vary, so the answer is whole days between today and today
/// plus `count` months, converted to minutes.
pub fn months(count: impl Into<UnitCount>) -> f64 {
    minutes_in_months(today(), whole_units(count.into().valid_number()))
}

/// Number of minutes in the given count of calendar years, starting from
/// today's date.
///
/// A year is twelve calendar months, so leap days land in the day count.
pub fn years(count: impl Into<UnitCount>) -> f64 {
    minutes_in_years(today(), whole_units(count.into().valid_number()))
}

fn minutes_in_months(start: NaiveDate, months: i64) -> f64 {
    days(days_between(start, shift_months(start, months)))
}

fn minutes_in_years(start: NaiveDate, years: i64) -> f64 {
    minutes_in_months(start, years.saturating_mul(12))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// Calendar shifts are whole-month-granular; fractional counts truncate
// toward zero.
fn whole_units(count: f64) -> i64 {
    count.trunc() as i64
}

/// Moves a date by the given number of calendar months, in either direction.
/// Month-end overflow clamps to the last day of the shorter month, and shifts
/// past the representable calendar clamp to its bounds.
fn shift_months(start: NaiveDate, months: i64) -> NaiveDate {
    let span = Months::new(u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX));

    if months < 0 {
        start.checked_sub_months(span).unwrap_or(NaiveDate::MIN)
    } else {
        start.checked_add_months(span).unwrap_or(NaiveDate::MAX)
    }
}

fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().abs()
}
