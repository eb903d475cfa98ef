use super::count::UnitCount;

/// Number of minutes in the given count of hours.
pub fn hours(count: impl Into<UnitCount>) -> f64 {
    60.0 * count.into().valid_number()
}

/// Number of minutes in the given count of days.
pub fn days(count: impl Into<UnitCount>) -> f64 {
    hours(24) * count.into().valid_number()
}

/// Number of minutes in the given count of weeks.
pub fn weeks(count: impl Into<UnitCount>) -> f64 {
    days(7) * count.into().valid_number()
}
