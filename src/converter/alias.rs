use super::common::{days, hours, weeks};
use super::using_chrono::{months, years};
use crate::error::{Error, Result};

/// Resolves a singular unit name (`"hour"`, `"day"`, `"week"`, `"month"`,
/// `"year"`) to the matching plural operation called with a count of one.
///
/// Matching is ASCII case-insensitive. Anything outside that set, plural
/// forms included, fails with [`Error::MethodNotFound`] naming the attempted
/// call; the error is propagated as-is, never retried or logged.
pub fn resolve_alias(name: &str) -> Result<f64> {
    match name.to_ascii_lowercase().as_str() {
        "hour" => Ok(hours(1)),
        "day" => Ok(days(1)),
        "week" => Ok(weeks(1)),
        "month" => Ok(months(1)),
        "year" => Ok(years(1)),
        _ => Err(Error::MethodNotFound(name.to_string())),
    }
}
