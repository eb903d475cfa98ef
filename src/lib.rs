//! Converts counts of calendar units (hours, days, weeks, months, years)
//! into minutes, for APIs that take durations in minutes, such as cache
//! expiration settings.
//!
//! Hours, days and weeks are fixed ratios. Months and years depend on the
//! calendar, so they are computed from today's date with real date
//! arithmetic.
//!
//! ```
//! use minutes_rs::{hours, resolve_alias, weeks};
//!
//! assert_eq!(hours(6), 360.0);
//! assert_eq!(weeks("2"), 20_160.0);
//! assert_eq!(resolve_alias("day").unwrap(), 1_440.0);
//!
//! // counts that are not numeric quietly fall back to one
//! assert_eq!(hours("whenever"), 60.0);
//! ```

pub mod converter;
pub mod error;

pub use converter::alias::resolve_alias;
pub use converter::common::{days, hours, weeks};
pub use converter::count::UnitCount;
pub use converter::using_chrono::{months, years};
pub use error::{Error, Result};
