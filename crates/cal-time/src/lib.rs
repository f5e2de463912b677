//! # cal-time
//!
//! Date, weekday, and calendar-classification types for calgen.
//!
//! Everything in this crate is pure: dates are validated on
//! construction, classification never touches the filesystem.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and the fixed holiday set.
pub mod calendar;

/// `Date` type and month/year arithmetic.
pub mod date;

/// `Weekday`, the day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, HolidaySet};
pub use date::Date;
pub use weekday::Weekday;
