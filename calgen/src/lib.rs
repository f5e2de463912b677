//! # calgen
//!
//! Generates a year's worth of calendar folder scaffolding: one folder
//! per month, one empty marker file per qualifying day, split into
//! work-day and time-off views, plus a plain-text statistics report per
//! view.
//!
//! The library half hosts the building blocks (CLI parsing, the folder
//! builder, the report generator); the binary wires them together.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Command-line argument handling.
pub mod cli;

/// Calendar folder and marker file generation.
pub mod generate;

/// Statistics report computation and writing.
pub mod report;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use generate::{generate_calendar, CalendarKind, CalendarRun};
pub use report::{Report, ReportKind};

/// Fixed-date holidays observed by the default calendar, as
/// (month, day) pairs resolved against the target year at startup:
/// New Year's Day, Republic Day, Independence Day, Gandhi Jayanti, and
/// Christmas Day.
pub const DEFAULT_HOLIDAYS: &[(u8, u8)] = &[(1, 1), (1, 26), (8, 15), (10, 2), (12, 25)];
