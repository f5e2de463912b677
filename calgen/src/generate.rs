//! Calendar folder and marker file generation.
//!
//! A run walks every date of the target year in calendar order, creates
//! each month folder on entry, and drops one empty marker file per
//! included date. Filesystem failures are reported on the error stream
//! and skipped; a marker that already exists counts as created.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use cal_core::{Error, Result, Year};
use cal_time::date::{days_in_month, short_month_name};
use cal_time::{Calendar, Date, HolidaySet};

use crate::report::ReportKind;

/// Which dates a generated calendar includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarKind {
    /// Work days only (neither weekend nor holiday).
    Work,
    /// Weekends and holidays only.
    TimeOff,
    /// Every day of the year.
    All,
}

impl CalendarKind {
    /// Whether a date with the given free-day classification is included.
    pub fn includes(&self, is_free_day: bool) -> bool {
        match self {
            CalendarKind::Work => !is_free_day,
            CalendarKind::TimeOff => is_free_day,
            CalendarKind::All => true,
        }
    }

    /// Conventional base directory name for this kind and year.
    pub fn dir_name(&self, year: Year) -> String {
        match self {
            CalendarKind::Work => format!("work-calendar-{year}"),
            CalendarKind::TimeOff => format!("timeoff-calendar-{year}"),
            CalendarKind::All => format!("calendar-{year}"),
        }
    }

    /// Report produced for this kind. The all-days calendar carries no
    /// report.
    pub fn report_kind(&self) -> Option<ReportKind> {
        match self {
            CalendarKind::Work => Some(ReportKind::Work),
            CalendarKind::TimeOff => Some(ReportKind::TimeOff),
            CalendarKind::All => None,
        }
    }

    /// Short label used in progress messages.
    pub fn label(&self) -> &'static str {
        match self {
            CalendarKind::Work => "work",
            CalendarKind::TimeOff => "time-off",
            CalendarKind::All => "all-days",
        }
    }
}

/// The parameters of one generation pass.
#[derive(Debug, Clone)]
pub struct CalendarRun {
    /// Which dates this run includes and which report it produces.
    pub kind: CalendarKind,
    /// Directory the month folders and report are created under.
    pub base_dir: PathBuf,
}

impl CalendarRun {
    /// A run against the conventional `<kind>-calendar-<year>`
    /// directory, resolved relative to the working directory.
    pub fn for_year(kind: CalendarKind, year: Year) -> Self {
        CalendarRun {
            kind,
            base_dir: PathBuf::from(kind.dir_name(year)),
        }
    }
}

/// Folder name for one month of the target year, e.g. `Month01-Jan2026`.
pub fn month_folder_name(year: Year, month: u8) -> String {
    format!("Month{:02}-{}{}", month, short_month_name(month), year)
}

/// Marker file name for one date, e.g. `26Jan-Monday.txt`.
///
/// Unique within a month folder: no two days of a month share the
/// (day, weekday) pair.
pub fn marker_file_name(date: Date) -> String {
    format!(
        "{:02}{}-{}.txt",
        date.day_of_month(),
        short_month_name(date.month()),
        date.weekday()
    )
}

fn create_month_folder(base_dir: &Path, year: Year, month: u8) -> Result<PathBuf> {
    let folder = base_dir.join(month_folder_name(year, month));
    fs::create_dir_all(&folder).map_err(|source| Error::CreateDir {
        path: folder.clone(),
        source,
    })?;
    Ok(folder)
}

/// Create one empty marker file for `date` under `month_folder`.
///
/// Existence is re-checked after a failure: an already-present marker
/// is success, anything else is returned to the caller.
fn create_marker_file(month_folder: &Path, date: Date) -> Result<()> {
    let path = month_folder.join(marker_file_name(date));
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => Ok(()),
        Err(_) if path.exists() => Ok(()),
        Err(source) => Err(Error::CreateFile { path, source }),
    }
}

/// Generate one calendar view.
///
/// Walks every date of the holiday set's year, creating month folders
/// and marker files for the dates `run.kind` includes. Failures are
/// printed to the error stream and skipped, so a partial tree is left
/// in place rather than rolled back. Returns the number of dates that
/// fell on a weekend, which the report needs.
pub fn generate_calendar(run: &CalendarRun, holidays: &HolidaySet) -> u32 {
    let year = holidays.year();
    let mut weekend_days = 0;

    for month in 1..=12 {
        let month_folder = create_month_folder(&run.base_dir, year, month);
        if let Err(err) = &month_folder {
            eprintln!("{err}");
        }

        for day in 1..=days_in_month(year, month) {
            let date = Date::from_ymd(year, month, day)
                .expect("day ranges over the actual month length");

            if date.weekday().is_weekend() {
                weekend_days += 1;
            }

            if !run.kind.includes(holidays.is_free_day(date)) {
                continue;
            }

            // The weekend tally is independent of folder creation.
            let Ok(folder) = &month_folder else { continue };

            if let Err(err) = create_marker_file(folder, date) {
                eprintln!("{err}");
            }
        }
    }

    weekend_days
}
