//! Statistics report computation and writing.
//!
//! A report summarizes one generated calendar: free days are weekends
//! plus the holidays that do not already fall on a weekend, so no date
//! is counted twice. Work reports derive working days/hours from the
//! year length; time-off reports derive free hours.

use std::fs;
use std::path::{Path, PathBuf};

use cal_core::{Error, Result, Year};
use cal_time::date::days_in_year;
use cal_time::HolidaySet;

/// File name the report is written under, inside the run's base
/// directory.
pub const REPORT_FILE_NAME: &str = "report.txt";

/// Hours attributed to one working day.
const HOURS_PER_WORKING_DAY: u32 = 9;

/// Hours attributed to one free day.
const HOURS_PER_FREE_DAY: u32 = 12;

/// Which metrics a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Working-day and working-hour totals.
    Work,
    /// Free-day and free-hour totals.
    TimeOff,
}

impl ReportKind {
    fn title_word(&self) -> &'static str {
        match self {
            ReportKind::Work => "work",
            ReportKind::TimeOff => "timeoff",
        }
    }
}

/// Derived statistics for one generated calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    year: Year,
    kind: ReportKind,
    free_days: u32,
    working_days: u32,
}

impl Report {
    /// Compute the report for one calendar view.
    ///
    /// `weekend_days` is the builder's weekend tally for the year;
    /// holidays already on a weekend are not counted again.
    pub fn compute(kind: ReportKind, weekend_days: u32, holidays: &HolidaySet) -> Self {
        let free_days = weekend_days + holidays.effective_holiday_count();
        let working_days = u32::from(days_in_year(holidays.year())) - free_days;
        Report {
            year: holidays.year(),
            kind,
            free_days,
            working_days,
        }
    }

    /// Number of free days (weekends plus effective holidays).
    pub fn free_days(&self) -> u32 {
        self.free_days
    }

    /// Number of working days.
    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    /// Working hours, at 9 hours per working day.
    pub fn working_hours(&self) -> u32 {
        self.working_days * HOURS_PER_WORKING_DAY
    }

    /// Free hours, at 12 hours per free day.
    pub fn free_hours(&self) -> u32 {
        self.free_days * HOURS_PER_FREE_DAY
    }

    /// Render the fixed-format report text.
    pub fn render(&self) -> String {
        let mut out = format!("Year {} {} report\n\nStats:\n", self.year, self.kind.title_word());
        match self.kind {
            ReportKind::Work => {
                out.push_str(&format!(
                    "- Number of working days: {}\n- Number of working hours: {}\n",
                    self.working_days,
                    self.working_hours()
                ));
            }
            ReportKind::TimeOff => {
                out.push_str(&format!(
                    "- Number of free days: {}\n- Number of free hours: {}\n",
                    self.free_days,
                    self.free_hours()
                ));
            }
        }
        out
    }

    /// Write the report to [`REPORT_FILE_NAME`] under `base_dir`,
    /// overwriting any previous report. Returns the path written.
    pub fn write(&self, base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(REPORT_FILE_NAME);
        fs::write(&path, self.render()).map_err(|source| Error::WriteReport {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
