//! `Calendar` trait and the fixed holiday set.
//!
//! A calendar classifies dates into work days and free days. Weekends
//! come from the weekday alone; holidays come from the implementation.

use std::collections::BTreeSet;

use cal_core::{ensure, errors::Result, Year};

use crate::date::Date;

/// Classifies dates into work days and free days.
pub trait Calendar: std::fmt::Debug {
    /// Return `true` if `date` is a holiday in this calendar.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a weekend (Saturday/Sunday).
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is a free day (weekend or holiday).
    fn is_free_day(&self, date: Date) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }

    /// Return `true` if `date` is a work day.
    fn is_work_day(&self, date: Date) -> bool {
        !self.is_free_day(date)
    }
}

/// A set of fixed-date holidays resolved against one target year.
///
/// The (month, day) pairs are resolved into full dates when the set is
/// built, so the resulting holidays always refer to the year the run
/// was invoked with, never a stale default.
#[derive(Debug, Clone)]
pub struct HolidaySet {
    year: Year,
    dates: BTreeSet<Date>,
}

impl HolidaySet {
    /// Resolve `month_days` against `year`.
    ///
    /// Each pair is validated against the actual month lengths of
    /// `year`; duplicates collapse. An empty list is valid.
    pub fn resolve(year: Year, month_days: &[(u8, u8)]) -> Result<Self> {
        ensure!(year >= 1, "year {year} out of range (must be >= 1)");
        let mut dates = BTreeSet::new();
        for &(month, day) in month_days {
            dates.insert(Date::from_ymd(year, month, day)?);
        }
        Ok(HolidaySet { year, dates })
    }

    /// The year this set was resolved against.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Iterate the holiday dates in calendar order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// Count holidays that do not themselves fall on a weekend.
    ///
    /// Weekend holidays are already covered by the weekend tally, so
    /// only these contribute to free-day totals.
    pub fn effective_holiday_count(&self) -> u32 {
        self.dates.iter().filter(|d| !d.weekday().is_weekend()).count() as u32
    }
}

impl Calendar for HolidaySet {
    fn is_holiday(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLIDAYS: &[(u8, u8)] = &[(1, 1), (1, 26), (8, 15), (10, 2), (12, 25)];

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holiday_lookup_is_exact() {
        let cal = HolidaySet::resolve(2026, HOLIDAYS).unwrap();
        assert!(cal.is_holiday(date(2026, 1, 26)));
        assert!(!cal.is_holiday(date(2026, 1, 27)));
        // Same month/day in another year is not a holiday of this set.
        assert!(!cal.is_holiday(date(2027, 1, 26)));
    }

    #[test]
    fn free_day_is_weekend_or_holiday() {
        let cal = HolidaySet::resolve(2026, HOLIDAYS).unwrap();
        // Sat Jan 3 2026: weekend, not holiday.
        assert!(cal.is_free_day(date(2026, 1, 3)));
        // Mon Jan 26 2026: holiday, not weekend.
        assert!(!cal.is_weekend(date(2026, 1, 26)));
        assert!(cal.is_free_day(date(2026, 1, 26)));
        // Sat Aug 15 2026: both at once.
        assert!(cal.is_weekend(date(2026, 8, 15)));
        assert!(cal.is_free_day(date(2026, 8, 15)));
        // Tue Jul 14 2026: plain work day.
        assert!(cal.is_work_day(date(2026, 7, 14)));
        assert!(!cal.is_free_day(date(2026, 7, 14)));
    }

    #[test]
    fn effective_count_skips_weekend_holidays() {
        // Aug 15 2026 is a Saturday, so only four holidays count.
        let cal = HolidaySet::resolve(2026, HOLIDAYS).unwrap();
        assert_eq!(cal.effective_holiday_count(), 4);

        // In 2027, Jan 1 lands on a Friday but Oct 2 and Dec 25 fall on
        // weekends: Fri, Tue, Sun, Sat, Sat.
        let cal = HolidaySet::resolve(2027, HOLIDAYS).unwrap();
        assert_eq!(cal.effective_holiday_count(), 2);
    }

    #[test]
    fn resolve_validates_against_the_target_year() {
        assert!(HolidaySet::resolve(2026, &[(2, 29)]).is_err());
        assert!(HolidaySet::resolve(2028, &[(2, 29)]).is_ok());
        assert!(HolidaySet::resolve(2026, &[(13, 1)]).is_err());
        assert!(HolidaySet::resolve(0, HOLIDAYS).is_err());
    }

    #[test]
    fn duplicates_collapse() {
        let cal = HolidaySet::resolve(2026, &[(1, 26), (1, 26)]).unwrap();
        assert_eq!(cal.dates().count(), 1);
    }
}
