//! Calendar classification integration tests.
//!
//! These walk whole years date by date and check the weekend/holiday
//! arithmetic the report generator depends on.

use cal_core::Year;
use cal_time::date::{days_in_month, days_in_year};
use cal_time::{Calendar, Date, HolidaySet};

const HOLIDAYS: &[(u8, u8)] = &[(1, 1), (1, 26), (8, 15), (10, 2), (12, 25)];

fn date(y: Year, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Every date of `year`, in calendar order.
fn year_dates(year: Year) -> Vec<Date> {
    let mut dates = Vec::with_capacity(days_in_year(year) as usize);
    for month in 1..=12 {
        for day in 1..=days_in_month(year, month) {
            dates.push(date(year, month, day));
        }
    }
    dates
}

#[test]
fn year_walk_matches_year_length() {
    assert_eq!(year_dates(2026).len(), 365);
    assert_eq!(year_dates(2028).len(), 366);
}

#[test]
fn weekend_counts() {
    // 2026 starts on a Thursday: 52 full weeks plus one extra Thursday.
    let weekends = year_dates(2026)
        .iter()
        .filter(|d| d.weekday().is_weekend())
        .count();
    assert_eq!(weekends, 104);

    // 2028 is a leap year starting on a Saturday: both extra days are
    // weekend days.
    let weekends = year_dates(2028)
        .iter()
        .filter(|d| d.weekday().is_weekend())
        .count();
    assert_eq!(weekends, 106);
}

#[test]
fn every_date_is_exactly_work_or_free() {
    let cal = HolidaySet::resolve(2026, HOLIDAYS).unwrap();
    for d in year_dates(2026) {
        assert_ne!(
            cal.is_work_day(d),
            cal.is_free_day(d),
            "{d} must be exactly one of work/free"
        );
    }
}

#[test]
fn free_day_totals_match_the_effective_holiday_rule() {
    let cal = HolidaySet::resolve(2026, HOLIDAYS).unwrap();
    let free_days = year_dates(2026)
        .iter()
        .filter(|&&d| cal.is_free_day(d))
        .count() as u32;

    // Counting free days date by date must agree with
    // weekends + holidays-not-on-weekends.
    assert_eq!(free_days, 104 + cal.effective_holiday_count());
    assert_eq!(free_days, 108);
}

#[test]
fn holidays_resolve_against_the_requested_year() {
    let cal_2027 = HolidaySet::resolve(2027, HOLIDAYS).unwrap();
    assert!(cal_2027.is_holiday(date(2027, 1, 26)));
    assert!(!cal_2027.is_holiday(date(2026, 1, 26)));
    assert_eq!(cal_2027.year(), 2027);
    assert!(cal_2027.dates().all(|d| d.year() == 2027));
}

#[test]
fn empty_holiday_set_leaves_only_weekends_free() {
    let cal = HolidaySet::resolve(2026, &[]).unwrap();
    let free_days = year_dates(2026)
        .iter()
        .filter(|&&d| cal.is_free_day(d))
        .count();
    assert_eq!(free_days, 104);
    assert_eq!(cal.effective_holiday_count(), 0);
}
