//! Calendar date arithmetic for the day, week and month grids.
//!
//! Everything here works on `NaiveDate` in the local calendar; time of day
//! never enters the comparisons.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::ui::ViewType;

/// Which way a navigation step goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn sign(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// The seven days of the Sunday-first week containing `anchor`.
pub fn week_dates(anchor: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(anchor);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// All cells needed to draw `anchor`'s month padded out to whole weeks.
///
/// The first cell is the Sunday on/before the 1st and the last is the
/// Saturday on/after the final day, so the length is 35 or 42 (28 for a
/// February that starts on Sunday in a non-leap year).
pub fn month_grid_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(anchor);
    let last = last_of_month(anchor);

    let start = week_start(first);
    let end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);

    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Fixed six-week (42 cell) grid used by the sidebar mini months.
///
/// Returns an empty grid for an out-of-range month.
pub fn mini_month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    week_start(first).iter_days().take(42).collect()
}

/// True when `date` is the calendar day `today`.
pub fn is_today_on(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// [`is_today_on`] against the local clock.
pub fn is_today(date: NaiveDate) -> bool {
    is_today_on(date, today())
}

/// Same calendar month and year as `anchor`.
pub fn is_same_month(date: NaiveDate, anchor: NaiveDate) -> bool {
    date.year() == anchor.year() && date.month() == anchor.month()
}

/// Step one period in `direction` for the active view.
///
/// Day and week views move by 1 and 7 days; the month view moves by one
/// calendar month, keeping the day of month where the target month allows.
pub fn add_period(date: NaiveDate, view: ViewType, direction: Direction) -> NaiveDate {
    let sign = direction.sign();
    match view {
        ViewType::Day => date + Duration::days(sign as i64),
        ViewType::Week => date + Duration::days(7 * sign as i64),
        ViewType::Month => shift_month_preserving_day(date, sign),
    }
}

/// Move by whole months, clamping the day (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    clamp_day(new_year, new_month, current.day()).unwrap_or(current)
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> Option<NaiveDate> {
    let day = desired_day.min(last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Number of days in `month` of `year`.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let last = last_day_of_month(date.year(), date.month());
    date + Duration::days(last as i64 - date.day() as i64)
}

/// Heading for the period shown by `view` around `date`.
pub fn format_period_title(view: ViewType, date: NaiveDate) -> String {
    match view {
        ViewType::Day => date.format("%A, %B %-d, %Y").to_string(),
        ViewType::Week => {
            let week = week_dates(date);
            let (start, end) = (week[0], week[6]);
            if start.month() == end.month() {
                start.format("%B %Y").to_string()
            } else {
                format!("{} - {}", start.format("%b"), end.format("%b %Y"))
            }
        }
        ViewType::Month => date.format("%B %Y").to_string(),
    }
}
