// Calendar grid properties: week rows, month grids and period navigation

mod fixtures;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use clinic_desk::models::ui::ViewType;
use clinic_desk::utils::date::{
    add_period, format_period_title, is_same_month, mini_month_dates, month_grid_dates,
    week_dates, Direction,
};
use fixtures::date;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| date(1990, 1, 1) + Duration::days(offset))
}

proptest! {
    #[test]
    fn prop_week_is_seven_consecutive_days_from_sunday(anchor in any_date()) {
        let week = week_dates(anchor);
        prop_assert_eq!(week[0].weekday(), Weekday::Sun);
        prop_assert!(week.contains(&anchor));
        for pair in week.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn prop_month_grid_covers_whole_weeks(anchor in any_date()) {
        let grid = month_grid_dates(anchor);
        let first = anchor.with_day(1).unwrap();
        let last = grid.iter().copied().filter(|d| is_same_month(*d, anchor)).max().unwrap();

        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!(grid.len() >= 28 && grid.len() <= 42);
        prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
        prop_assert_eq!(grid[grid.len() - 1].weekday(), Weekday::Sat);
        prop_assert!(grid.contains(&first));
        prop_assert_eq!(last.succ_opt().unwrap().day(), 1);
    }

    #[test]
    fn prop_mini_month_is_six_weeks(year in 1990i32..2060, month in 1u32..=12) {
        let grid = mini_month_dates(year, month);
        prop_assert_eq!(grid.len(), 42);
        prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
        prop_assert!(grid.contains(&date(year, month, 1)));
    }

    #[test]
    fn prop_day_and_week_steps_are_reversible(anchor in any_date()) {
        for view in [ViewType::Day, ViewType::Week] {
            let there = add_period(anchor, view, Direction::Next);
            prop_assert_eq!(add_period(there, view, Direction::Previous), anchor);
        }
    }
}

#[test]
fn test_week_of_reference_day() {
    let week = week_dates(date(2026, 2, 12));
    assert_eq!(week[0], date(2026, 2, 8));
    assert_eq!(week[6], date(2026, 2, 14));
}

#[test_case(date(2026, 2, 12), 28 ; "february 2026 starts on sunday")]
#[test_case(date(2026, 3, 1), 35 ; "march 2026 five weeks")]
#[test_case(date(2026, 8, 15), 42 ; "august 2026 six weeks")]
#[test_case(date(2024, 2, 29), 35 ; "leap february")]
fn test_month_grid_length(anchor: NaiveDate, expected: usize) {
    assert_eq!(month_grid_dates(anchor).len(), expected);
}

#[test_case(date(2026, 1, 31), Direction::Next, date(2026, 2, 28) ; "jan 31 clamps to feb 28")]
#[test_case(date(2024, 1, 31), Direction::Next, date(2024, 2, 29) ; "leap year clamp")]
#[test_case(date(2026, 3, 31), Direction::Previous, date(2026, 2, 28) ; "backwards clamp")]
#[test_case(date(2026, 12, 15), Direction::Next, date(2027, 1, 15) ; "year rollover")]
fn test_month_navigation(from: NaiveDate, direction: Direction, expected: NaiveDate) {
    assert_eq!(add_period(from, ViewType::Month, direction), expected);
}

#[test_case(ViewType::Day, date(2026, 2, 12), "Thursday, February 12, 2026")]
#[test_case(ViewType::Week, date(2026, 2, 12), "February 2026")]
#[test_case(ViewType::Week, date(2026, 3, 30), "Mar - Apr 2026" ; "week spanning months")]
#[test_case(ViewType::Week, date(2025, 12, 31), "Dec - Jan 2026" ; "week spanning years")]
#[test_case(ViewType::Month, date(2026, 2, 12), "February 2026")]
fn test_period_title(view: ViewType, anchor: NaiveDate, expected: &str) {
    assert_eq!(format_period_title(view, anchor), expected);
}
