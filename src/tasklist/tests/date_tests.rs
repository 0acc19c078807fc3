//! Tests for due date validation and comparison.

use super::date;
use crate::tasklist::domain::{DueDate, TaskListError, Timeliness, is_valid_date};
use rstest::rstest;

#[rstest]
#[case("2024-02-29")]
#[case("2000-02-29")]
#[case("2023-12-31")]
#[case("2024-04-30")]
#[case("0000-01-01")]
#[case("1970-01-01")]
fn accepts_real_calendar_days(#[case] value: &str) {
    assert!(is_valid_date(value), "{value} should be valid");
}

#[rstest]
#[case::not_leap_year("2023-02-29")]
#[case::century_not_leap("1900-02-29")]
#[case::month_thirteen("2024-13-01")]
#[case::month_zero("2024-00-10")]
#[case::april_has_thirty_days("2024-04-31")]
#[case::day_zero("2024-01-00")]
#[case::day_overflow("2024-01-32")]
#[case::short_year("24-01-01")]
#[case::short_month("2024-1-01")]
#[case::short_day("2024-01-1")]
#[case::non_numeric("abcd-01-01")]
#[case::signed_month("2024-+1-01")]
#[case::extra_field("2024-01-01-01")]
#[case::trailing_space("2024-01-01 ")]
#[case::empty("")]
fn rejects_malformed_dates(#[case] value: &str) {
    assert!(!is_valid_date(value), "{value:?} should be invalid");
}

#[rstest]
fn parse_reports_the_rejected_value() {
    assert_eq!(
        DueDate::parse("2023-02-29"),
        Err(TaskListError::InvalidDate("2023-02-29".to_owned()))
    );
}

#[rstest]
fn display_is_zero_padded() {
    let due = DueDate::parse("0999-03-07").expect("valid date");
    assert_eq!(due.to_string(), "0999-03-07");
}

#[rstest]
#[case("2024-05-01", Timeliness::DueToday)]
#[case("2024-04-30", Timeliness::Overdue)]
#[case("2024-05-02", Timeliness::Upcoming)]
fn timeliness_is_an_exact_day_match(#[case] due: &str, #[case] expected: Timeliness) {
    let due_date = DueDate::parse(due).expect("valid date");
    assert_eq!(due_date.timeliness(date("2024-05-01")), expected);
}

#[rstest]
fn invalidated_marker_round_trips_and_is_overdue() {
    let marker = DueDate::invalidated();
    assert_eq!(DueDate::parse(&marker.to_string()), Ok(marker));
    assert_eq!(marker.timeliness(date("2024-05-01")), Timeliness::Overdue);
}
