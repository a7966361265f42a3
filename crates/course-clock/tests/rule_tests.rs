//! Tests for weekdays, recurrence rules and their serialized form.

use chrono::{NaiveDate, NaiveTime};
use course_clock::{parse_time_of_day, RecurrenceRule, TrackerError, WeekDay};

#[test]
fn ordinals_start_on_sunday() {
    let ordinals: Vec<u32> = WeekDay::ALL.iter().map(|d| d.ordinal()).collect();
    assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(WeekDay::Sunday.ordinal(), 1);
    assert_eq!(WeekDay::Saturday.ordinal(), 7);
}

#[test]
fn display_order_starts_on_monday() {
    assert_eq!(WeekDay::Monday.display_index(), 0);
    assert_eq!(WeekDay::Saturday.display_index(), 5);
    assert_eq!(WeekDay::Sunday.display_index(), 6);
}

#[test]
fn short_names() {
    let names: Vec<&str> = WeekDay::ALL.iter().map(|d| d.short_name()).collect();
    assert_eq!(names, vec!["Sun", "Mon", "Tues", "Wed", "Thur", "Fri", "Sat"]);
}

#[test]
fn weekday_of_date() {
    let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    assert_eq!(WeekDay::of(monday), WeekDay::Monday);
    assert_eq!(WeekDay::of(monday.pred_opt().unwrap()), WeekDay::Sunday);
}

#[test]
fn parse_accepts_common_spellings() {
    assert_eq!("Monday".parse::<WeekDay>().unwrap(), WeekDay::Monday);
    assert_eq!("tues".parse::<WeekDay>().unwrap(), WeekDay::Tuesday);
    assert_eq!("THU".parse::<WeekDay>().unwrap(), WeekDay::Thursday);
    assert_eq!(" sat ".parse::<WeekDay>().unwrap(), WeekDay::Saturday);
}

#[test]
fn parse_rejects_unknown_day() {
    assert_eq!(
        "someday".parse::<WeekDay>(),
        Err(TrackerError::InvalidWeekDay("someday".to_string()))
    );
    assert!("mo".parse::<WeekDay>().is_err());
}

#[test]
fn time_of_day_with_and_without_seconds() {
    assert_eq!(
        parse_time_of_day("09:30").unwrap(),
        NaiveTime::from_hms_opt(9, 30, 0).unwrap()
    );
    assert_eq!(
        parse_time_of_day("23:59:59").unwrap(),
        NaiveTime::from_hms_opt(23, 59, 59).unwrap()
    );
    assert!(matches!(
        parse_time_of_day("25:00"),
        Err(TrackerError::InvalidTime(_))
    ));
}

#[test]
fn sorted_days_are_monday_first() {
    let rule = RecurrenceRule::new(
        [WeekDay::Sunday, WeekDay::Friday, WeekDay::Monday],
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    );
    assert_eq!(
        rule.sorted_days(),
        vec![WeekDay::Monday, WeekDay::Friday, WeekDay::Sunday]
    );
}

#[test]
fn spans_midnight_only_when_end_before_start() {
    let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
    assert!(RecurrenceRule::new([WeekDay::Monday], t(23), t(1)).spans_midnight());
    assert!(!RecurrenceRule::new([WeekDay::Monday], t(9), t(10)).spans_midnight());
    assert!(!RecurrenceRule::new([WeekDay::Monday], t(9), t(9)).spans_midnight());
}

#[test]
fn rule_json_shape() {
    let rule: RecurrenceRule = serde_json::from_str(
        r#"{"days":["Wednesday","Monday"],"start":"09:00","end":"10:15:30"}"#,
    )
    .unwrap();

    assert_eq!(rule.sorted_days(), vec![WeekDay::Monday, WeekDay::Wednesday]);
    assert_eq!(rule.daily_start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());

    let out = serde_json::to_value(&rule).unwrap();
    assert_eq!(out["start"], "09:00:00");
    assert_eq!(out["end"], "10:15:30");
}

#[test]
fn rule_json_rejects_bad_time() {
    let err = serde_json::from_str::<RecurrenceRule>(
        r#"{"days":["Monday"],"start":"9am","end":"10:00"}"#,
    );
    assert!(err.is_err());
}
