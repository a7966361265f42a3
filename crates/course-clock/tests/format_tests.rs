//! Tests for fixed-template duration formatting.

use course_clock::format_duration;

#[test]
fn hours_minutes_seconds() {
    assert_eq!(format_duration(3661, false), "1h: 1m: 1s");
}

#[test]
fn with_days() {
    assert_eq!(format_duration(90_000, true), "1d: 1h: 0m: 0s");
}

#[test]
fn hours_absorb_days_without_day_field() {
    assert_eq!(format_duration(90_000, false), "25h: 0m: 0s");
}

#[test]
fn negative_clamps_to_zero() {
    assert_eq!(format_duration(-5, false), "0h: 0m: 0s");
    assert_eq!(format_duration(-5, true), "0d: 0h: 0m: 0s");
}

#[test]
fn zero_is_zero_template() {
    assert_eq!(format_duration(0, true), "0d: 0h: 0m: 0s");
    assert_eq!(format_duration(0, false), "0h: 0m: 0s");
}

#[test]
fn no_zero_suppression() {
    assert_eq!(format_duration(59, true), "0d: 0h: 0m: 59s");
    assert_eq!(format_duration(7 * 86_400, true), "7d: 0h: 0m: 0s");
}
