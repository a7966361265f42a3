//! Property-based tests for occurrence resolution using proptest.
//!
//! These check invariants that hold for any rule with at least one meeting day,
//! not just the worked examples in `occurrence_tests.rs`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use course_clock::{countdown_state, next_occurrence, CountdownState, RecurrenceRule, WeekDay};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_days() -> impl Strategy<Value = Vec<WeekDay>> {
    proptest::sample::subsequence(WeekDay::ALL.to_vec(), 1..=7)
}

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..=23, 0u32..=59, 0u32..=59)
        .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap())
}

/// A reference instant in the 2025-2027 range. Day is capped at 28 to avoid
/// invalid month/day combos.
fn arb_now() -> impl Strategy<Value = NaiveDateTime> {
    (2025i32..=2027, 1u32..=12, 1u32..=28, arb_time())
        .prop_map(|(y, m, d, t)| NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(t))
}

fn arb_rule() -> impl Strategy<Value = RecurrenceRule> {
    (arb_days(), arb_time(), arb_time())
        .prop_map(|(days, start, end)| RecurrenceRule::new(days, start, end))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn non_empty_rule_always_resolves(rule in arb_rule(), now in arb_now()) {
        prop_assert!(next_occurrence(&rule, now).is_some());
    }

    #[test]
    fn resolved_occurrence_is_eligible(rule in arb_rule(), now in arb_now()) {
        let occ = next_occurrence(&rule, now).unwrap();
        prop_assert!(occ.start >= now || (occ.start <= now && now <= occ.end));
    }

    #[test]
    fn resolved_start_falls_on_a_rule_day(rule in arb_rule(), now in arb_now()) {
        let occ = next_occurrence(&rule, now).unwrap();
        prop_assert!(rule.days.contains(&WeekDay::of(occ.start.date())));
        prop_assert_eq!(occ.start.time(), rule.daily_start);
        prop_assert_eq!(occ.end.time(), rule.daily_end);
    }

    #[test]
    fn resolved_start_is_within_scan(rule in arb_rule(), now in arb_now()) {
        let occ = next_occurrence(&rule, now).unwrap();
        let offset = (occ.start.date() - now.date()).num_days();
        prop_assert!((0..=7).contains(&offset), "offset {} outside scan", offset);
    }

    #[test]
    fn window_is_shorter_than_a_day(rule in arb_rule(), now in arb_now()) {
        let occ = next_occurrence(&rule, now).unwrap();
        prop_assert!(occ.end >= occ.start);
        prop_assert!(occ.duration() < Duration::days(1));
    }

    #[test]
    fn resolution_is_pure(rule in arb_rule(), now in arb_now()) {
        prop_assert_eq!(next_occurrence(&rule, now), next_occurrence(&rule, now));
        prop_assert_eq!(countdown_state(&rule, now), countdown_state(&rule, now));
    }

    #[test]
    fn countdown_is_never_waiting_or_negative(rule in arb_rule(), now in arb_now()) {
        let state = countdown_state(&rule, now);
        prop_assert_ne!(state, CountdownState::Waiting);
        let left = state.time_left().unwrap();
        prop_assert!(left >= Duration::zero());
        prop_assert!(left <= Duration::days(8));
    }

    #[test]
    fn during_class_never_exceeds_window(rule in arb_rule(), now in arb_now()) {
        if let CountdownState::DuringClass { time_left } = countdown_state(&rule, now) {
            let occ = next_occurrence(&rule, now).unwrap();
            prop_assert!(time_left > Duration::zero());
            prop_assert!(time_left <= occ.duration());
        }
    }

    #[test]
    fn single_day_at_start_is_during_full_window(
        day in proptest::sample::select(WeekDay::ALL.to_vec()),
        start in arb_time(),
        end in arb_time(),
        base in arb_now(),
    ) {
        prop_assume!(start < end);
        let rule = RecurrenceRule::new([day], start, end);
        // Move `base` forward to the next date that falls on `day`.
        let date = (0..7)
            .map(|o| base.date() + Duration::days(o))
            .find(|d| WeekDay::of(*d) == day)
            .unwrap();

        let at_start = date.and_time(start);
        prop_assert_eq!(
            countdown_state(&rule, at_start),
            CountdownState::DuringClass { time_left: end - start }
        );
        prop_assert_eq!(
            countdown_state(&rule, at_start - Duration::seconds(1)),
            CountdownState::BeforeStart { time_left: Duration::seconds(1) }
        );
    }
}
