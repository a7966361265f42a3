//! Fixed-template duration strings for countdown displays.

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Render a number of seconds as `"{d}d: {h}h: {m}m: {s}s"` or, without days,
/// `"{h}h: {m}m: {s}s"` with the hours absorbing whole days.
///
/// Non-positive input renders the all-zero template. No field is ever
/// suppressed.
///
/// ```
/// use course_clock::format_duration;
///
/// assert_eq!(format_duration(3661, false), "1h: 1m: 1s");
/// assert_eq!(format_duration(90_000, true), "1d: 1h: 0m: 0s");
/// assert_eq!(format_duration(-5, false), "0h: 0m: 0s");
/// ```
pub fn format_duration(seconds: i64, include_days: bool) -> String {
    let total = seconds.max(0);
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total % SECONDS_PER_MINUTE;

    if include_days {
        let days = total / SECONDS_PER_DAY;
        let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
        format!("{}d: {}h: {}m: {}s", days, hours, minutes, secs)
    } else {
        let hours = total / SECONDS_PER_HOUR;
        format!("{}h: {}m: {}s", hours, minutes, secs)
    }
}
