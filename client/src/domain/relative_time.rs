//! Human-readable ages for issue detail views.

use chrono::{DateTime, Utc};

/// How long ago `then` was, relative to `now`.
///
/// Future timestamps read as "just now".
///
/// ```
/// use chrono::{Duration, Utc};
/// use impact_client::domain::time_ago;
///
/// let now = Utc::now();
/// assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
/// assert_eq!(time_ago(now - Duration::hours(3), now), "3 hours ago");
/// ```
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_owned();
    }
    let hours = elapsed.num_hours();
    if hours < 1 {
        return plural(minutes, "minute");
    }
    let days = elapsed.num_days();
    if days < 1 {
        return plural(hours, "hour");
    }
    plural(days, "day")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Duration::seconds(-30), "just now")]
    #[case(Duration::seconds(59), "just now")]
    #[case(Duration::minutes(1), "1 minute ago")]
    #[case(Duration::minutes(45), "45 minutes ago")]
    #[case(Duration::hours(1), "1 hour ago")]
    #[case(Duration::minutes(23 * 60 + 59), "23 hours ago")]
    #[case(Duration::days(1), "1 day ago")]
    #[case(Duration::days(6), "6 days ago")]
    fn renders_relative_ages(#[case] age: Duration, #[case] expected: &str) {
        let now = Utc
            .with_ymd_and_hms(2026, 1, 10, 12, 0, 0)
            .single()
            .expect("valid time");
        assert_eq!(time_ago(now - age, now), expected);
    }
}
