use chrono::Duration;

/// Quick english description of a time interval, floored to its largest unit.
///
/// Negative intervals (clock going backwards in the log) read as "0 seconds".
pub fn describe_elapsed(elapsed: Duration) -> String {
    let elapsed = elapsed.max(Duration::zero());

    if elapsed.num_days() >= 1 {
        format!("{} days", elapsed.num_days())
    } else if elapsed.num_hours() >= 1 {
        format!("{} hours", elapsed.num_hours())
    } else if elapsed.num_minutes() >= 1 {
        format!("{} minutes", elapsed.num_minutes())
    } else {
        format!("{} seconds", elapsed.num_seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        assert_eq!(describe_elapsed(Duration::seconds(0)), "0 seconds");
        assert_eq!(describe_elapsed(Duration::seconds(59)), "59 seconds");
    }

    #[test]
    fn test_minutes_floor() {
        assert_eq!(describe_elapsed(Duration::seconds(60)), "1 minutes");
        assert_eq!(describe_elapsed(Duration::seconds(90)), "1 minutes");
        assert_eq!(describe_elapsed(Duration::seconds(3599)), "59 minutes");
    }

    #[test]
    fn test_hours() {
        assert_eq!(describe_elapsed(Duration::seconds(3600)), "1 hours");
        assert_eq!(describe_elapsed(Duration::seconds(7200)), "2 hours");
        assert_eq!(describe_elapsed(Duration::seconds(86_399)), "23 hours");
    }

    #[test]
    fn test_days() {
        assert_eq!(describe_elapsed(Duration::seconds(86_400 + 17)), "1 days");
        assert_eq!(describe_elapsed(Duration::days(3) + Duration::hours(5)), "3 days");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(describe_elapsed(Duration::seconds(-30)), "0 seconds");
    }
}
