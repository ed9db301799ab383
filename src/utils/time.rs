//! Timestamp utilities
//!
//! Scanners stamp events with local wall-clock time in a fixed format and no
//! timezone, so everything here works on `NaiveDateTime`.

use chrono::{Local, NaiveDateTime};

/// Format of event timestamps (`YYYY-MM-DD HH:MM:SS`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the stamp embedded in backup file names (`YYYYMMDD_HHMMSS`)
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Displayed in place of a duration that could not be computed
pub const UNKNOWN_DURATION: &str = "?";

/// Displayed in place of an average over zero visits
pub const NOT_APPLICABLE: &str = "N/A";

const SECS_PER_DAY: i64 = 86_400;

/// Current local wall-clock time
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse an event timestamp
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}

/// Whole seconds from `start` to `end`, `None` if either fails to parse
///
/// The result is negative when `end` precedes `start`.
pub fn seconds_between(start: &str, end: &str) -> Option<i64> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    Some((end - start).num_seconds())
}

/// Render seconds as `H:MM:SS`, with a leading day count past 24 hours
///
/// Days are floored, so negative spans read `-1 day, 23:59:59`.
pub fn format_duration(secs: i64) -> String {
    let days = secs.div_euclid(SECS_PER_DAY);
    let rem = secs.rem_euclid(SECS_PER_DAY);
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        _ => format!("{} days, {}", days, clock),
    }
}

/// Stamp used in backup file names
pub fn backup_stamp(at: NaiveDateTime) -> String {
    at.format(BACKUP_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp("2025-03-09 14:05:00").is_some());
        assert!(parse_timestamp("2025-03-09T14:05:00").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_seconds_between() {
        assert_eq!(seconds_between("2025-03-09 14:00:00", "2025-03-09 15:00:00"), Some(3600));
        assert_eq!(seconds_between("2025-03-09 15:00:00", "2025-03-09 14:59:59"), Some(-1));
        assert_eq!(seconds_between("bogus", "2025-03-09 15:00:00"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(5400), "1:30:00");
        assert_eq!(format_duration(86_400), "1 day, 0:00:00");
        assert_eq!(format_duration(2 * 86_400 + 61), "2 days, 0:01:01");
        assert_eq!(format_duration(-1), "-1 day, 23:59:59");
    }

    #[test]
    fn test_backup_stamp() {
        let at = parse_timestamp("2025-03-09 14:05:07").unwrap();
        assert_eq!(backup_stamp(at), "20250309_140507");
    }
}
