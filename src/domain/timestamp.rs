//! Timestamp formats used in stored records
//!
//! Records keep human-readable local times rather than epoch values:
//! achievements and results are stamped to the minute, challenges to the day.

use chrono::{DateTime, Local};

/// `DD.MM.YYYY HH:MM`, used for achievements and results
pub const MINUTE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// `DD.MM.YYYY`, used for a challenge's creation date
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Length of the date portion of a minute stamp
const DATE_LEN: usize = 10;

/// Format a moment to minute precision
pub fn minute_stamp(at: DateTime<Local>) -> String {
    at.format(MINUTE_FORMAT).to_string()
}

/// Format a moment to day precision
pub fn date_stamp(at: DateTime<Local>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Current local time to minute precision
pub fn now_minute_stamp() -> String {
    minute_stamp(Local::now())
}

/// Current local date
pub fn today_stamp() -> String {
    date_stamp(Local::now())
}

/// Date portion of a stored stamp (the whole stamp if it is shorter)
pub fn date_part(stamp: &str) -> &str {
    match stamp.char_indices().nth(DATE_LEN) {
        Some((idx, _)) => &stamp[..idx],
        None => stamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_day_first() {
        let at = Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(minute_stamp(at), "07.03.2025 09:05");
        assert_eq!(date_stamp(at), "07.03.2025");
    }

    #[test]
    fn date_part_truncates_minute_stamp() {
        assert_eq!(date_part("07.03.2025 09:05"), "07.03.2025");
        assert_eq!(date_part("07.03"), "07.03");
        assert_eq!(date_part(""), "");
    }
}
