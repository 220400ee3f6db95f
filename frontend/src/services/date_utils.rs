use chrono::{DateTime, Datelike, Timelike};

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Full display form of a wire timestamp, e.g. "January 1, 2024 00:00".
/// Falls back to the raw string when it does not parse.
pub fn format_timestamp_full(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => format!(
            "{} {}, {} {:02}:{:02}",
            month_name(dt.month()),
            dt.day(),
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        Err(_) => timestamp.to_string(),
    }
}

/// Short display form, e.g. "01/01/24 00:00".
pub fn format_timestamp_short(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => format!(
            "{:02}/{:02}/{:02} {:02}:{:02}",
            dt.month(),
            dt.day(),
            dt.year().rem_euclid(100),
            dt.hour(),
            dt.minute()
        ),
        Err(_) => timestamp.to_string(),
    }
}

/// Short form of an optional last-update timestamp, or a placeholder dash
/// when the guide has never been updated.
pub fn format_last_update(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) => format_timestamp_short(ts),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_full() {
        assert_eq!(
            format_timestamp_full("2024-01-01T00:00:00.000Z"),
            "January 1, 2024 00:00"
        );
        assert_eq!(
            format_timestamp_full("2024-11-23T18:05:00.000Z"),
            "November 23, 2024 18:05"
        );
    }

    #[test]
    fn test_format_timestamp_short() {
        assert_eq!(
            format_timestamp_short("2024-01-01T00:00:00.000Z"),
            "01/01/24 00:00"
        );
        assert_eq!(
            format_timestamp_short("2024-11-23T18:05:00.000Z"),
            "11/23/24 18:05"
        );
    }

    #[test]
    fn test_unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp_full("not a date"), "not a date");
        assert_eq!(format_timestamp_short("not a date"), "not a date");
    }

    #[test]
    fn test_format_last_update_placeholder() {
        assert_eq!(format_last_update(None), "—");
        assert_eq!(
            format_last_update(Some("2024-11-23T18:05:00.000Z")),
            "11/23/24 18:05"
        );
    }
}
