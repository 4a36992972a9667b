/// Utilities for date and time formatting
///
/// The API sends dates as `YYYY-MM-DD`, times as `HH:MM:SS` and timestamps as RFC 3339.
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Trim seconds from a wall-clock time: "14:02:26" -> "14:02"
pub fn format_time(time_str: &str) -> String {
    let mut parts = time_str.splitn(3, ':');
    match (parts.next(), parts.next()) {
        (Some(h), Some(m)) if !h.is_empty() && !m.is_empty() => format!("{}:{}", h, m),
        _ => time_str.to_string(),
    }
}

/// Show the clock time of an RFC 3339 timestamp in the browser's time zone
pub fn format_timestamp_local(timestamp: &str) -> String {
    format_timestamp_in(timestamp, &Local)
}

pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(tz).format("%H:%M").to_string(),
        Err(_) => format_time(timestamp.split('T').nth(1).unwrap_or(timestamp)),
    }
}

/// Service entries carry the server's UTC `date` and `time`; show both in the browser's zone
pub fn format_service_datetime_local(date: &str, time: &str) -> (String, String) {
    format_service_datetime_in(date, time, &Local)
}

/// `("DD/MM/YYYY", "HH:MM")` of a UTC date + time pair seen from `tz`
///
/// The date can move by a day when the offset crosses midnight.
pub fn format_service_datetime_in<Tz: TimeZone>(date: &str, time: &str, tz: &Tz) -> (String, String)
where
    Tz::Offset: std::fmt::Display,
{
    let date_part = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok();
    let time_part = NaiveTime::parse_from_str(time.trim(), "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M"))
        .ok();

    match date_part.zip(time_part) {
        Some((d, t)) => {
            let local = Utc.from_utc_datetime(&d.and_time(t)).with_timezone(tz);
            (
                local.format("%d/%m/%Y").to_string(),
                local.format("%H:%M").to_string(),
            )
        }
        None => (format_date(date), format_time(time)),
    }
}

/// Today's date as YYYY-MM-DD in the given zone
pub fn today_iso_in<Tz: TimeZone>(tz: &Tz, now: DateTime<Utc>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.with_timezone(tz).format("%Y-%m-%d").to_string()
}

/// Today's date as YYYY-MM-DD in UTC, matching how the API stamps attendance and services
pub fn today_iso_utc() -> String {
    today_iso_in(&Utc, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("14:02:26"), "14:02");
        assert_eq!(format_time("09:30"), "09:30");
    }

    #[test]
    fn test_timestamp_in_ist() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(format_timestamp_in("2026-10-18T04:30:00+00:00", &ist), "10:00");
        assert_eq!(
            format_timestamp_in("2026-10-18T04:30:00.123456+00:00", &ist),
            "10:00"
        );
    }

    #[test]
    fn test_service_time_shown_in_ist() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            format_service_datetime_in("2026-10-18", "04:30:00", &ist),
            ("18/10/2026".to_string(), "10:00".to_string())
        );
    }

    #[test]
    fn test_service_date_crosses_midnight_in_ist() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            format_service_datetime_in("2026-10-17", "20:00:00", &ist),
            ("18/10/2026".to_string(), "01:30".to_string())
        );
        assert_eq!(
            format_service_datetime_in("2026-12-31", "18:45:10.250", &ist),
            ("01/01/2027".to_string(), "00:15".to_string())
        );
    }

    #[test]
    fn test_service_datetime_unparsable_is_kept() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            format_service_datetime_in("2026-10-18", "later", &utc),
            ("18/10/2026".to_string(), "later".to_string())
        );
    }

    #[test]
    fn test_today_rolls_over_by_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();
        assert_eq!(today_iso_in(&ist, now), "2026-10-19");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_time("invalid"), "invalid");
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_timestamp_in("invalid", &utc), "invalid");
    }
}
