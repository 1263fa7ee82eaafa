use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

// Anything above this is taken to be milliseconds (year 5138 in seconds)
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Unix seconds from a collector-supplied date value, `None` if unusable.
pub fn parse_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(from_epoch),
        Value::String(s) => parse_date_str(s),
        _ => None,
    }
}

pub fn parse_date_str(date_str: &str) -> Option<i64> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    if let Ok(epoch) = date_str.parse::<i64>() {
        return from_epoch(epoch);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(date_str) {
        return Some(datetime.timestamp());
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.and_utc().timestamp());
    }

    for format in ["%Y-%m-%d", "%d %b %Y", "%b %d, %Y", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
        }
    }

    // "Jan 2024" has no day, pin it to the first of the month
    if let Ok(date) = NaiveDate::parse_from_str(&format!("01 {}", date_str), "%d %b %Y") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }

    None
}

fn from_epoch(value: i64) -> Option<i64> {
    if value < 0 {
        None
    } else if value > MILLIS_THRESHOLD {
        Some(value / 1000)
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    fn ymd(timestamp: i64) -> (i32, u32, u32) {
        let date = DateTime::from_timestamp(timestamp, 0).unwrap();
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn test_parse_rfc3339() {
        let timestamp = parse_date_str("2024-03-05T10:00:00+02:00").unwrap();
        assert_eq!(ymd(timestamp), (2024, 3, 5));
    }

    #[test]
    fn test_parse_iso_date() {
        let timestamp = parse_date_str("2025-11-30").unwrap();
        assert_eq!(ymd(timestamp), (2025, 11, 30));
    }

    #[test]
    fn test_parse_month_year() {
        let timestamp = parse_date_str("Jan 2024").unwrap();
        assert_eq!(ymd(timestamp), (2024, 1, 1));
    }

    #[test]
    fn test_parse_full_date() {
        let timestamp = parse_date_str("22 Jan 2026").unwrap();
        assert_eq!(ymd(timestamp), (2026, 1, 22));
    }

    #[test]
    fn test_parse_epoch_values() {
        assert_eq!(parse_timestamp(&json!(1_700_000_000)), Some(1_700_000_000));
        assert_eq!(parse_timestamp(&json!(1_700_000_000_000i64)), Some(1_700_000_000));
        assert_eq!(parse_timestamp(&json!("1700000000")), Some(1_700_000_000));
        assert_eq!(parse_timestamp(&json!(-5)), None);
    }

    #[test]
    fn test_unusable_values() {
        assert!(parse_date_str("").is_none());
        assert!(parse_date_str("   ").is_none());
        assert!(parse_date_str("yesterday").is_none());
        assert!(parse_timestamp(&json!(true)).is_none());
        assert!(parse_timestamp(&json!({"date": "2024-01-01"})).is_none());
    }
}
