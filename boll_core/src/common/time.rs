use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::common::boll_error::{BollError, ErrCode};

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Parse a candle timestamp into milliseconds since the Unix epoch.
///
/// Supports an integer millisecond value, "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD".
/// Datetimes are read as UTC.
pub fn parse_timestamp(time_str: &str) -> Result<i64, BollError> {
    let time_str = time_str.trim();
    if let Ok(ms) = time_str.parse::<i64>() {
        return Ok(ms);
    }

    let parsed = if time_str.contains(' ') {
        NaiveDateTime::parse_from_str(time_str, "%Y-%m-%d %H:%M:%S")
    } else {
        NaiveDate::parse_from_str(time_str, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
    };
    let datetime = parsed.map_err(|e| {
        BollError::new(
            format!("invalid timestamp \"{}\": {}", time_str, e),
            ErrCode::SrcDataFormatError,
        )
    })?;

    Ok(datetime.and_utc().timestamp_millis())
}

/// Render a millisecond timestamp as "YYYY-MM-DD HH:MM:SS" (UTC).
/// Falls back to the raw number when it is out of chrono's range.
pub fn format_timestamp(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_timestamp("1700000000000").unwrap(), 1_700_000_000_000);
        assert_eq!(parse_timestamp(" -5 ").unwrap(), -5);
    }

    #[test]
    fn test_parse_datetime() {
        assert_eq!(parse_timestamp("1970-01-02 00:00:00").unwrap(), MILLIS_PER_DAY);
        assert_eq!(parse_timestamp("1970-01-03").unwrap(), 2 * MILLIS_PER_DAY);
        assert_eq!(parse_timestamp("1970-01-01 00:00:01").unwrap(), 1000);
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert_eq!(err.errcode, ErrCode::SrcDataFormatError);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(MILLIS_PER_DAY), "1970-01-02 00:00:00");
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }
}
