//! 日期时间工具
//!
//! 请求体里的日期是文本形式；响应里的时间戳统一 RFC 3339，
//! 日期 YYYY-MM-DD，时刻 HH:MM。

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::errors::{Result, StudentDashError};

/// 解析请求体里的文本日期
///
/// 接受 `YYYY-MM-DD HH:MM` 或 `YYYY-MM-DD`（按当天零点处理），UTC。
pub fn parse_request_date(text: &str) -> Result<DateTime<Utc>> {
    let trimmed = text.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M") {
        return Ok(Utc.from_utc_datetime(&dt));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| StudentDashError::date_parse(format!("无效日期: {trimmed}")))?;
        return Ok(Utc.from_utc_datetime(&midnight));
    }

    Err(StudentDashError::date_parse(format!(
        "无法解析日期: {trimmed}"
    )))
}

/// 格式化为 HH:MM（UTC，零填充）
pub fn format_time_of_day(dt: &DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}

/// 格式化为 YYYY-MM-DD
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// 英文星期名，如 "Monday"
pub fn weekday_name(dt: &DateTime<Utc>) -> String {
    dt.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_request_date("2025-01-10").unwrap();
        assert_eq!(format_date(&dt), "2025-01-10");
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_date_with_time() {
        let dt = parse_request_date("2025-01-10 16:45").unwrap();
        assert_eq!(format_date(&dt), "2025-01-10");
        assert_eq!(format_time_of_day(&dt), "16:45");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let dt = parse_request_date("  2025-03-01  ").unwrap();
        assert_eq!(format_date(&dt), "2025-03-01");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_request_date("next tuesday").is_err());
        assert!(parse_request_date("10-01-2025").is_err());
        assert!(parse_request_date("").is_err());
    }

    #[test]
    fn test_time_of_day_zero_padded() {
        let dt = parse_request_date("2025-01-10 08:05").unwrap();
        assert_eq!(format_time_of_day(&dt), "08:05");
    }

    #[test]
    fn test_weekday_name() {
        // 2025-01-10 是周五
        let dt = parse_request_date("2025-01-10").unwrap();
        assert_eq!(weekday_name(&dt), "Friday");
    }
}
