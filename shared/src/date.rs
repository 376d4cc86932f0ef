//! 时间戳的展示格式化
//!
//! 协议里的时间统一为 RFC 3339 UTC，这里只负责转成界面文案。

use chrono::{DateTime, Utc};

/// 短日期，如 `Mar 14, 2025`
pub fn short_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// 日期加时间，如 `Mar 14, 2025 09:26`
pub fn date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_short_date() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 0).unwrap();
        assert_eq!(short_date(&dt), "Mar 14, 2025");
    }

    #[test]
    fn formats_date_time() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 4, 18, 5, 0).unwrap();
        assert_eq!(date_time(&dt), "Mar 4, 2025 18:05");
    }
}
