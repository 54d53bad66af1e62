//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime from current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time into a unix epoch millisecond string: "1700000000000".
///
/// This is the encoding the dictionary service expects for request nonces.
pub fn format_timestamp_millis(t: DateTime) -> String {
    t.timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_millis() {
        let t = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        assert_eq!(format_timestamp_millis(t), "1700000000000");
    }
}
