use chrono::{DateTime, Utc};

/// Long-form US English calendar date, e.g. "February 1, 2026".
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(date), "February 1, 2026");
    }

    #[test]
    fn test_format_date_two_digit_day() {
        let date = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(date), "December 31, 2025");
    }
}
