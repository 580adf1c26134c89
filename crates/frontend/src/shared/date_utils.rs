//! Форматирование дат для отображения в таблицах

use chrono::{DateTime, NaiveDate, Utc};

/// DD.MM.YYYY
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Форматирует дату из JSON-строки (RFC 3339 или `YYYY-MM-DD`) в DD.MM.YYYY.
/// Нераспознанная строка возвращается без изменений.
pub fn format_iso_date(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return format_date(&dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
        assert_eq!(format_date(&dt), "05.03.2024");
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2024-03-15T14:02:26Z"), "15.03.2024");
        assert_eq!(format_iso_date("2024-03-15T23:30:00-02:00"), "16.03.2024");
        assert_eq!(format_iso_date("2024-12-31"), "31.12.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_iso_date("invalid"), "invalid");
    }
}
