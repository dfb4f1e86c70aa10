//! Display formatting for backend timestamps.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Join a date and optional time into a readable `dd/mm/yyyy hh:mm` string.
///
/// The backend sends dates and times as separate strings; anything chrono
/// cannot parse is shown as-is rather than dropped.
pub fn format_date_time(date: &str, time: Option<&str>) -> String {
    match time {
        Some(time) => {
            let iso = format!("{}T{}", date, time);
            for fmt in DATE_TIME_FORMATS {
                if let Ok(parsed) = NaiveDateTime::parse_from_str(&iso, fmt) {
                    return parsed.format("%d/%m/%Y %H:%M").to_string();
                }
            }
            format!("{} {}", date, time)
        }
        None => match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
            Err(_) => date.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_date_and_time() {
        assert_eq!(
            format_date_time("2024-05-10", Some("08:30:00")),
            "10/05/2024 08:30"
        );
        assert_eq!(
            format_date_time("2024-05-10", Some("08:30")),
            "10/05/2024 08:30"
        );
    }

    #[test]
    fn test_formats_date_only() {
        assert_eq!(format_date_time("2024-05-10", None), "10/05/2024");
    }

    #[test]
    fn test_falls_back_to_raw_input() {
        assert_eq!(
            format_date_time("10/05/2024", Some("8h30")),
            "10/05/2024 8h30"
        );
        assert_eq!(format_date_time("today", None), "today");
    }
}
