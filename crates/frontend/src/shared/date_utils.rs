/// Utilities for appointment date and time formatting
///
/// Booking dates arrive either as `datetime-local` form values
/// ("2026-08-23T14:30") or as full ISO strings from the seed data
/// ("2026-08-23T14:30:00.000Z"). Both are formatted without parsing.

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2026-08-23" or "2026-08-23T14:30:00Z" -> "23.08.2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Extract the HH:MM part of an ISO datetime string
/// Example: "2026-08-23T14:30:00.000Z" -> "14:30"
pub fn format_time(datetime_str: &str) -> String {
    if let Some((_, time_part)) = datetime_str.split_once('T') {
        let mut segments = time_part.split(':');
        if let (Some(hours), Some(minutes)) = (segments.next(), segments.next()) {
            return format!("{}:{}", hours, minutes);
        }
    }
    String::new()
}

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2026-08-23T14:30" -> "23.08.2026 14:30"
pub fn format_datetime(datetime_str: &str) -> String {
    let time = format_time(datetime_str);
    if time.is_empty() {
        return format_date(datetime_str);
    }
    format!("{} {}", format_date(datetime_str), time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-23"), "23.08.2026");
        assert_eq!(format_date("2026-08-23T14:30:00.000Z"), "23.08.2026");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2026-08-23T14:30"), "14:30");
        assert_eq!(format_time("2026-08-23T14:30:00.000Z"), "14:30");
        assert_eq!(format_time("2026-08-23"), "");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-08-23T14:30"), "23.08.2026 14:30");
        assert_eq!(
            format_datetime("2026-12-31T23:59:59.123Z"),
            "31.12.2026 23:59"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
