//! Date formats used on the wire and on screen.

use chrono::NaiveDate;

/// Format the backend expects in list filters: `dd-MM-yyyy`
pub const API_DATE_FORMAT: &str = "%d-%m-%Y";

/// Format a date for a list request body
/// Example: 2025-03-07 -> "07-03-2025"
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parse the `yyyy-MM-dd` value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format a date for an `<input type="date">`
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Take the date part of an ISO timestamp
/// Example: "2025-03-07T10:15:00Z" -> "2025-03-07"
pub fn iso_date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_api_date_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_api_date(date), "07-03-2025");
    }

    #[test]
    fn test_input_date() {
        let date = parse_input_date("2025-01-02").unwrap();
        assert_eq!(format_input_date(date), "2025-01-02");
        assert_eq!(parse_input_date(""), None);
    }

    #[test]
    fn test_iso_date_part() {
        assert_eq!(iso_date_part("2025-03-07T10:15:00Z"), "2025-03-07");
        assert_eq!(iso_date_part("invalid"), "invalid");
    }
}
