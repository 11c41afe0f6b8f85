/// Utilities for date, time and money formatting
///
/// Backend timestamps are ISO-8601 strings; tables show dates as DD.MM.YYYY.

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Optional timestamp as a table cell, "—" when absent
pub fn date_cell(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if !ts.trim().is_empty() => format_date(ts),
        _ => "—".to_string(),
    }
}

/// Price with the rupee sign and two decimals
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("₹{:.2}", value),
        None => "—".to_string(),
    }
}
