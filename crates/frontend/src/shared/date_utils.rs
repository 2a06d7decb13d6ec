/// Utilities for date formatting
///
/// Table cells show plain `YYYY-MM-DD`; filter inputs exchange the same format
/// with `<input type="date">`.
use chrono::NaiveDate;

/// Placeholder for a missing cell value
pub const NO_VALUE: &str = "-";

const ISO_DATE: &str = "%Y-%m-%d";

/// Parse the date part of an ISO date or datetime string
/// Example: "2024-03-15" or "2024-03-15T14:02:26.123Z" -> 2024-03-15
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, ISO_DATE) {
        return Some(date);
    }
    // datetime: the date must be followed by 'T' or a space
    match value.get(10..11) {
        Some("T") | Some(" ") => NaiveDate::parse_from_str(&value[..10], ISO_DATE).ok(),
        _ => None,
    }
}

/// Format a row's date for the table
/// Example: Some("2024-03-15T14:02:26Z") -> "2024-03-15", None -> "-"
pub fn format_iso_date(value: Option<&str>) -> String {
    value
        .and_then(parse_iso_date)
        .map(|d| d.format(ISO_DATE).to_string())
        .unwrap_or_else(|| NO_VALUE.to_string())
}

/// Read the value of a date input; blank or invalid means "no bound"
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE).ok()
}

/// Value for a date input (empty string clears it)
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(ISO_DATE).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date(Some("2024-03-15")), "2024-03-15");
        assert_eq!(format_iso_date(Some("2024-03-15T14:02:26.123Z")), "2024-03-15");
        assert_eq!(format_iso_date(Some("2024-03-15 14:02:26")), "2024-03-15");
    }

    #[test]
    fn test_missing_or_invalid_date_renders_placeholder() {
        assert_eq!(format_iso_date(None), "-");
        assert_eq!(format_iso_date(Some("")), "-");
        assert_eq!(format_iso_date(Some("invalid")), "-");
        assert_eq!(format_iso_date(Some("2024-13-45")), "-");
        assert_eq!(format_iso_date(Some("2024-03-15X")), "-");
    }

    #[test]
    fn test_date_input_round_trip() {
        let date = parse_date_input("2023-07-01");
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 7, 1));
        assert_eq!(format_date_input(date), "2023-07-01");
        assert_eq!(parse_date_input(""), None);
        assert_eq!(format_date_input(None), "");
    }
}
