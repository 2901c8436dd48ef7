use chrono::{DateTime, NaiveDate};

/// Render an API date for display as `DD-MM-YYYY`
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. Anything else
/// is returned unchanged.
pub fn locale_date(date: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return timestamp.format("%d-%m-%Y").to_string();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(day) => day.format("%d-%m-%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        assert_eq!(locale_date("2020-03-09"), "09-03-2020");
    }

    #[test]
    fn test_timestamp_keeps_its_own_offset() {
        assert_eq!(locale_date("2020-12-31T23:30:00+01:00"), "31-12-2020");
        assert_eq!(locale_date("2021-01-05T08:00:00Z"), "05-01-2021");
    }

    #[test]
    fn test_unparseable_input_is_returned() {
        assert_eq!(locale_date("yesterday"), "yesterday");
        assert_eq!(locale_date(""), "");
    }
}
