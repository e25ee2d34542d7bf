//! Clock producers.

use chrono::{Local, NaiveDateTime};

/// Returns the current local date and time.
pub fn current_timestamp() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Formats a local date-time as ISO-8601 without an offset,
/// e.g. `2024-01-15T10:30:00.123`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use funcops::instances::time::format_iso_local;
///
/// let timestamp = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .and_then(|date| date.and_hms_milli_opt(10, 30, 0, 123))
///     .unwrap();
/// assert_eq!(format_iso_local(timestamp), "2024-01-15T10:30:00.123");
/// ```
pub fn format_iso_local(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{Producer, produce_then};
    use chrono::Datelike;

    #[test]
    fn test_current_timestamp_reads_clock() {
        assert!(current_timestamp.produce().year() >= 2024);
    }

    #[test]
    fn test_formatted_timestamp_shape() {
        let text = produce_then(current_timestamp, format_iso_local).produce();
        assert_eq!(text.as_bytes()[10], b'T');
        assert!(NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
