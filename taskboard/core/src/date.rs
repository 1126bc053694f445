//! Date conversions between the date picker, the backend wire format and the list view.
//!
//! The backend receives due dates as ISO-8601 timestamps with milliseconds and an explicit
//! offset. The list shows a short `DD/MM/YY` form and the date picker works on plain
//! `YYYY-MM-DD` values. Conversions take the viewer's time zone as a parameter so they
//! behave the same in the browser (`chrono::Local`) and in tests (`Utc`, `FixedOffset`).

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::Serializer;
use std::fmt::Display;

/// `YYYY-MM-DDTHH:mm:ss.SSS+HH:MM`, the format every write to the backend uses.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";
/// Short form rendered in the task list.
pub const DISPLAY_FORMAT: &str = "%d/%m/%y";
/// Value format of an `<input type="date">`.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parses a raw date picker value. Returns `None` for empty or malformed input.
pub fn parse_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_FORMAT).ok()
}

/// Midnight of `date` as seen in `tz`, pinned to that zone's offset.
///
/// Returns `None` when midnight does not exist in `tz` (a DST gap starting at 00:00).
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<FixedOffset>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.fixed_offset())
}

/// Formats a timestamp in [`WIRE_FORMAT`].
pub fn to_wire(date: &DateTime<FixedOffset>) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Formats a timestamp for the list view, in the viewer's zone.
pub fn to_display<Tz>(date: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

/// Formats a timestamp as a date picker value, in the viewer's zone.
pub fn to_input<Tz: TimeZone>(date: &DateTime<FixedOffset>, tz: &Tz) -> String {
    date.with_timezone(tz)
        .date_naive()
        .format(INPUT_FORMAT)
        .to_string()
}

/// `serialize_with` adapter writing a timestamp in [`WIRE_FORMAT`].
pub fn serialize_wire<S: Serializer>(
    date: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(WIRE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn wire(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    #[test]
    fn test_start_of_day_in_utc_formats_with_zero_offset() {
        // Arrange
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        // Act
        let due = start_of_day(date, &Utc).unwrap();

        // Assert
        assert_eq!(to_wire(&due), "2024-01-15T00:00:00.000+00:00");
    }

    #[test]
    fn test_start_of_day_keeps_local_offset() {
        // Arrange
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let paris_winter = FixedOffset::east_opt(3600).unwrap();

        // Act
        let due = start_of_day(date, &paris_winter).unwrap();

        // Assert
        assert_eq!(to_wire(&due), "2024-01-15T00:00:00.000+01:00");
    }

    #[test]
    fn test_display_uses_short_day_first_format() {
        let due = wire("2024-03-02T00:00:00.000Z");

        assert_eq!(to_display(&due, &Utc), "02/03/24");
    }

    #[test]
    fn test_display_shifts_into_viewer_zone() {
        // Midnight UTC is still the previous evening three hours west.
        let due = wire("2024-03-02T00:00:00.000Z");
        let west = FixedOffset::west_opt(3 * 3600).unwrap();

        assert_eq!(to_display(&due, &west), "01/03/24");
    }

    #[test]
    fn test_to_input_produces_date_picker_value() {
        let due = wire("2024-03-02T00:00:00.000+01:00");
        let zone = FixedOffset::east_opt(3600).unwrap();

        assert_eq!(to_input(&due, &zone), "2024-03-02");
    }

    #[test]
    fn test_parse_input_accepts_picker_values() {
        assert_eq!(
            parse_input("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_input(" 2024-01-15 "),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_parse_input_rejects_empty_and_malformed_values() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("2024-13-01"), None);
        assert_eq!(parse_input("15/01/2024"), None);
    }
}
