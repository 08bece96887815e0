//! Turning an instant into the time and date shown for a timezone.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::TimezoneId;

/// Default time pattern: 24-hour `HH:MM:SS`.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Default date pattern: abbreviated month, day, year (`Oct 19, 2026`).
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// The strings written to the time and date slots on each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStrings {
    pub time: String,
    pub date: String,
}

/// Why a timezone could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The identifier is not in the timezone database.
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
    /// The strftime pattern contains a specifier chrono cannot render.
    #[error("invalid format pattern '{0}'")]
    InvalidPattern(String),
}

/// Produces display strings for a timezone at a given instant.
///
/// Implemented by [`ChronoFormatter`] and by any closure with the
/// matching signature, so tests can inject a deterministic fake.
pub trait Formatter {
    fn format(&self, tz: &TimezoneId, instant: DateTime<Utc>)
    -> Result<DisplayStrings, FormatError>;
}

impl<F> Formatter for F
where
    F: Fn(&TimezoneId, DateTime<Utc>) -> Result<DisplayStrings, FormatError>,
{
    fn format(
        &self,
        tz: &TimezoneId,
        instant: DateTime<Utc>,
    ) -> Result<DisplayStrings, FormatError> {
        self(tz, instant)
    }
}

/// Formats with `chrono` using the IANA rules bundled in `chrono-tz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoFormatter {
    /// strftime pattern for the time slot.
    pub time_format: String,
    /// strftime pattern for the date slot.
    pub date_format: String,
}

impl Default for ChronoFormatter {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}

impl ChronoFormatter {
    pub fn new(time_format: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            time_format: time_format.into(),
            date_format: date_format.into(),
        }
    }

    /// Formats the current system time for `tz`.
    pub fn now(&self, tz: &TimezoneId) -> Result<DisplayStrings, FormatError> {
        self.format(tz, Utc::now())
    }
}

impl Formatter for ChronoFormatter {
    fn format(
        &self,
        tz: &TimezoneId,
        instant: DateTime<Utc>,
    ) -> Result<DisplayStrings, FormatError> {
        let zone: Tz = tz
            .as_str()
            .parse()
            .map_err(|_| FormatError::UnknownTimezone(tz.to_string()))?;
        let local = instant.with_timezone(&zone);

        Ok(DisplayStrings {
            time: render(&local, &self.time_format)?,
            date: render(&local, &self.date_format)?,
        })
    }
}

/// Returns true if chrono can render `pattern` without error.
pub fn is_valid_pattern(pattern: &str) -> bool {
    render(&Utc::now(), pattern).is_ok()
}

// `DelayedFormat` reports bad specifiers as `fmt::Error`, which
// `to_string()` would turn into a panic. Writing into a buffer keeps
// it as a recoverable error.
fn render<T: chrono::TimeZone>(local: &DateTime<T>, pattern: &str) -> Result<String, FormatError>
where
    T::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", local.format(pattern))
        .map_err(|_| FormatError::InvalidPattern(pattern.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 22, 5, 9).unwrap()
    }

    #[test]
    fn formats_in_the_requested_timezone() {
        // Arrange
        let formatter = ChronoFormatter::default();

        // Act
        let brisbane = formatter
            .format(&"Australia/Brisbane".into(), instant())
            .unwrap();
        let utc = formatter.format(&"UTC".into(), instant()).unwrap();

        // Assert
        assert_eq!(utc.time, "22:05:09");
        assert_eq!(utc.date, "Oct 19, 2026");
        // Brisbane is UTC+10 with no daylight saving.
        assert_eq!(brisbane.time, "08:05:09");
        assert_eq!(brisbane.date, "Oct 20, 2026");
    }

    #[test]
    fn applies_daylight_saving_rules() {
        let formatter = ChronoFormatter::default();
        let summer = Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let tz = TimezoneId::from("America/New_York");

        assert_eq!(formatter.format(&tz, summer).unwrap().time, "08:00:00");
        assert_eq!(formatter.format(&tz, winter).unwrap().time, "07:00:00");
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        // Act
        let result = ChronoFormatter::default().format(&"Mars/Olympus".into(), instant());

        // Assert
        assert_eq!(
            result,
            Err(FormatError::UnknownTimezone("Mars/Olympus".into()))
        );
    }

    #[test]
    fn broken_pattern_is_an_error_not_a_panic() {
        // Arrange
        let formatter = ChronoFormatter::new("%Q", DEFAULT_DATE_FORMAT);

        // Act
        let result = formatter.format(&"UTC".into(), instant());

        // Assert
        assert_eq!(result, Err(FormatError::InvalidPattern("%Q".into())));
        assert!(!is_valid_pattern("%Q"));
        assert!(is_valid_pattern(DEFAULT_TIME_FORMAT));
    }

    #[test]
    fn same_second_gives_identical_strings() {
        let formatter = ChronoFormatter::default();
        let tz = TimezoneId::from("Europe/London");
        let later_same_second = instant() + chrono::Duration::milliseconds(400);

        assert_eq!(
            formatter.format(&tz, instant()).unwrap(),
            formatter.format(&tz, later_same_second).unwrap()
        );
    }

    #[test]
    fn closures_are_formatters() {
        // Arrange
        let fake = |tz: &TimezoneId, _: DateTime<Utc>| {
            Ok::<_, FormatError>(DisplayStrings {
                time: format!("time in {tz}"),
                date: "today".into(),
            })
        };

        // Act
        let out = fake.format(&"UTC".into(), instant()).unwrap();

        // Assert
        assert_eq!(out.time, "time in UTC");
    }
}
