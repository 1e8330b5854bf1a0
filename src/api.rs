use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::status::{InvalidTimezone, WorkingHoursStatus};
use crate::{matcher, status};

/// Rank catalog identifiers against a free-text search query.
///
/// Returns at most ten candidates in catalog order, except for GMT-offset
/// shorthand (`GMT+5`, `-11`, ...) which synthesizes exactly one `Etc/GMT±N`
/// identifier with the tz database's inverted sign convention. An empty
/// query yields no suggestions.
///
/// # Example
/// ```
/// use meetright::match_timezones;
///
/// assert_eq!(match_timezones("london"), vec!["Europe/London".to_string()]);
/// assert_eq!(match_timezones("GMT+5"), vec!["Etc/GMT-5".to_string()]);
/// ```
pub fn match_timezones(query: &str) -> Vec<String> {
    matcher::match_timezones(query)
}

/// Whether `candidate` may become a roster entry's timezone: a literal
/// member of the catalog, or any `Etc/GMT±N` spelling (the shorthand path
/// synthesizes those without consulting the catalog).
///
/// # Example
/// ```
/// use meetright::is_valid_timezone;
///
/// assert!(is_valid_timezone("Europe/Paris"));
/// assert!(is_valid_timezone("Etc/GMT-5"));
/// assert!(!is_valid_timezone("Mars/Phobos"));
/// ```
pub fn is_valid_timezone(candidate: &str) -> bool {
    matcher::is_valid_timezone(candidate)
}

/// Classify an instant, as observed in `timezone`, into a coarse
/// working-hours status: local hour 9–16 is working, 7–8 and 17–18 are
/// borderline, the rest is off.
///
/// Fails with [`InvalidTimezone`] when the identifier is unknown to the tz
/// database; callers are expected to gate entries through
/// [`is_valid_timezone`] first.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use meetright::{WorkingHoursStatus, classify_working_hours};
///
/// let noon = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
/// assert_eq!(classify_working_hours(noon, "UTC"), Ok(WorkingHoursStatus::Working));
/// ```
pub fn classify_working_hours(instant: DateTime<Utc>, timezone: &str) -> Result<WorkingHoursStatus, InvalidTimezone> {
    status::classify_working_hours(instant, timezone)
}

/// Resolve an instant to local wall-clock time in `timezone`, for display.
/// Uses the same trusted tz database conversion as the classifier.
pub fn local_time(instant: DateTime<Utc>, timezone: &str) -> Result<DateTime<Tz>, InvalidTimezone> {
    status::local_time(instant, timezone)
}
