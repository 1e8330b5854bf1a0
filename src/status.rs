//! Working-hours classification of an instant in a given timezone.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Coarse working-hours status derived from the local wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingHoursStatus {
    Working,
    Borderline,
    Off,
}

impl WorkingHoursStatus {
    /// Human-readable label shown next to the status indicator.
    pub fn label(self) -> &'static str {
        match self {
            WorkingHoursStatus::Working => "Working Hours",
            WorkingHoursStatus::Borderline => "Borderline Hours",
            WorkingHoursStatus::Off => "Off Hours",
        }
    }
}

/// The identifier could not be resolved by the tz database.
///
/// In normal operation this never fires: only validated identifiers reach
/// classification, with the matcher's submission gate as the upstream guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timezone identifier: {0}")]
pub struct InvalidTimezone(pub String);

pub(crate) fn classify_working_hours(
    instant: DateTime<Utc>,
    timezone: &str,
) -> Result<WorkingHoursStatus, InvalidTimezone> {
    Ok(status_for_hour(local_time(instant, timezone)?.hour()))
}

/// Resolve an absolute instant to wall-clock time in `timezone`, DST
/// included. The conversion itself is `chrono-tz`'s compiled tz database.
pub(crate) fn local_time(instant: DateTime<Utc>, timezone: &str) -> Result<DateTime<Tz>, InvalidTimezone> {
    let tz: Tz = timezone.parse().map_err(|_| InvalidTimezone(timezone.to_string()))?;
    Ok(instant.with_timezone(&tz))
}

// Boundaries are evaluated in order: working core first, then the shoulder
// hours on either side of it.
fn status_for_hour(hour: u32) -> WorkingHoursStatus {
    if (9..17).contains(&hour) {
        WorkingHoursStatus::Working
    } else if (7..9).contains(&hour) || (17..19).contains(&hour) {
        WorkingHoursStatus::Borderline
    } else {
        WorkingHoursStatus::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_utc(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, hour, minute, 0).unwrap()
    }

    #[test]
    fn hour_boundaries_matching() {
        use WorkingHoursStatus::*;

        // Array of ((hour, minute), expected status); classified in UTC so
        // the local hour equals the instant's hour.
        let cases: Vec<((u32, u32), WorkingHoursStatus)> = vec![
            ((0, 0), Off),
            ((6, 0), Off),
            ((6, 59), Off),
            ((7, 0), Borderline),
            ((8, 59), Borderline),
            ((9, 0), Working),
            ((12, 30), Working),
            ((16, 59), Working),
            ((17, 0), Borderline),
            ((18, 59), Borderline),
            ((19, 0), Off),
            ((23, 59), Off),
        ];

        for ((hour, minute), expected) in cases {
            let got = classify_working_hours(at_utc(hour, minute), "UTC").unwrap();
            assert_eq!(got, expected, "at {hour:02}:{minute:02} UTC");
        }
    }

    #[test]
    fn fixed_offset_zones_shift_the_local_hour() {
        use WorkingHoursStatus::*;

        // Etc/GMT-5 is five hours AHEAD of UTC: 04:00 UTC is 09:00 local.
        assert_eq!(classify_working_hours(at_utc(4, 0), "Etc/GMT-5").unwrap(), Working);
        // Etc/GMT+5 is five hours BEHIND: 14:00 UTC is 09:00 local.
        assert_eq!(classify_working_hours(at_utc(14, 0), "Etc/GMT+5").unwrap(), Working);
        assert_eq!(classify_working_hours(at_utc(0, 0), "Etc/GMT-5").unwrap(), Off);
    }

    #[test]
    fn dst_observing_zones_classify_by_shifted_hour() {
        use WorkingHoursStatus::*;

        // London is UTC+1 in July: 16:30 UTC is 17:30 BST.
        let summer = Utc.with_ymd_and_hms(2024, 7, 10, 16, 30, 0).unwrap();
        assert_eq!(classify_working_hours(summer, "Europe/London").unwrap(), Borderline);
        // ...and UTC+0 in January: 16:30 UTC is 16:30 GMT.
        let winter = Utc.with_ymd_and_hms(2024, 1, 10, 16, 30, 0).unwrap();
        assert_eq!(classify_working_hours(winter, "Europe/London").unwrap(), Working);

        // New York is UTC-5 in January: 14:00 UTC is 09:00 EST.
        assert_eq!(
            classify_working_hours(Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap(), "America/New_York").unwrap(),
            Working
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let instant = at_utc(10, 15);
        let first = classify_working_hours(instant, "Asia/Tokyo").unwrap();
        let second = classify_working_hours(instant, "Asia/Tokyo").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unresolvable_identifier_is_an_error() {
        assert_eq!(
            classify_working_hours(at_utc(12, 0), "Mars/Phobos"),
            Err(InvalidTimezone("Mars/Phobos".to_string()))
        );
        // Validation accepts any Etc/GMT±N spelling, but the tz database
        // stops at +12; past that the classifier reports the contract breach.
        assert!(classify_working_hours(at_utc(12, 0), "Etc/GMT+13").is_err());
    }

    #[test]
    fn local_time_reports_the_wall_clock() {
        let local = local_time(at_utc(4, 0), "Etc/GMT-5").unwrap();
        assert_eq!(local.hour(), 9);
        assert_eq!(local.minute(), 0);
    }
}
