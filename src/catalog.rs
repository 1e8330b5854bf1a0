//! Static catalog of IANA timezone identifiers.
//!
//! The catalog is a closed set fixed at build time, not derived from the
//! host's timezone database, so search output stays stable across platforms.
//! Every identifier here must also resolve through `chrono-tz`; the
//! classifier trusts that database for the actual offset/DST arithmetic.

use once_cell::sync::Lazy;

pub(crate) const CATALOG: [&str; 105] = [
    "UTC",
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "America/Anchorage",
    "America/Argentina/Buenos_Aires",
    "America/Bogota",
    "America/Caracas",
    "America/Chicago",
    "America/Denver",
    "America/Godthab",
    "America/Guatemala",
    "America/Halifax",
    "America/Los_Angeles",
    "America/Mexico_City",
    "America/New_York",
    "America/Phoenix",
    "America/Regina",
    "America/Santiago",
    "America/Sao_Paulo",
    "America/St_Johns",
    "Asia/Baghdad",
    "Asia/Bangkok",
    "Asia/Beirut",
    "Asia/Dhaka",
    "Asia/Dubai",
    "Asia/Hong_Kong",
    "Asia/Jakarta",
    "Asia/Jerusalem",
    "Asia/Kabul",
    "Asia/Karachi",
    "Asia/Kathmandu",
    "Asia/Kolkata",
    "Asia/Magadan",
    "Asia/Muscat",
    "Asia/Riyadh",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Tehran",
    "Asia/Tokyo",
    "Asia/Yakutsk",
    "Atlantic/Azores",
    "Atlantic/Cape_Verde",
    "Australia/Adelaide",
    "Australia/Brisbane",
    "Australia/Darwin",
    "Australia/Hobart",
    "Australia/Melbourne",
    "Australia/Perth",
    "Australia/Sydney",
    "Etc/GMT",
    "Etc/GMT+1",
    "Etc/GMT+10",
    "Etc/GMT+11",
    "Etc/GMT+12",
    "Etc/GMT+2",
    "Etc/GMT+3",
    "Etc/GMT+4",
    "Etc/GMT+5",
    "Etc/GMT+6",
    "Etc/GMT+7",
    "Etc/GMT-1",
    "Etc/GMT-10",
    "Etc/GMT-11",
    "Etc/GMT-12",
    "Etc/GMT-13",
    "Etc/GMT-14",
    "Etc/GMT-2",
    "Etc/GMT-3",
    "Etc/GMT-4",
    "Etc/GMT-5",
    "Etc/GMT-6",
    "Etc/GMT-7",
    "Etc/GMT-8",
    "Etc/GMT-9",
    "Europe/Amsterdam",
    "Europe/Athens",
    "Europe/Belgrade",
    "Europe/Berlin",
    "Europe/Brussels",
    "Europe/Bucharest",
    "Europe/Copenhagen",
    "Europe/Dublin",
    "Europe/Helsinki",
    "Europe/Istanbul",
    "Europe/Kiev",
    "Europe/Lisbon",
    "Europe/London",
    "Europe/Madrid",
    "Europe/Minsk",
    "Europe/Moscow",
    "Europe/Oslo",
    "Europe/Paris",
    "Europe/Prague",
    "Europe/Rome",
    "Europe/Stockholm",
    "Europe/Vienna",
    "Europe/Warsaw",
    "Europe/Zurich",
    "Pacific/Auckland",
    "Pacific/Fiji",
    "Pacific/Guam",
    "Pacific/Honolulu",
    "Pacific/Pago_Pago",
];

/// Catalog entries paired with their normalized form, in catalog order.
pub(crate) static NORMALIZED: Lazy<Vec<(String, &'static str)>> =
    Lazy::new(|| CATALOG.iter().map(|tz| (normalize(tz), *tz)).collect());

/// Normalization used on both sides of substring matching: lower-case, with
/// underscores treated as spaces (so "new york" finds `America/New_York`).
pub(crate) fn normalize(identifier: &str) -> String {
    identifier.to_lowercase().replace('_', " ")
}

pub(crate) fn contains(candidate: &str) -> bool {
    CATALOG.contains(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for tz in CATALOG {
            assert!(seen.insert(tz), "duplicate catalog entry: {tz}");
        }
    }

    #[test]
    fn every_entry_resolves_in_the_tz_database() {
        for tz in CATALOG {
            assert!(tz.parse::<chrono_tz::Tz>().is_ok(), "catalog entry not in tzdb: {tz}");
        }
    }

    #[test]
    fn normalize_lowercases_and_despaces_underscores() {
        assert_eq!(normalize("America/New_York"), "america/new york");
        assert_eq!(normalize("UTC"), "utc");
    }

    #[test]
    fn membership_is_literal() {
        assert!(contains("Europe/London"));
        assert!(!contains("europe/london"));
        assert!(!contains("Mars/Phobos"));
    }
}
