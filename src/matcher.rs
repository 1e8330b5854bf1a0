//! Timezone search over the static catalog.
//!
//! Two paths produce candidates for a raw query:
//!
//! 1. **GMT shorthand** — input like `GMT+5`, `+5` or `-11` synthesizes a
//!    single `Etc/GMT±N` identifier, bypassing the catalog scan entirely.
//!    The tz database's `Etc/GMT` zones use the POSIX sign convention, which
//!    is inverted relative to common speech: a user asking for `GMT+5`
//!    (five hours ahead of UTC) gets `Etc/GMT-5`. The inversion is kept in
//!    one place, [`etc_gmt_identifier`].
//! 2. **Substring search** — everything else is matched case- and
//!    underscore-insensitively against the catalog, preserving catalog
//!    order, truncated to [`MAX_SUGGESTIONS`].
//!
//! A shorthand with an offset outside 0..=12 is not an error: it falls
//! through to the substring path, which may legitimately find nothing.

use crate::catalog;

/// Upper bound on suggestions returned by a substring search.
pub(crate) const MAX_SUGGESTIONS: usize = 10;

/// Largest GMT offset the shorthand path accepts, in hours.
const MAX_SHORTHAND_OFFSET: u32 = 12;

pub(crate) fn match_timezones(query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    if let Some(identifier) = gmt_shorthand(query) {
        return vec![identifier];
    }

    let needle = catalog::normalize(query);
    catalog::NORMALIZED
        .iter()
        .filter(|(normalized, _)| normalized.contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|(_, tz)| (*tz).to_string())
        .collect()
}

pub(crate) fn is_valid_timezone(candidate: &str) -> bool {
    catalog::contains(candidate) || regex!(r"^Etc/GMT[+-]\d{1,2}$").is_match(candidate)
}

/// Parse `GMT+5` / `+5` style input into a synthesized identifier.
///
/// The candidate is returned without checking catalog membership; the
/// submission-time validation pattern accepts any `Etc/GMT±N` string.
fn gmt_shorthand(query: &str) -> Option<String> {
    let caps = regex!(r"(?i)^(?:GMT)?([+-])(\d{1,2})$").captures(query)?;
    let ahead_of_utc = caps.get(1)?.as_str() == "+";
    let offset: u32 = caps.get(2)?.as_str().parse().ok()?;
    if offset > MAX_SHORTHAND_OFFSET {
        return None;
    }
    Some(etc_gmt_identifier(ahead_of_utc, offset))
}

/// Build the `Etc/GMT±N` identifier for a user-facing offset, flipping the
/// sign for the POSIX convention. The sign survives inversion even at zero:
/// `+0` yields `Etc/GMT-0` and `-0` yields `Etc/GMT+0`, two spellings of the
/// same zone.
pub(crate) fn etc_gmt_identifier(ahead_of_utc: bool, offset: u32) -> String {
    let sign = if ahead_of_utc { '-' } else { '+' };
    format!("Etc/GMT{sign}{offset}")
}
