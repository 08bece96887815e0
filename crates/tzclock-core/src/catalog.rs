//! The ordered list of selectable timezones.
//!
//! The exhaustive list comes from a [`ZoneSource`] (normally the IANA
//! database compiled into `chrono-tz`). When no source is available,
//! or it fails, or it reports nothing, a small built-in sample is used
//! instead. Listing never fails and never returns an empty catalog.

use std::collections::HashSet;

use crate::TimezoneId;

/// Identifier used when the configured default is not in the catalog.
pub const UTC: &str = "UTC";

/// Built-in catalog used when the platform enumeration is unavailable.
///
/// Starts with `UTC`, then one or two zones per region.
pub const FALLBACK_ZONES: &[&str] = &[
    UTC,
    "America/Los_Angeles",
    "America/Denver",
    "America/Chicago",
    "America/New_York",
    "America/Sao_Paulo",
    "Europe/London",
    "Europe/Paris",
    "Europe/Moscow",
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Asia/Dubai",
    "Asia/Kolkata",
    "Asia/Singapore",
    "Asia/Tokyo",
    "Australia/Brisbane",
    "Australia/Sydney",
    "Pacific/Auckland",
];

/// A platform capability that enumerates every known timezone.
pub trait ZoneSource {
    /// Returns identifiers in the platform's own order.
    fn zones(&self) -> Result<Vec<String>, String>;
}

/// Enumerates the IANA database bundled with `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl ZoneSource for TzDatabase {
    fn zones(&self) -> Result<Vec<String>, String> {
        Ok(chrono_tz::TZ_VARIANTS
            .iter()
            .map(|tz| tz.name().to_string())
            .collect())
    }
}

/// Returns the selectable timezones.
///
/// Uses `source` when given and it yields at least one identifier;
/// otherwise returns [`FALLBACK_ZONES`]. Blank entries are skipped and
/// duplicates removed, keeping the first occurrence.
pub fn list_timezones(source: Option<&dyn ZoneSource>) -> Vec<TimezoneId> {
    let reported = match source.map(|s| s.zones()) {
        Some(Ok(zones)) => dedup(zones.iter().map(String::as_str)),
        Some(Err(e)) => {
            crate::log_warn!("Timezone enumeration failed, using fallback list: {e}");
            Vec::new()
        }
        None => {
            crate::log_debug!("No timezone source, using fallback list");
            Vec::new()
        }
    };

    if reported.is_empty() {
        return fallback();
    }
    reported
}

/// Returns the built-in fallback catalog.
pub fn fallback() -> Vec<TimezoneId> {
    dedup(FALLBACK_ZONES.iter().copied())
}

/// Picks the startup timezone from the catalog.
///
/// Returns `wanted` when the catalog contains it, else `UTC` when
/// present, else the first entry.
pub fn resolve_default(catalog: &[TimezoneId], wanted: &str) -> TimezoneId {
    if let Some(tz) = catalog.iter().find(|tz| tz.as_str() == wanted) {
        return tz.clone();
    }
    crate::log_warn!("Default timezone '{wanted}' is not in the catalog");
    catalog
        .iter()
        .find(|tz| tz.as_str() == UTC)
        .or_else(|| catalog.first())
        .cloned()
        .unwrap_or_else(|| TimezoneId::from(UTC))
}

fn dedup<'a>(zones: impl Iterator<Item = &'a str>) -> Vec<TimezoneId> {
    let mut seen = HashSet::new();
    zones
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .filter(|z| seen.insert(*z))
        .map(TimezoneId::from)
        .collect()
}
