//! Timezone identifiers and the display helpers derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An IANA-style timezone identifier (e.g. `"Australia/Brisbane"`).
///
/// Opaque to the rest of the crate: only the formatter interprets it.
/// Values normally come from the [`catalog`](crate::catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimezoneId(String);

impl TimezoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimezoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TimezoneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Returns a short human label for a timezone.
///
/// Takes the segment after the last `/` and turns underscores into
/// spaces: `"America/New_York"` becomes `"New York"`. Identifiers
/// without a separator (e.g. `"UTC"`) are returned unchanged.
pub fn label_for(tz: &TimezoneId) -> String {
    match tz.as_str().rsplit_once('/') {
        Some((_, city)) => city.replace('_', " "),
        None => tz.as_str().to_string(),
    }
}

/// Returns a lowercase, separator-free key for addressing a control.
///
/// Path separators and whitespace become hyphens, anything outside
/// `[A-Za-z0-9-_]` is dropped, and the result is lowercased:
/// `"Australia/Brisbane"` becomes `"australia-brisbane"`.
pub fn stable_key_for(tz: &TimezoneId) -> String {
    stable_key(tz.as_str())
}

/// Same as [`stable_key_for`] but over raw text (used to resolve typed input).
pub fn stable_key(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c == '/' || c.is_whitespace() {
                Some('-')
            } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                Some(c.to_ascii_lowercase())
            } else {
                None
            }
        })
        .collect()
}
