mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::format::{self, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::log::LogConfig;
use crate::{ChronoFormatter, TzDatabase, ZoneSource};

pub use loader::{config_dir, config_path, load, try_load};

/// Default startup timezone.
pub const DEFAULT_TIMEZONE: &str = "Australia/Brisbane";

/// Top-level configuration for tzclock.
///
/// Loaded from `~/.config/tzclock/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What the clock shows and how.
    pub clock: ClockConfig,
    /// Where the list of selectable timezones comes from.
    pub catalog: CatalogConfig,
    /// Terminal layout settings.
    pub display: DisplayConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Clock settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Timezone selected at startup (e.g. "Australia/Brisbane").
    pub default_timezone: String,
    /// strftime pattern for the time line.
    pub time_format: String,
    /// strftime pattern for the date line.
    pub date_format: String,
}

/// Catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// List every zone in the IANA database. When `false`, only the
    /// short built-in list is offered.
    pub use_tz_database: bool,
}

/// Terminal display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of timezone buttons shown per page.
    pub page_size: usize,
    /// Whether to use ANSI colors.
    pub color: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.into(),
            time_format: DEFAULT_TIME_FORMAT.into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            use_tz_database: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            color: true,
        }
    }
}

impl Config {
    /// Resets invalid values to safe ones.
    ///
    /// Format patterns chrono cannot render go back to the defaults,
    /// an empty default timezone becomes the built-in default, and
    /// `page_size` is clamped to 1..=100.
    pub fn validate(&mut self) {
        if !format::is_valid_pattern(&self.clock.time_format) {
            crate::log_warn!("Invalid time_format '{}'", self.clock.time_format);
            self.clock.time_format = DEFAULT_TIME_FORMAT.into();
        }
        if !format::is_valid_pattern(&self.clock.date_format) {
            crate::log_warn!("Invalid date_format '{}'", self.clock.date_format);
            self.clock.date_format = DEFAULT_DATE_FORMAT.into();
        }
        let tz = self.clock.default_timezone.trim();
        self.clock.default_timezone = if tz.is_empty() {
            DEFAULT_TIMEZONE.into()
        } else {
            tz.to_string()
        };
        self.display.page_size = self.display.page_size.clamp(1, 100);
    }

    /// Builds the formatter described by `[clock]`.
    pub fn formatter(&self) -> ChronoFormatter {
        ChronoFormatter::new(&self.clock.time_format, &self.clock.date_format)
    }

    /// Returns the zone source described by `[catalog]`, if any.
    pub fn zone_source(&self) -> Option<&'static dyn ZoneSource> {
        self.catalog
            .use_tz_database
            .then_some(&TzDatabase as &'static dyn ZoneSource)
    }
}
