/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `tzclock init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# tzclock configuration
# Location: ~/.config/tzclock/config.toml

[clock]
# Timezone selected at startup. Must be an IANA name such as
# "Europe/London" or "America/New_York". Falls back to UTC if unknown.
default_timezone = "Australia/Brisbane"
# strftime pattern for the time line (24-hour by default).
time_format = "%H:%M:%S"
# strftime pattern for the date line (e.g. "Oct 19, 2026").
date_format = "%b %d, %Y"

[catalog]
# List every zone from the IANA database. Set to false to only offer
# a short built-in list of common zones.
use_tz_database = true

[display]
# Number of timezone buttons per page (1 to 100).
page_size = 12
# Use ANSI colors in the terminal.
color = true

[logging]
# Enable file logging to ~/.config/tzclock/logs/tzclock.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
