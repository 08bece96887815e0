use tzclock_core::catalog::{self, FALLBACK_ZONES};
use tzclock_core::{TzDatabase, ZoneSource, config};

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";
const FIXED: &str = "\x1b[36m[fixed]\x1b[0m";

pub fn execute() {
    super::banner::print_logo();
    println!();
    check_config_dir();
    check_config_file();
    check_tz_database();
    check_default_timezone();
    check_formats();
    println!();
}

fn check_config_dir() {
    match config::config_dir() {
        Some(dir) if dir.is_dir() => {
            println!("  {OK} Config directory exists ({})", dir.display());
        }
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                println!("  {FIXED} Created config directory ({})", dir.display());
            }
            Err(e) => {
                println!("  {FAIL} Config directory missing and could not create it: {e}");
            }
        },
        None => {
            println!("  {FAIL} Could not determine home directory");
        }
    }
}

fn check_config_file() {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return;
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (using defaults, run 'tzclock init')");
        return;
    }
    match config::try_load() {
        Ok(_) => println!("  {OK} config.toml is valid"),
        Err(e) => println!("  {FAIL} config.toml: {e}"),
    }
}

fn check_tz_database() {
    match TzDatabase.zones() {
        Ok(zones) if !zones.is_empty() => {
            println!("  {OK} Timezone database has {} zones", zones.len());
        }
        Ok(_) => println!(
            "  {WARN} Timezone database is empty (using {} built-in zones)",
            FALLBACK_ZONES.len()
        ),
        Err(e) => println!("  {WARN} Timezone database unavailable: {e}"),
    }
}

fn check_default_timezone() {
    let config = config::load();
    let wanted = &config.clock.default_timezone;
    let zones = catalog::list_timezones(config.zone_source());
    if zones.iter().any(|z| z.as_str() == wanted.as_str()) {
        println!("  {OK} Default timezone {wanted} is available");
    } else {
        let resolved = catalog::resolve_default(&zones, wanted);
        println!("  {WARN} Default timezone {wanted} is not listed (will start on {resolved})");
    }
}

fn check_formats() {
    let config = config::load();
    let formatter = config.formatter();
    match formatter.now(&catalog::UTC.into()) {
        Ok(display) => println!(
            "  {OK} Formats render as \"{}\" and \"{}\"",
            display.time, display.date
        ),
        Err(e) => println!("  {FAIL} Formats: {e}"),
    }
}
