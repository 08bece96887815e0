use tzclock_core::config;

/// Runs the interactive clock in the foreground.
pub fn execute(timezone: Option<&str>) {
    let config = config::load();

    if let Err(e) = tzclock_term::run(&config, timezone) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
