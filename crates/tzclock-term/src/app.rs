use tzclock_core::Config;

#[path = "app_handlers.rs"]
mod app_handlers;
#[path = "app_loop.rs"]
mod app_loop;
#[path = "app_threads.rs"]
mod app_threads;
#[path = "app_types.rs"]
mod app_types;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// A boxed error type for the interactive clock.
pub type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Runs the interactive clock until the user quits or stdin closes.
///
/// `timezone` overrides the configured startup timezone. A tick thread
/// and a stdin reader feed one channel; the calling thread owns the
/// selection controller and handles every message in order.
pub fn run(config: &Config, timezone: Option<&str>) -> AppResult<()> {
    tzclock_core::log::init(&config.logging);
    tzclock_core::log_info!("tzclock started (PID: {})", std::process::id());
    tzclock_core::log_info!(
        "Config: default_timezone={}, time_format={}, date_format={}, tz_database={}",
        config.clock.default_timezone,
        config.clock.time_format,
        config.clock.date_format,
        config.catalog.use_tz_database
    );

    let result = app_loop::app_loop(config, timezone);

    if let Err(e) = &result {
        tzclock_core::log_error!("tzclock stopped with error: {e}");
    } else {
        tzclock_core::log_info!("tzclock stopped");
    }
    result
}
