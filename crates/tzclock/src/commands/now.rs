use tzclock_core::timezone::label_for;
use tzclock_core::{TimezoneId, config};

/// Prints the city, time, and date for one timezone and exits.
pub fn execute(timezone: Option<&str>) {
    let config = config::load();
    let tz = TimezoneId::from(timezone.unwrap_or(&config.clock.default_timezone));

    match config.formatter().now(&tz) {
        Ok(display) => {
            println!("{}", label_for(&tz));
            println!("{}", display.time);
            println!("{}", display.date);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
