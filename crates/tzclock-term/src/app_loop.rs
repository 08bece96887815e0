use std::io;
use std::sync::mpsc;

use tzclock_core::catalog;
use tzclock_core::{Config, ControlSet, SelectionController, SystemClock};

use crate::surface::TerminalSurface;

use super::AppResult;
use super::app_handlers;
use super::app_threads;
use super::app_types::{AppMsg, Flow};

/// The inner clock loop, separated so `run()` can log the outcome.
pub(super) fn app_loop(config: &Config, timezone: Option<&str>) -> AppResult<()> {
    let zones = catalog::list_timezones(config.zone_source());
    let wanted = timezone.unwrap_or(&config.clock.default_timezone);
    let initial = catalog::resolve_default(&zones, wanted);
    tzclock_core::log_info!("Catalog has {} timezones", zones.len());

    let surface = TerminalSurface::new(
        io::stdout(),
        ControlSet::from_catalog(&zones),
        config.display.page_size,
        config.display.color,
    );
    let mut controller =
        SelectionController::new(initial, config.formatter(), SystemClock, surface);

    if let Err(e) = controller.start() {
        app_handlers::report(&mut controller, &e);
    }
    controller.presenter_mut().draw()?;

    let (tx, rx) = mpsc::channel::<AppMsg>();
    let _input = app_threads::spawn_input_reader(io::BufReader::new(io::stdin()), tx.clone());
    // The tick thread starts only once the first frame is on screen.
    let _tick = app_threads::spawn_tick_thread(tx);

    while let Ok(msg) = rx.recv() {
        match app_handlers::handle_message(msg, &mut controller) {
            Flow::Continue => controller.presenter_mut().draw()?,
            Flow::Exit => break,
        }
    }

    controller.presenter_mut().finish()?;
    Ok(())
}
