use std::io::Write;

use tzclock_core::{Action, Clock, FormatError, Formatter, SelectionController};

use crate::input::{self, InputCommand};
use crate::surface::TerminalSurface;

use super::app_types::{AppMsg, Flow};

type Controller<F, C, W> = SelectionController<F, C, TerminalSurface<W>>;

/// Handles one message from the channel.
pub(super) fn handle_message<F, C, W>(msg: AppMsg, controller: &mut Controller<F, C, W>) -> Flow
where
    F: Formatter,
    C: Clock,
    W: Write,
{
    match msg {
        AppMsg::Tick => {
            apply(Action::Refresh, controller);
            Flow::Continue
        }
        AppMsg::Input(line) => handle_input(&line, controller),
        AppMsg::InputClosed => {
            tzclock_core::log_info!("Input closed");
            Flow::Exit
        }
    }
}

fn handle_input<F, C, W>(line: &str, controller: &mut Controller<F, C, W>) -> Flow
where
    F: Formatter,
    C: Clock,
    W: Write,
{
    let command = input::parse(line);
    let surface = controller.presenter_mut();
    match command {
        InputCommand::Quit => return Flow::Exit,
        InputCommand::NextPage => surface.next_page(),
        InputCommand::PrevPage => surface.prev_page(),
        InputCommand::Redraw => surface.invalidate(),
        InputCommand::Index(_) | InputCommand::Key(_) => {
            let target = input::resolve(surface.controls(), &command).map(|c| c.id.clone());
            match target {
                Some(tz) => {
                    surface.set_status("");
                    apply(Action::Select(tz), controller);
                }
                None => surface.set_status(format!("No timezone matches '{}'", line.trim())),
            }
        }
    }
    Flow::Continue
}

/// Applies an action, reporting format failures without stopping the loop.
fn apply<F, C, W>(action: Action, controller: &mut Controller<F, C, W>)
where
    F: Formatter,
    C: Clock,
    W: Write,
{
    if let Err(e) = controller.handle(&action) {
        report(controller, &e);
    }
}

/// Logs a render failure and shows it on the status line.
pub(super) fn report<F, C, W>(controller: &mut Controller<F, C, W>, error: &FormatError)
where
    F: Formatter,
    C: Clock,
    W: Write,
{
    tzclock_core::log_error!("Render failed for {}: {error}", controller.current());
    controller
        .presenter_mut()
        .set_status(format!("Error: {error}"));
}
