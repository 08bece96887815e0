/// Interactive clock: event loop and its helper threads.
pub mod app;

/// Parsing of typed commands.
pub mod input;

/// Terminal presentation surface.
pub mod surface;

pub use app::{AppResult, run};
pub use surface::TerminalSurface;
