pub mod action;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod control;
pub mod controller;
pub mod format;
pub mod log;
pub mod presenter;
pub mod timezone;

pub use action::Action;
pub use catalog::{TzDatabase, ZoneSource};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use control::{Control, ControlSet};
pub use controller::{SelectionController, SelectionState};
pub use format::{ChronoFormatter, DisplayStrings, FormatError, Formatter};
pub use presenter::Presenter;
pub use timezone::TimezoneId;
