use crate::{DisplayStrings, TimezoneId};

/// The presentation surface the selection controller writes to.
///
/// Each front end (e.g. `tzclock-term`) provides its own
/// implementation. Methods only update what is shown; when to
/// actually draw is up to the front end.
pub trait Presenter {
    /// Writes the "current city" slot.
    fn show_city(&mut self, label: &str);

    /// Marks the control for `tz` active and every other control inactive.
    fn set_active(&mut self, tz: &TimezoneId);

    /// Writes the time and date slots.
    fn show_time(&mut self, display: &DisplayStrings);
}
