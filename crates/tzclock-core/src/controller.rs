//! The selection state machine.
//!
//! There is exactly one piece of mutable state: the current timezone.
//! It is set before the first render and replaced only by
//! [`SelectionController::select`]. Every call renders synchronously,
//! so the presenter always reflects the most recent selection.

use crate::timezone::label_for;
use crate::{Action, Clock, DisplayStrings, FormatError, Formatter, Presenter, TimezoneId};

/// The controller's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub current: TimezoneId,
}

/// Owns the selection and drives the presenter.
pub struct SelectionController<F, C, P> {
    state: SelectionState,
    formatter: F,
    clock: C,
    presenter: P,
}

impl<F, C, P> SelectionController<F, C, P>
where
    F: Formatter,
    C: Clock,
    P: Presenter,
{
    /// Creates a controller with `initial` already selected.
    ///
    /// Nothing is rendered until [`start`](Self::start) is called.
    pub fn new(initial: TimezoneId, formatter: F, clock: C, presenter: P) -> Self {
        Self {
            state: SelectionState { current: initial },
            formatter,
            clock,
            presenter,
        }
    }

    /// Performs the first full render.
    pub fn start(&mut self) -> Result<DisplayStrings, FormatError> {
        crate::log_info!("Starting with timezone {}", self.state.current);
        self.render()
    }

    /// Makes `tz` current and re-renders label, highlight and time.
    ///
    /// Selecting the current timezone again renders the same output.
    pub fn select(&mut self, tz: TimezoneId) -> Result<DisplayStrings, FormatError> {
        crate::log_debug!("Selected {tz}");
        self.state.current = tz;
        self.render()
    }

    /// Re-renders only the time and date for the current timezone.
    pub fn refresh(&mut self) -> Result<DisplayStrings, FormatError> {
        let display = self
            .formatter
            .format(&self.state.current, self.clock.now())?;
        self.presenter.show_time(&display);
        Ok(display)
    }

    /// Applies an [`Action`].
    pub fn handle(&mut self, action: &Action) -> Result<DisplayStrings, FormatError> {
        match action {
            Action::Select(tz) => self.select(tz.clone()),
            Action::Refresh => self.refresh(),
        }
    }

    pub fn current(&self) -> &TimezoneId {
        &self.state.current
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn render(&mut self) -> Result<DisplayStrings, FormatError> {
        let current = &self.state.current;
        self.presenter.set_active(current);
        self.presenter.show_city(&label_for(current));
        self.refresh()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
