use crate::TimezoneId;

/// An action the selection controller reacts to.
///
/// Activations of a timezone control become `Select`; the periodic
/// timer becomes `Refresh`. Actions are distinct from raw front-end
/// input, which each front end translates into these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Make the given timezone current and re-render everything.
    Select(TimezoneId),
    /// Re-render the time and date for the current timezone only.
    Refresh,
}
