//! The selectable timezone buttons, independent of how they are drawn.

use crate::TimezoneId;
use crate::timezone::{label_for, stable_key_for};

/// One selectable timezone control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Timezone this control selects.
    pub id: TimezoneId,
    /// Machine-addressable key (see [`stable_key_for`]).
    pub key: String,
    /// Human label (see [`label_for`]).
    pub label: String,
    /// Whether this control matches the current selection.
    pub active: bool,
}

impl Control {
    pub fn new(id: TimezoneId) -> Self {
        Self {
            key: stable_key_for(&id),
            label: label_for(&id),
            id,
            active: false,
        }
    }
}

/// The full, ordered set of controls built from the catalog.
///
/// At most one control is active at a time; [`ControlSet::set_active`]
/// moves the marking.
#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    controls: Vec<Control>,
}

impl ControlSet {
    /// Builds one inactive control per catalog entry, in catalog order.
    pub fn from_catalog(catalog: &[TimezoneId]) -> Self {
        Self {
            controls: catalog.iter().cloned().map(Control::new).collect(),
        }
    }

    /// Marks the control for `id` active and clears every other one.
    ///
    /// Returns false (and leaves nothing active) if no control matches.
    pub fn set_active(&mut self, id: &TimezoneId) -> bool {
        let mut found = false;
        for control in &mut self.controls {
            control.active = control.id == *id;
            found |= control.active;
        }
        found
    }

    /// Iterates over the controls currently marked active.
    pub fn active(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(|c| c.active)
    }

    /// Index of the control for `id`.
    pub fn position(&self, id: &TimezoneId) -> Option<usize> {
        self.controls.iter().position(|c| c.id == *id)
    }

    pub fn get(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    pub fn find_by_key(&self, key: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Control> {
        self.controls.iter()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl<'a> IntoIterator for &'a ControlSet {
    type Item = &'a Control;
    type IntoIter = std::slice::Iter<'a, Control>;

    fn into_iter(self) -> Self::IntoIter {
        self.controls.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn controls_carry_label_key_and_id() {
        // Arrange / Act
        let control = Control::new("America/New_York".into());

        // Assert
        assert_eq!(control.label, "New York");
        assert_eq!(control.key, "america-new_york");
        assert_eq!(control.id.as_str(), "America/New_York");
        assert!(!control.active);
    }

    #[test]
    fn set_active_marks_exactly_one_control() {
        // Arrange
        let zones = catalog::fallback();
        let mut controls = ControlSet::from_catalog(&zones);

        for tz in &zones {
            // Act
            assert!(controls.set_active(tz));

            // Assert
            let active: Vec<&Control> = controls.active().collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, *tz);
        }
    }

    #[test]
    fn set_active_with_unknown_id_clears_everything() {
        let mut controls = ControlSet::from_catalog(&catalog::fallback());
        controls.set_active(&"UTC".into());

        assert!(!controls.set_active(&"Mars/Olympus".into()));
        assert_eq!(controls.active().count(), 0);
    }

    #[test]
    fn lookup_by_key_and_position() {
        // Arrange
        let controls = ControlSet::from_catalog(&catalog::fallback());

        // Act
        let brisbane = controls.find_by_key("australia-brisbane");
        let utc_index = controls.position(&"UTC".into());

        // Assert
        assert_eq!(brisbane.map(|c| c.label.as_str()), Some("Brisbane"));
        assert_eq!(utc_index, Some(0));
        assert_eq!(controls.get(0).map(|c| c.key.as_str()), Some("utc"));
        assert!(controls.get(controls.len()).is_none());
    }
}
