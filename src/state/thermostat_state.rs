// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat panel state.

use crate::error::ValueError;
use crate::response::DataResponse;
use crate::types::{
    DisplayColor, THRESHOLD_COUNT, ThresholdSet, format_celsius, format_threshold, parse_lenient,
};

use super::StateChange;

/// Rule deciding when a poll may overwrite the threshold form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPolicy {
    /// Populate the form only while the first field is empty.
    ///
    /// Once the form has been filled, polls never touch it again unless the
    /// user clears field 0.
    #[default]
    FirstLoad,

    /// Track edits per field.
    ///
    /// A field is marked as locally modified by user input and is skipped by
    /// polls until a save succeeds. Unmodified fields follow the device.
    LocalEdits,
}

/// Tracked state of the thermostat panel.
///
/// # Examples
///
/// ```
/// use espanel_lib::response::DataResponse;
/// use espanel_lib::state::{GuardPolicy, ThermostatState};
/// use espanel_lib::types::ThresholdSet;
///
/// let mut state = ThermostatState::new(GuardPolicy::FirstLoad);
/// state.apply_reading(&DataResponse::new(21.0, ThresholdSet::FACTORY));
/// assert_eq!(state.field(2).unwrap(), "25.0");
///
/// // Once filled, the form is left alone
/// state.edit_field(2, "26.5").unwrap();
/// state.apply_reading(&DataResponse::new(21.0, ThresholdSet::FACTORY));
/// assert_eq!(state.field(2).unwrap(), "26.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThermostatState {
    policy: GuardPolicy,
    temperature: Option<f64>,
    device_limits: Option<ThresholdSet>,
    fields: [String; THRESHOLD_COUNT],
    modified: [bool; THRESHOLD_COUNT],
}

impl ThermostatState {
    /// Creates an empty state: no reading yet and an empty form.
    #[must_use]
    pub fn new(policy: GuardPolicy) -> Self {
        Self {
            policy,
            temperature: None,
            device_limits: None,
            fields: Default::default(),
            modified: [false; THRESHOLD_COUNT],
        }
    }

    /// Returns the guard policy.
    #[must_use]
    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    /// Returns the last temperature reading.
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Returns the thresholds last reported by the device.
    #[must_use]
    pub fn device_limits(&self) -> Option<&ThresholdSet> {
        self.device_limits.as_ref()
    }

    /// Returns the display color for the last reading.
    #[must_use]
    pub fn display_color(&self) -> Option<DisplayColor> {
        let temp = self.temperature?;
        let limits = self.device_limits?;
        Some(DisplayColor::for_temperature(&limits, temp))
    }

    /// Returns the text of a threshold field.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ThresholdIndex` if `index` is not in 0-4.
    pub fn field(&self, index: usize) -> Result<&str, ValueError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(ValueError::ThresholdIndex(index))
    }

    /// Returns the text of all threshold fields.
    #[must_use]
    pub fn fields(&self) -> &[String; THRESHOLD_COUNT] {
        &self.fields
    }

    /// Records user input into a threshold field.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ThresholdIndex` if `index` is not in 0-4.
    pub fn edit_field(&mut self, index: usize, text: impl Into<String>) -> Result<(), ValueError> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or(ValueError::ThresholdIndex(index))?;
        *field = text.into();
        self.modified[index] = true;
        Ok(())
    }

    /// Returns `true` if the field holds unsaved user input.
    #[must_use]
    pub fn is_modified(&self, index: usize) -> bool {
        self.modified.get(index).copied().unwrap_or(false)
    }

    /// Returns `true` if the next poll would leave some threshold fields
    /// untouched.
    #[must_use]
    pub fn guard_active(&self) -> bool {
        match self.policy {
            GuardPolicy::FirstLoad => !self.fields[0].is_empty(),
            GuardPolicy::LocalEdits => self.modified.iter().any(|m| *m),
        }
    }

    fn may_adopt(&self, index: usize) -> bool {
        match self.policy {
            GuardPolicy::FirstLoad => self.fields[0].is_empty(),
            GuardPolicy::LocalEdits => !self.modified[index],
        }
    }

    /// Applies a device reading.
    ///
    /// The temperature is always updated. Threshold fields are populated
    /// from the reading only where the guard policy allows it.
    pub fn apply_reading(&mut self, reading: &DataResponse) -> Vec<StateChange> {
        let mut changes = Vec::with_capacity(1 + THRESHOLD_COUNT);

        self.temperature = Some(reading.temperature());
        self.device_limits = Some(*reading.limits());
        changes.push(StateChange::Temperature {
            text: format_celsius(reading.temperature()),
            color: reading.display_color(),
        });

        let adoptable: Vec<usize> = (0..THRESHOLD_COUNT)
            .filter(|&i| self.may_adopt(i))
            .collect();
        for index in adoptable {
            let text = format_threshold(reading.limits().values()[index]);
            self.fields[index].clone_from(&text);
            self.modified[index] = false;
            changes.push(StateChange::ThresholdField { index, text });
        }

        changes
    }

    /// Parses the form into the values a save sends.
    ///
    /// Unparsable fields become `NaN`.
    #[must_use]
    pub fn form_values(&self) -> [f64; THRESHOLD_COUNT] {
        std::array::from_fn(|i| parse_lenient(&self.fields[i]))
    }

    /// Clears local-edit marks after a successful save.
    ///
    /// `sent` holds the field texts the save was built from. A field edited
    /// again while the request was in flight keeps its mark.
    pub fn mark_saved(&mut self, sent: &[String; THRESHOLD_COUNT]) {
        for ((modified, field), sent) in self.modified.iter_mut().zip(&self.fields).zip(sent) {
            if field == sent {
                *modified = false;
            }
        }
    }
}

impl Default for ThermostatState {
    fn default() -> Self {
        Self::new(GuardPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temp: f64, limits: [f64; 5]) -> DataResponse {
        DataResponse::new(temp, ThresholdSet::new(limits))
    }

    #[test]
    fn empty_form_is_populated_with_one_decimal() {
        let mut state = ThermostatState::new(GuardPolicy::FirstLoad);
        let changes = state.apply_reading(&reading(21.0, [25.0, 26.0, 27.0, 28.0, 29.0]));

        assert_eq!(state.field(0).unwrap(), "25.0");
        assert_eq!(state.field(4).unwrap(), "29.0");
        assert_eq!(changes.len(), 6);
    }

    #[test]
    fn first_load_guard_keeps_filled_form() {
        let mut state = ThermostatState::new(GuardPolicy::FirstLoad);
        state.edit_field(0, "12").unwrap();
        state.edit_field(3, "").unwrap();

        let changes = state.apply_reading(&reading(21.0, [1.0, 2.0, 3.0, 4.0, 5.0]));

        assert_eq!(state.field(0).unwrap(), "12");
        assert_eq!(state.field(1).unwrap(), "");
        assert_eq!(state.field(3).unwrap(), "");
        assert!(state.guard_active());
        assert!(
            changes
                .iter()
                .all(|c| matches!(c, StateChange::Temperature { .. }))
        );
    }

    #[test]
    fn first_load_guard_reopens_when_first_field_cleared() {
        let mut state = ThermostatState::new(GuardPolicy::FirstLoad);
        state.apply_reading(&reading(21.0, [1.0, 2.0, 3.0, 4.0, 5.0]));
        state.edit_field(0, "").unwrap();
        assert!(!state.guard_active());

        state.apply_reading(&reading(21.0, [6.0, 7.0, 8.0, 9.0, 10.0]));
        assert_eq!(state.field(0).unwrap(), "6.0");
        assert_eq!(state.field(4).unwrap(), "10.0");
    }

    #[test]
    fn local_edits_guard_protects_only_modified_fields() {
        let mut state = ThermostatState::new(GuardPolicy::LocalEdits);
        state.apply_reading(&reading(21.0, [1.0, 2.0, 3.0, 4.0, 5.0]));
        state.edit_field(2, "33.3").unwrap();

        state.apply_reading(&reading(21.0, [6.0, 7.0, 8.0, 9.0, 10.0]));

        assert_eq!(state.field(0).unwrap(), "6.0");
        assert_eq!(state.field(2).unwrap(), "33.3");
        assert!(state.is_modified(2));
        assert!(state.guard_active());
    }

    #[test]
    fn local_edits_cleared_by_save() {
        let mut state = ThermostatState::new(GuardPolicy::LocalEdits);
        state.edit_field(1, "22").unwrap();
        let sent = state.fields().clone();
        state.mark_saved(&sent);
        assert!(!state.is_modified(1));

        state.apply_reading(&reading(21.0, [1.0, 22.0, 3.0, 4.0, 5.0]));
        assert_eq!(state.field(1).unwrap(), "22.0");
    }

    #[test]
    fn edit_after_snapshot_survives_save() {
        let mut state = ThermostatState::new(GuardPolicy::LocalEdits);
        state.edit_field(0, "9").unwrap();
        let sent = state.fields().clone();
        state.edit_field(3, "77").unwrap();
        state.mark_saved(&sent);

        assert!(!state.is_modified(0));
        assert!(state.is_modified(3));

        state.apply_reading(&reading(21.0, [9.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(state.field(0).unwrap(), "9.0");
        assert_eq!(state.field(3).unwrap(), "77");
    }

    #[test]
    fn temperature_always_updates() {
        let mut state = ThermostatState::new(GuardPolicy::FirstLoad);
        state.edit_field(0, "1").unwrap();
        state.apply_reading(&reading(35.0, [10.0, 20.0, 30.0, 40.0, 50.0]));

        assert_eq!(state.temperature(), Some(35.0));
        assert_eq!(
            state.display_color(),
            Some(DisplayColor::Led(crate::types::LedColor::Orange))
        );
    }

    #[test]
    fn form_values_parse_leniently() {
        let mut state = ThermostatState::default();
        state.edit_field(0, "20").unwrap();
        state.edit_field(1, " 21.5").unwrap();
        state.edit_field(2, "abc").unwrap();
        state.edit_field(3, "").unwrap();
        state.edit_field(4, "30°").unwrap();

        let values = state.form_values();
        assert!((values[0] - 20.0).abs() < f64::EPSILON);
        assert!((values[1] - 21.5).abs() < f64::EPSILON);
        assert!(values[2].is_nan());
        assert!(values[3].is_nan());
        assert!((values[4] - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn field_index_out_of_range() {
        let mut state = ThermostatState::default();
        assert_eq!(state.field(5), Err(ValueError::ThresholdIndex(5)));
        assert_eq!(
            state.edit_field(9, "1"),
            Err(ValueError::ThresholdIndex(9))
        );
        assert!(!state.is_modified(9));
    }
}
