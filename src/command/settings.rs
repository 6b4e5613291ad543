// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Partial settings update.

use std::fmt;

use crate::error::ValueError;
use crate::types::{AirVolume, Button, OperationMode, format_temperature};

/// A partial settings update for one air conditioner.
///
/// Only the fields that are set are sent, so every command carries the
/// minimal payload for the change it makes.
///
/// # Examples
///
/// ```
/// use remo_aircon::command::SettingsUpdate;
/// use remo_aircon::types::{AirVolume, OperationMode};
///
/// let update = SettingsUpdate::mode(OperationMode::Cool)
///     .with_temperature(26.0)
///     .unwrap();
/// assert_eq!(
///     update.form_params(),
///     vec![("operation_mode", "cool".to_string()), ("temperature", "26".to_string())]
/// );
///
/// let update = SettingsUpdate::volume(AirVolume::Auto);
/// assert_eq!(update.form_params(), vec![("air_volume", "auto".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    operation_mode: Option<OperationMode>,
    temperature: Option<String>,
    air_volume: Option<AirVolume>,
    air_direction: Option<String>,
    button: Option<Button>,
}

impl SettingsUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an update that switches the operation mode.
    ///
    /// The service treats this as "power on in this mode".
    #[must_use]
    pub fn mode(mode: OperationMode) -> Self {
        Self::new().with_mode(mode)
    }

    /// Creates an update that changes the target temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperature` for NaN or infinite values.
    pub fn temperature(value: f64) -> Result<Self, ValueError> {
        Self::new().with_temperature(value)
    }

    /// Creates an update that changes the fan speed.
    #[must_use]
    pub fn volume(volume: AirVolume) -> Self {
        Self::new().with_volume(volume)
    }

    /// Creates an update that presses a button.
    #[must_use]
    pub fn button(button: Button) -> Self {
        Self {
            button: Some(button),
            ..Self::default()
        }
    }

    /// Creates an update that turns the unit off.
    #[must_use]
    pub fn power_off() -> Self {
        Self::button(Button::PowerOff)
    }

    /// Creates an update that toggles the louver swing.
    #[must_use]
    pub fn toggle_swing() -> Self {
        Self::button(Button::AirDirSwing)
    }

    /// Sets the operation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: OperationMode) -> Self {
        self.operation_mode = Some(mode);
        self
    }

    /// Sets the target temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperature` for NaN or infinite values.
    pub fn with_temperature(mut self, value: f64) -> Result<Self, ValueError> {
        self.temperature = Some(format_temperature(value)?);
        Ok(self)
    }

    /// Sets the fan speed.
    #[must_use]
    pub fn with_volume(mut self, volume: AirVolume) -> Self {
        self.air_volume = Some(volume);
        self
    }

    /// Sets the louver direction.
    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.air_direction = Some(direction.into());
        self
    }

    /// Returns the requested operation mode.
    #[must_use]
    pub fn operation_mode(&self) -> Option<OperationMode> {
        self.operation_mode
    }

    /// Returns the requested temperature as it will be sent.
    #[must_use]
    pub fn temperature_value(&self) -> Option<&str> {
        self.temperature.as_deref()
    }

    /// Returns the requested fan speed.
    #[must_use]
    pub fn air_volume(&self) -> Option<AirVolume> {
        self.air_volume
    }

    /// Returns the pressed button.
    #[must_use]
    pub fn pressed_button(&self) -> Option<Button> {
        self.button
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operation_mode.is_none()
            && self.temperature.is_none()
            && self.air_volume.is_none()
            && self.air_direction.is_none()
            && self.button.is_none()
    }

    /// Returns the form fields of the settings endpoint, in a stable order.
    #[must_use]
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        if let Some(mode) = self.operation_mode {
            params.push(("operation_mode", mode.as_str().to_string()));
        }
        if let Some(temperature) = &self.temperature {
            params.push(("temperature", temperature.clone()));
        }
        if let Some(volume) = self.air_volume {
            params.push(("air_volume", volume.to_string()));
        }
        if let Some(direction) = &self.air_direction {
            params.push(("air_direction", direction.clone()));
        }
        if let Some(button) = self.button {
            params.push(("button", button.as_str().to_string()));
        }
        params
    }
}

impl fmt::Display for SettingsUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.form_params() {
            if !first {
                f.write_str("&")?;
            }
            write!(f, "{key}={}", urlencoding::encode(&value))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update() {
        let update = SettingsUpdate::new();
        assert!(update.is_empty());
        assert!(update.form_params().is_empty());
        assert_eq!(update.to_string(), "");
    }

    #[test]
    fn power_off_payload() {
        let update = SettingsUpdate::power_off();
        assert_eq!(update.form_params(), vec![("button", "power-off".to_string())]);
        assert_eq!(update.pressed_button(), Some(Button::PowerOff));
    }

    #[test]
    fn swing_payload() {
        assert_eq!(SettingsUpdate::toggle_swing().to_string(), "button=airdir-swing");
    }

    #[test]
    fn fractional_temperature() {
        let update = SettingsUpdate::temperature(26.5).unwrap();
        assert_eq!(update.temperature_value(), Some("26.5"));
    }

    #[test]
    fn invalid_temperature() {
        assert!(SettingsUpdate::temperature(f64::INFINITY).is_err());
    }

    #[test]
    fn full_payload_order() {
        let update = SettingsUpdate::mode(OperationMode::Warm)
            .with_temperature(22.0)
            .unwrap()
            .with_volume(AirVolume::Step(2))
            .with_direction("1");
        assert_eq!(
            update.to_string(),
            "operation_mode=warm&temperature=22&air_volume=2&air_direction=1"
        );
    }
}
