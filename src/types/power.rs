// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state and IR buttons.
//!
//! The remote service has no power field. A settings record carries the last
//! pressed `button`, and `"power-off"` there is the only way the device says
//! it is off. Powering on is done by sending an operation mode.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Power state of the air conditioner.
///
/// # Examples
///
/// ```
/// use remo_aircon::types::PowerState;
///
/// assert_eq!(PowerState::from_button("power-off"), PowerState::Off);
/// assert_eq!(PowerState::from_button(""), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerState {
    /// Power is off.
    Off,
    /// Power is on.
    #[default]
    On,
}

impl PowerState {
    /// Derives the power state from the `button` field of a settings record.
    #[must_use]
    pub fn from_button(button: &str) -> Self {
        if button == Button::PowerOff.as_str() {
            Self::Off
        } else {
            Self::On
        }
    }

    /// Returns `true` if the device is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the `button` value that represents this state on the wire.
    #[must_use]
    pub const fn as_button(&self) -> &'static str {
        match self {
            Self::Off => Button::PowerOff.as_str(),
            Self::On => "",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::On => f.write_str("on"),
        }
    }
}

impl Serialize for PowerState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_button())
    }
}

impl<'de> Deserialize<'de> for PowerState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let button = Option::<String>::deserialize(deserializer)?;
        Ok(button.map_or(Self::On, |b| Self::from_button(&b)))
    }
}

/// Stateless IR buttons understood by the settings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Turn the unit off.
    PowerOff,
    /// Turn the unit on with its last settings.
    PowerOn,
    /// Toggle the louver swing.
    AirDirSwing,
    /// Step the louver angle.
    AirDirTilt,
}

impl Button {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PowerOff => "power-off",
            Self::PowerOn => "power-on",
            Self::AirDirSwing => "airdir-swing",
            Self::AirDirTilt => "airdir-tilt",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_from_button() {
        assert_eq!(PowerState::from_button("power-off"), PowerState::Off);
        assert_eq!(PowerState::from_button("power-on"), PowerState::On);
        assert_eq!(PowerState::from_button("airdir-swing"), PowerState::On);
        assert_eq!(PowerState::from_button(""), PowerState::On);
    }

    #[test]
    fn power_deserialize_null() {
        let state: PowerState = serde_json::from_str("null").unwrap();
        assert_eq!(state, PowerState::On);
    }

    #[test]
    fn power_serialize() {
        assert_eq!(
            serde_json::to_string(&PowerState::Off).unwrap(),
            "\"power-off\""
        );
        assert_eq!(serde_json::to_string(&PowerState::On).unwrap(), "\"\"");
    }

    #[test]
    fn button_wire_names() {
        assert_eq!(Button::AirDirSwing.to_string(), "airdir-swing");
        assert_eq!(Button::PowerOff.as_str(), "power-off");
    }
}
