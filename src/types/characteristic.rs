// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerated characteristic values of a heater/cooler service.
//!
//! The host exchanges these as small integers. Each type converts from the raw
//! integer with `TryFrom<u8>` and back with `as_u8`.

use std::fmt;

use crate::error::ValueError;

fn out_of_range(max: u8, actual: u8) -> ValueError {
    ValueError::OutOfRange {
        min: 0,
        max: u16::from(max),
        actual: u16::from(actual),
    }
}

/// Which characteristic a value or log line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// Power.
    Active,
    /// What the unit is doing right now (read-only).
    CurrentHeaterCoolerState,
    /// Requested operating mode.
    TargetHeaterCoolerState,
    /// Room temperature from the sensor (read-only).
    CurrentTemperature,
    /// Cooling set point.
    CoolingThresholdTemperature,
    /// Heating set point.
    HeatingThresholdTemperature,
    /// Fan speed percentage.
    RotationSpeed,
    /// Louver swing.
    SwingMode,
    /// Display unit of temperatures.
    TemperatureDisplayUnits,
}

impl Characteristic {
    /// Returns the characteristic name as the host spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::CurrentHeaterCoolerState => "CurrentHeaterCoolerState",
            Self::TargetHeaterCoolerState => "TargetHeaterCoolerState",
            Self::CurrentTemperature => "CurrentTemperature",
            Self::CoolingThresholdTemperature => "CoolingThresholdTemperature",
            Self::HeatingThresholdTemperature => "HeatingThresholdTemperature",
            Self::RotationSpeed => "RotationSpeed",
            Self::SwingMode => "SwingMode",
            Self::TemperatureDisplayUnits => "TemperatureDisplayUnits",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Power characteristic.
///
/// # Examples
///
/// ```
/// use remo_aircon::types::Active;
///
/// assert_eq!(Active::try_from(1).unwrap(), Active::Active);
/// assert_eq!(Active::Inactive.as_u8(), 0);
/// assert!(Active::try_from(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Active {
    /// Off.
    Inactive,
    /// On.
    Active,
}

impl Active {
    /// Returns the raw characteristic value.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }
}

impl TryFrom<u8> for Active {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Inactive),
            1 => Ok(Self::Active),
            _ => Err(out_of_range(1, value)),
        }
    }
}

/// What the unit is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentHeaterCoolerState {
    /// Off, or in a mode the host cannot represent.
    Inactive,
    /// On but neither heating nor cooling.
    Idle,
    /// Heating.
    Heating,
    /// Cooling.
    Cooling,
}

impl CurrentHeaterCoolerState {
    /// Returns the raw characteristic value.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Idle => 1,
            Self::Heating => 2,
            Self::Cooling => 3,
        }
    }
}

impl TryFrom<u8> for CurrentHeaterCoolerState {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Inactive),
            1 => Ok(Self::Idle),
            2 => Ok(Self::Heating),
            3 => Ok(Self::Cooling),
            _ => Err(out_of_range(3, value)),
        }
    }
}

/// Requested operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetHeaterCoolerState {
    /// Automatic heat/cool.
    Auto,
    /// Heat.
    Heat,
    /// Cool.
    Cool,
}

impl TargetHeaterCoolerState {
    /// Returns the raw characteristic value.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Heat => 1,
            Self::Cool => 2,
        }
    }
}

impl TryFrom<u8> for TargetHeaterCoolerState {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            _ => Err(out_of_range(2, value)),
        }
    }
}

/// Louver swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwingMode {
    /// Louvers fixed.
    #[default]
    Disabled,
    /// Louvers swinging.
    Enabled,
}

impl SwingMode {
    /// Returns the raw characteristic value.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }

    /// Returns `true` when swinging.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for SwingMode {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::Disabled }
    }
}

impl TryFrom<u8> for SwingMode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            _ => Err(out_of_range(1, value)),
        }
    }
}

/// Unit the host should display temperatures in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureDisplayUnits {
    /// Celsius.
    Celsius,
    /// Fahrenheit.
    Fahrenheit,
}

impl TemperatureDisplayUnits {
    /// Returns the raw characteristic value.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Celsius => 0,
            Self::Fahrenheit => 1,
        }
    }
}

impl TryFrom<u8> for TemperatureDisplayUnits {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Celsius),
            1 => Ok(Self::Fahrenheit),
            _ => Err(out_of_range(1, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_round_trip() {
        for raw in 0..=1 {
            assert_eq!(Active::try_from(raw).unwrap().as_u8(), raw);
        }
    }

    #[test]
    fn current_state_values() {
        assert_eq!(CurrentHeaterCoolerState::Inactive.as_u8(), 0);
        assert_eq!(CurrentHeaterCoolerState::Heating.as_u8(), 2);
        assert_eq!(CurrentHeaterCoolerState::Cooling.as_u8(), 3);
        assert!(CurrentHeaterCoolerState::try_from(4).is_err());
    }

    #[test]
    fn target_state_values() {
        assert_eq!(
            TargetHeaterCoolerState::try_from(1).unwrap(),
            TargetHeaterCoolerState::Heat
        );
        assert_eq!(TargetHeaterCoolerState::Cool.as_u8(), 2);
        assert_eq!(
            TargetHeaterCoolerState::try_from(3),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn swing_from_bool() {
        assert_eq!(SwingMode::from(true), SwingMode::Enabled);
        assert_eq!(SwingMode::from(false).as_u8(), 0);
    }

    #[test]
    fn characteristic_names() {
        assert_eq!(
            Characteristic::CoolingThresholdTemperature.to_string(),
            "CoolingThresholdTemperature"
        );
    }
}
