// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion between characteristic values and device settings.
//!
//! Everything here is pure: functions take cached settings (and the locally
//! remembered values where needed) and return either a characteristic value
//! or the minimal [`SettingsUpdate`] that realizes a requested value.
//! `None` in place of an update means the request is already satisfied.
//!
//! | Characteristic             | Device side                          |
//! |----------------------------|--------------------------------------|
//! | `Active`                   | `button` (power-off) / `mode`        |
//! | `CurrentHeaterCoolerState` | power + `mode`                       |
//! | `TargetHeaterCoolerState`  | `mode` (+ remembered threshold)      |
//! | thresholds                 | `temp` while in the matching mode    |
//! | `RotationSpeed`            | `vol` step or `auto`                 |
//! | `TemperatureDisplayUnits`  | `temp_unit`                          |

mod threshold;
mod volume;

pub use threshold::{seed_threshold, threshold_update};
pub use volume::{percentage_to_step, speed_to_volume, step_to_percentage, volume_to_speed};

use crate::command::SettingsUpdate;
use crate::error::ValueError;
use crate::response::AirconSettings;
use crate::state::{ThresholdKind, ThresholdMemory};
use crate::types::{
    Active, CurrentHeaterCoolerState, OperationMode, TargetHeaterCoolerState,
    TemperatureDisplayUnits, TemperatureUnit,
};

/// Reports the power state as `Active`.
#[must_use]
pub fn active(settings: &AirconSettings) -> Active {
    if settings.is_on() {
        Active::Active
    } else {
        Active::Inactive
    }
}

/// Reports what the unit is currently doing.
///
/// Modes the host cannot represent (`dry`, `blow`, `auto`) read as inactive.
#[must_use]
pub fn current_state(settings: &AirconSettings) -> CurrentHeaterCoolerState {
    if !settings.is_on() {
        return CurrentHeaterCoolerState::Inactive;
    }
    match settings.mode {
        OperationMode::Cool => CurrentHeaterCoolerState::Cooling,
        OperationMode::Warm => CurrentHeaterCoolerState::Heating,
        OperationMode::Auto | OperationMode::Dry | OperationMode::Blow => {
            CurrentHeaterCoolerState::Inactive
        }
    }
}

/// Reports a device mode as the target state.
///
/// The target state has no "off" member, so it follows the cached mode even
/// while the unit is off.
#[must_use]
pub fn target_state(mode: OperationMode) -> TargetHeaterCoolerState {
    match mode {
        OperationMode::Cool => TargetHeaterCoolerState::Cool,
        OperationMode::Warm => TargetHeaterCoolerState::Heat,
        OperationMode::Auto | OperationMode::Dry | OperationMode::Blow => {
            TargetHeaterCoolerState::Auto
        }
    }
}

/// Returns the device mode that realizes a target state.
#[must_use]
pub const fn mode_for_target(target: TargetHeaterCoolerState) -> OperationMode {
    match target {
        TargetHeaterCoolerState::Auto => OperationMode::Auto,
        TargetHeaterCoolerState::Heat => OperationMode::Warm,
        TargetHeaterCoolerState::Cool => OperationMode::Cool,
    }
}

/// Returns the update that switches the unit on or off.
///
/// Switching on re-sends the last known mode, which the service treats as
/// power-on.
#[must_use]
pub fn power_update(settings: &AirconSettings, requested: Active) -> Option<SettingsUpdate> {
    if active(settings) == requested {
        return None;
    }
    match requested {
        Active::Active => Some(SettingsUpdate::mode(settings.mode)),
        Active::Inactive => Some(SettingsUpdate::power_off()),
    }
}

/// Returns the update that switches to a target state.
///
/// Heat and cool carry the remembered threshold of that mode, if one was ever
/// cached.
///
/// # Errors
///
/// Returns `ValueError::InvalidTemperature` if the remembered threshold is
/// not finite.
pub fn target_state_update(
    settings: &AirconSettings,
    requested: TargetHeaterCoolerState,
    thresholds: &ThresholdMemory,
) -> Result<Option<SettingsUpdate>, ValueError> {
    if target_state(settings.mode) == requested {
        return Ok(None);
    }

    let mode = mode_for_target(requested);
    let update = SettingsUpdate::mode(mode);
    match ThresholdKind::for_mode(mode).and_then(|kind| thresholds.get(kind)) {
        Some(threshold) => update.with_temperature(threshold).map(Some),
        None => Ok(Some(update)),
    }
}

/// Reports the device's temperature unit.
#[must_use]
pub const fn display_units(unit: TemperatureUnit) -> TemperatureDisplayUnits {
    match unit {
        TemperatureUnit::Celsius => TemperatureDisplayUnits::Celsius,
        TemperatureUnit::Fahrenheit => TemperatureDisplayUnits::Fahrenheit,
    }
}
