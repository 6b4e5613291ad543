// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for both vocabularies the accessory translates between.
//!
//! # Remote side
//!
//! - [`OperationMode`] - `auto`, `cool`, `warm`, `dry`, `blow`
//! - [`PowerState`] / [`Button`] - power and stateless IR buttons
//! - [`AirVolume`] - fan speed, `auto` or a numeric step
//! - [`TemperatureUnit`] - unit of the device's target temperature
//!
//! # Characteristic side
//!
//! - [`Active`], [`CurrentHeaterCoolerState`], [`TargetHeaterCoolerState`],
//!   [`SwingMode`], [`TemperatureDisplayUnits`] - small integer enums
//! - [`RotationSpeed`] - fan speed percentage (0-100%)

mod characteristic;
mod mode;
mod power;
mod rotation_speed;
mod temperature;
mod volume;

pub use characteristic::{
    Active, Characteristic, CurrentHeaterCoolerState, SwingMode, TargetHeaterCoolerState,
    TemperatureDisplayUnits,
};
pub use mode::OperationMode;
pub use power::{Button, PowerState};
pub use rotation_speed::RotationSpeed;
pub use temperature::{TemperatureUnit, format_temperature, parse_temperature};
pub use volume::AirVolume;

pub(crate) use volume::deserialize_optional_volume;
