// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner settings record.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::{
    AirVolume, OperationMode, PowerState, TemperatureUnit, deserialize_optional_volume,
    parse_temperature,
};

/// Last known settings of an air conditioner.
///
/// Returned both inside every appliance listing and as the body of a
/// settings update. The remote service sends:
///
/// ```json
/// {"temp": "27", "temp_unit": "c", "mode": "cool", "vol": "auto",
///  "dir": "", "button": "", "updated_at": "2024-07-01T10:00:00Z"}
/// ```
///
/// # Examples
///
/// ```
/// use remo_aircon::response::AirconSettings;
/// use remo_aircon::types::{AirVolume, OperationMode, PowerState};
///
/// let json = r#"{"temp": "26", "temp_unit": "c", "mode": "warm", "vol": "2", "button": "power-off"}"#;
/// let settings: AirconSettings = serde_json::from_str(json).unwrap();
/// assert_eq!(settings.mode, OperationMode::Warm);
/// assert_eq!(settings.volume, Some(AirVolume::Step(2)));
/// assert_eq!(settings.power, PowerState::Off);
/// assert_eq!(settings.target_temperature(), Some(26.0));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirconSettings {
    /// Target temperature as sent by the service; empty in modes without a
    /// set point.
    #[serde(rename = "temp", default)]
    pub temperature: String,

    /// Unit of `temperature`.
    #[serde(rename = "temp_unit", default)]
    pub temperature_unit: TemperatureUnit,

    /// Operating mode. Kept while the unit is off.
    pub mode: OperationMode,

    /// Fan speed; `None` when the service reports it as unset.
    #[serde(rename = "vol", default, deserialize_with = "deserialize_optional_volume")]
    pub volume: Option<AirVolume>,

    /// Louver direction, opaque to this library.
    #[serde(rename = "dir", default)]
    pub direction: String,

    /// Power, derived from the last pressed button.
    #[serde(rename = "button", default)]
    pub power: PowerState,

    /// When the settings last changed.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AirconSettings {
    /// Returns the target temperature as a number, if it is numeric.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        parse_temperature(&self.temperature)
    }

    /// Returns `true` if the unit is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }
}
