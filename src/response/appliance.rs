// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance listing and the air conditioner capability descriptor.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::{OperationMode, TemperatureUnit};

use super::AirconSettings;

/// One entry of the appliance listing as the service sends it.
///
/// The listing mixes every kind of appliance (TVs, lights, IR presets), so
/// settings and the aircon descriptor are optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplianceRecord {
    /// Appliance id.
    pub id: String,
    /// User-assigned name.
    #[serde(default)]
    pub nickname: String,
    /// Appliance kind, `"AC"` for air conditioners.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Settings, present for air conditioners that were operated at least once.
    #[serde(default)]
    pub settings: Option<AirconSettings>,
    /// Capability descriptor, present for air conditioners.
    #[serde(default)]
    pub aircon: Option<AirconSpec>,
}

impl ApplianceRecord {
    /// Decodes one entry of the listing on its own, so a malformed entry
    /// can be skipped without losing the rest.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the entry does not have the record shape
    /// or carries settings this library cannot interpret.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ParseError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Converts the record into an [`Appliance`] if it is a usable air
    /// conditioner.
    #[must_use]
    pub fn into_aircon(self) -> Option<Appliance> {
        match (self.settings, self.aircon) {
            (Some(settings), Some(aircon)) => Some(Appliance {
                id: self.id,
                nickname: self.nickname,
                settings,
                aircon,
            }),
            _ => None,
        }
    }
}

/// An air conditioner as cached by the accessory: the device snapshot.
///
/// Replaced wholesale on every successful refresh. Only `settings` is ever
/// replaced on its own, by the response of a settings update.
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    /// Appliance id used in settings updates.
    pub id: String,
    /// User-assigned name.
    pub nickname: String,
    /// Last known settings.
    pub settings: AirconSettings,
    /// Static capability descriptor.
    pub aircon: AirconSpec,
}

/// Capability descriptor of an air conditioner.
///
/// # Examples
///
/// ```
/// use remo_aircon::response::AirconSpec;
/// use remo_aircon::types::OperationMode;
///
/// let json = r#"{
///     "range": {
///         "modes": {"cool": {"temp": ["18", "30"], "vol": ["1", "2", "auto"], "dir": []}},
///         "fixedButtons": ["power-off"]
///     },
///     "tempUnit": "c"
/// }"#;
/// let spec: AirconSpec = serde_json::from_str(json).unwrap();
/// assert_eq!(spec.mode(OperationMode::Cool).unwrap().vol.len(), 3);
/// assert!(spec.mode(OperationMode::Warm).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AirconSpec {
    /// Per-mode ranges.
    pub range: AirconRange,
    /// Unit of the temperature steps.
    #[serde(rename = "tempUnit", default)]
    pub temperature_unit: TemperatureUnit,
}

impl AirconSpec {
    /// Returns the range entry for `mode`, if the device supports it.
    #[must_use]
    pub fn mode(&self, mode: OperationMode) -> Option<&ModeRange> {
        self.range.modes.get(mode.as_str())
    }

    /// Returns the modes this device supports.
    pub fn supported_modes(&self) -> impl Iterator<Item = OperationMode> + '_ {
        OperationMode::ALL
            .into_iter()
            .filter(|mode| self.range.modes.contains_key(mode.as_str()))
    }
}

/// Mode table of the capability descriptor.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AirconRange {
    /// Ranges keyed by mode name. Kept as strings so an unknown mode added by
    /// the service does not break decoding of the whole listing.
    #[serde(default)]
    pub modes: HashMap<String, ModeRange>,
    /// Buttons available in every mode.
    #[serde(rename = "fixedButtons", default)]
    pub fixed_buttons: Vec<String>,
}

/// Valid values of one mode.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ModeRange {
    /// Ordered temperature steps, e.g. `["16", "16.5", ... "30"]`.
    #[serde(default)]
    pub temp: Vec<String>,
    /// Ordered fan speeds; the auto marker, when present, is last.
    #[serde(default)]
    pub vol: Vec<String>,
    /// Louver directions.
    #[serde(default)]
    pub dir: Vec<String>,
}
