// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature units and the string temperatures used on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// Unit the device reports its target temperature in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    /// Degrees Celsius (`"c"`).
    #[default]
    Celsius,
    /// Degrees Fahrenheit (`"f"`).
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "c",
            Self::Fahrenheit => "f",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            _ => Err(ValueError::InvalidTemperatureUnit(s.to_string())),
        }
    }
}

impl Serialize for TemperatureUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemperatureUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            // Older firmware omits the unit entirely.
            None | Some("") => Ok(Self::Celsius),
            Some(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Parses a wire temperature the way the service's clients do: leading
/// numeric text, fractional part kept.
///
/// Returns `None` for empty or non-numeric strings.
///
/// # Examples
///
/// ```
/// use remo_aircon::types::parse_temperature;
///
/// assert_eq!(parse_temperature("26"), Some(26.0));
/// assert_eq!(parse_temperature("26.5"), Some(26.5));
/// assert_eq!(parse_temperature(""), None);
/// ```
#[must_use]
pub fn parse_temperature(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|t| t.is_finite())
}

/// Formats a temperature for a settings payload.
///
/// Whole numbers are sent without a fractional part (`"26"`, not `"26.0"`).
///
/// # Errors
///
/// Returns `ValueError::InvalidTemperature` for NaN or infinite values.
pub fn format_temperature(value: f64) -> Result<String, ValueError> {
    if !value.is_finite() {
        return Err(ValueError::InvalidTemperature(value));
    }
    if value.fract() == 0.0 {
        Ok(format!("{value:.0}"))
    } else {
        Ok(value.to_string())
    }
}
