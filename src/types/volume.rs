// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air volume (fan speed) values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// Discrete fan speed accepted by the remote service.
///
/// On the wire this is either the literal `"auto"` or a step number
/// starting at `"1"`.
///
/// # Examples
///
/// ```
/// use remo_aircon::types::AirVolume;
///
/// assert_eq!("auto".parse::<AirVolume>().unwrap(), AirVolume::Auto);
/// assert_eq!("3".parse::<AirVolume>().unwrap(), AirVolume::Step(3));
/// assert_eq!(AirVolume::Step(2).to_string(), "2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirVolume {
    /// The device picks the fan speed.
    Auto,
    /// A numeric step, 1-based.
    Step(u8),
}

impl AirVolume {
    /// The literal auto marker used by the service.
    pub const AUTO_MARKER: &'static str = "auto";
}

impl fmt::Display for AirVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str(Self::AUTO_MARKER),
            Self::Step(step) => write!(f, "{step}"),
        }
    }
}

impl FromStr for AirVolume {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::AUTO_MARKER {
            return Ok(Self::Auto);
        }
        match s.parse::<u8>() {
            Ok(step) if step > 0 => Ok(Self::Step(step)),
            _ => Err(ValueError::InvalidVolume(s.to_string())),
        }
    }
}

impl Serialize for AirVolume {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AirVolume {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Deserializes an optional volume where the service sends `""` for "unset".
pub(crate) fn deserialize_optional_volume<'de, D>(
    deserializer: D,
) -> Result<Option<AirVolume>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
