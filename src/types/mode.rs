// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation modes of the remote air conditioner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Operating mode reported and accepted by the remote service.
///
/// # Examples
///
/// ```
/// use remo_aircon::types::OperationMode;
///
/// let mode: OperationMode = "warm".parse().unwrap();
/// assert_eq!(mode, OperationMode::Warm);
/// assert_eq!(mode.as_str(), "warm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    /// Device chooses between heating and cooling.
    Auto,
    /// Cooling.
    Cool,
    /// Heating.
    Warm,
    /// Dehumidifying.
    Dry,
    /// Fan only.
    Blow,
}

impl OperationMode {
    /// All modes, in the order the service documents them.
    pub const ALL: [Self; 5] = [Self::Auto, Self::Cool, Self::Warm, Self::Dry, Self::Blow];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Dry => "dry",
            Self::Blow => "blow",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValueError::InvalidMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse_all() {
        for mode in OperationMode::ALL {
            assert_eq!(mode.as_str().parse::<OperationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn mode_parse_invalid() {
        assert_eq!(
            "heat".parse::<OperationMode>(),
            Err(ValueError::InvalidMode("heat".to_string()))
        );
    }

    #[test]
    fn mode_serde() {
        let mode: OperationMode = serde_json::from_str("\"blow\"").unwrap();
        assert_eq!(mode, OperationMode::Blow);
        assert_eq!(serde_json::to_string(&OperationMode::Cool).unwrap(), "\"cool\"");
    }
}
