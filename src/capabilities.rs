// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-mode ranges derived from the capability descriptor.
//!
//! The descriptor lists every valid temperature and fan speed as strings.
//! The accessory needs two derived facts from it: the temperature bounds of
//! a mode (pushed to the threshold characteristics) and the number of numeric
//! fan steps (needed to map fan speed to a percentage).

use crate::error::{Error, ValueError};
use crate::response::{AirconSpec, Appliance};
use crate::types::{AirVolume, OperationMode, parse_temperature};

/// Inclusive temperature bounds of one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureBounds {
    /// Lowest settable temperature.
    pub min: i32,
    /// Highest settable temperature.
    pub max: i32,
}

/// Fan steps of one mode.
///
/// # Examples
///
/// ```
/// use remo_aircon::VolumeSteps;
///
/// let steps = VolumeSteps::from_sequence(&["1", "2", "3", "auto"]);
/// assert_eq!(steps.count, 3);
/// assert!(steps.has_auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeSteps {
    /// Number of numeric steps, auto marker excluded.
    pub count: u8,
    /// Whether the last entry is the auto marker.
    pub has_auto: bool,
}

impl VolumeSteps {
    /// Derives the step count from a mode's ordered volume sequence.
    #[must_use]
    pub fn from_sequence<S: AsRef<str>>(sequence: &[S]) -> Self {
        let has_auto = sequence
            .last()
            .is_some_and(|last| last.as_ref() == AirVolume::AUTO_MARKER);
        let numeric = if has_auto {
            sequence.len() - 1
        } else {
            sequence.len()
        };
        Self {
            count: u8::try_from(numeric).unwrap_or(u8::MAX),
            has_auto,
        }
    }
}

/// Read-only view of a cached device's capability descriptor.
///
/// Built from whatever the state cache currently holds, including nothing.
///
/// # Examples
///
/// ```
/// use remo_aircon::RangeCatalog;
/// use remo_aircon::types::OperationMode;
///
/// let catalog = RangeCatalog::new(None);
/// assert_eq!(catalog.temperature_bounds(OperationMode::Cool), None);
/// assert!(catalog.volume_steps(OperationMode::Cool).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RangeCatalog<'a> {
    spec: Option<&'a AirconSpec>,
}

impl<'a> RangeCatalog<'a> {
    /// Creates a catalog over an optional descriptor.
    #[must_use]
    pub fn new(spec: Option<&'a AirconSpec>) -> Self {
        Self { spec }
    }

    /// Creates a catalog over the descriptor of an optional cached device.
    #[must_use]
    pub fn for_device(device: Option<&'a Appliance>) -> Self {
        Self::new(device.map(|d| &d.aircon))
    }

    /// Returns the first and last temperature steps of `mode`.
    ///
    /// Returns `None` when nothing is cached yet, the mode is unsupported, or
    /// its steps are not numeric (relative offsets in `auto` are numeric and
    /// reported as-is). The host tolerates unset bounds at startup.
    #[must_use]
    pub fn temperature_bounds(&self, mode: OperationMode) -> Option<TemperatureBounds> {
        let range = self.spec?.mode(mode)?;
        let first = parse_bound(range.temp.first()?)?;
        let last = parse_bound(range.temp.last()?)?;
        Some(TemperatureBounds {
            min: first,
            max: last,
        })
    }

    /// Returns the fan steps of `mode`.
    ///
    /// # Errors
    ///
    /// - `Error::NotInitialized` if no descriptor is cached yet
    /// - `ValueError::UnsupportedMode` if the device has no entry for `mode`
    /// - `ValueError::NoVolumeSteps` if the mode has neither numeric steps
    ///   nor an auto marker
    pub fn volume_steps(&self, mode: OperationMode) -> Result<VolumeSteps, Error> {
        let spec = self.spec.ok_or(Error::NotInitialized)?;
        let range = spec.mode(mode).ok_or(ValueError::UnsupportedMode(mode))?;
        let steps = VolumeSteps::from_sequence(&range.vol);
        if steps.count == 0 && !steps.has_auto {
            return Err(ValueError::NoVolumeSteps(mode).into());
        }
        Ok(steps)
    }
}

// Integer part, like the service's own clients read the steps.
#[allow(clippy::cast_possible_truncation)]
fn parse_bound(raw: &str) -> Option<i32> {
    parse_temperature(raw).map(|t| t.trunc() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> AirconSpec {
        serde_json::from_str(
            r#"{
                "range": {
                    "modes": {
                        "cool": {"temp": ["18", "18.5", "31"], "vol": ["1", "2", "3", "auto"], "dir": []},
                        "warm": {"temp": ["14", "30"], "vol": ["1", "2", "3", "4", "5"], "dir": []},
                        "auto": {"temp": ["-2", "-1", "0", "1", "2"], "vol": ["auto"], "dir": []},
                        "dry": {"temp": [""], "vol": [], "dir": []}
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn bounds_from_first_and_last_step() {
        let spec = spec();
        let catalog = RangeCatalog::new(Some(&spec));
        assert_eq!(
            catalog.temperature_bounds(OperationMode::Cool),
            Some(TemperatureBounds { min: 18, max: 31 })
        );
        assert_eq!(
            catalog.temperature_bounds(OperationMode::Warm),
            Some(TemperatureBounds { min: 14, max: 30 })
        );
        assert_eq!(
            catalog.temperature_bounds(OperationMode::Auto),
            Some(TemperatureBounds { min: -2, max: 2 })
        );
    }

    #[test]
    fn bounds_missing() {
        let spec = spec();
        let catalog = RangeCatalog::new(Some(&spec));
        assert_eq!(catalog.temperature_bounds(OperationMode::Dry), None);
        assert_eq!(catalog.temperature_bounds(OperationMode::Blow), None);
        assert_eq!(RangeCatalog::new(None).temperature_bounds(OperationMode::Cool), None);
    }

    #[test]
    fn volume_steps_with_auto() {
        let spec = spec();
        let catalog = RangeCatalog::new(Some(&spec));
        assert_eq!(
            catalog.volume_steps(OperationMode::Cool).unwrap(),
            VolumeSteps {
                count: 3,
                has_auto: true
            }
        );
    }

    #[test]
    fn volume_steps_without_auto() {
        let spec = spec();
        let catalog = RangeCatalog::new(Some(&spec));
        assert_eq!(
            catalog.volume_steps(OperationMode::Warm).unwrap(),
            VolumeSteps {
                count: 5,
                has_auto: false
            }
        );
    }

    #[test]
    fn volume_steps_auto_only() {
        let spec = spec();
        let catalog = RangeCatalog::new(Some(&spec));
        assert_eq!(
            catalog.volume_steps(OperationMode::Auto).unwrap(),
            VolumeSteps {
                count: 0,
                has_auto: true
            }
        );
    }

    #[test]
    fn volume_steps_errors() {
        let spec = spec();
        let catalog = RangeCatalog::new(Some(&spec));
        assert!(matches!(
            catalog.volume_steps(OperationMode::Dry),
            Err(Error::Value(ValueError::NoVolumeSteps(OperationMode::Dry)))
        ));
        assert!(matches!(
            catalog.volume_steps(OperationMode::Blow),
            Err(Error::Value(ValueError::UnsupportedMode(OperationMode::Blow)))
        ));
        assert!(matches!(
            RangeCatalog::new(None).volume_steps(OperationMode::Cool),
            Err(Error::NotInitialized)
        ));
    }

    #[test]
    fn auto_marker_only_counts_when_last() {
        let steps = VolumeSteps::from_sequence(&["auto", "1", "2"]);
        assert_eq!(steps.count, 3);
        assert!(!steps.has_auto);
    }
}
