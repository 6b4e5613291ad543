// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Threshold temperature seeding and updates.

use crate::capabilities::RangeCatalog;
use crate::command::SettingsUpdate;
use crate::error::{ParseError, ValueError};
use crate::response::AirconSettings;
use crate::state::ThresholdKind;
use crate::types::OperationMode;

/// Returns the initial value of a threshold that was never cached.
///
/// Uses the device's current target temperature, falling back to the lower
/// bound of the threshold's mode when the target is not numeric.
///
/// # Errors
///
/// Returns `ParseError::InvalidValue` if neither source yields a number.
pub fn seed_threshold(
    settings: &AirconSettings,
    catalog: &RangeCatalog<'_>,
    kind: ThresholdKind,
) -> Result<f64, ParseError> {
    if let Some(target) = settings.target_temperature() {
        return Ok(target);
    }

    catalog
        .temperature_bounds(kind.mode())
        .map(|bounds| f64::from(bounds.min))
        .ok_or_else(|| ParseError::InvalidValue {
            field: "temp".to_string(),
            message: format!(
                "no numeric target temperature to seed the {kind} threshold from (got {:?})",
                settings.temperature
            ),
        })
}

/// Returns the remote update for a threshold change, if it affects the
/// live device.
///
/// A threshold only drives the device while the unit is in the threshold's
/// mode; otherwise the value is remembered locally and `None` is returned.
///
/// # Errors
///
/// Returns `ValueError::InvalidTemperature` for NaN or infinite values.
pub fn threshold_update(
    kind: ThresholdKind,
    value: f64,
    active_mode: OperationMode,
) -> Result<Option<SettingsUpdate>, ValueError> {
    if active_mode != kind.mode() {
        return Ok(None);
    }
    SettingsUpdate::temperature(value).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::AirconSpec;

    fn settings(mode: &str, temp: &str) -> AirconSettings {
        let json = format!(r#"{{"temp": "{temp}", "mode": "{mode}"}}"#);
        serde_json::from_str(&json).unwrap()
    }

    fn spec() -> AirconSpec {
        serde_json::from_str(
            r#"{"range": {"modes": {
                "cool": {"temp": ["18", "30"], "vol": [], "dir": []},
                "warm": {"temp": ["16", "30"], "vol": [], "dir": []}
            }}}"#,
        )
        .unwrap()
    }

    #[test]
    fn seed_from_target_temperature() {
        let spec = spec();
        let catalog = RangeCatalog::new(Some(&spec));
        let seeded = seed_threshold(&settings("cool", "26.5"), &catalog, ThresholdKind::Heating);
        assert_eq!(seeded.unwrap(), 26.5);
    }

    #[test]
    fn seed_falls_back_to_lower_bound() {
        let spec = spec();
        let catalog = RangeCatalog::new(Some(&spec));
        let dry = settings("dry", "");
        assert_eq!(
            seed_threshold(&dry, &catalog, ThresholdKind::Cooling).unwrap(),
            18.0
        );
        assert_eq!(
            seed_threshold(&dry, &catalog, ThresholdKind::Heating).unwrap(),
            16.0
        );
    }

    #[test]
    fn seed_fails_without_any_source() {
        let catalog = RangeCatalog::new(None);
        let result = seed_threshold(&settings("dry", ""), &catalog, ThresholdKind::Cooling);
        assert!(matches!(result, Err(ParseError::InvalidValue { .. })));
    }

    #[test]
    fn update_only_in_matching_mode() {
        let update = threshold_update(ThresholdKind::Cooling, 26.0, OperationMode::Cool).unwrap();
        assert_eq!(update, Some(SettingsUpdate::temperature(26.0).unwrap()));

        let update = threshold_update(ThresholdKind::Cooling, 26.0, OperationMode::Warm).unwrap();
        assert_eq!(update, None);

        let update = threshold_update(ThresholdKind::Heating, 20.0, OperationMode::Auto).unwrap();
        assert_eq!(update, None);
    }

    #[test]
    fn non_finite_rejected() {
        let result = threshold_update(ThresholdKind::Heating, f64::NAN, OperationMode::Warm);
        assert!(matches!(result, Err(ValueError::InvalidTemperature(_))));
    }
}
