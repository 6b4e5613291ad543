// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory state tracking.

use crate::capabilities::RangeCatalog;
use crate::error::Error;
use crate::response::{AirconSettings, Appliance, SensorReading};
use crate::types::SwingMode;

use super::{Speculation, ThresholdMemory};

/// Cached state of one air conditioner.
///
/// Holds the last device snapshot and sensor reading fetched from the cloud,
/// plus the values the accessory owns locally: the two threshold set points
/// and the swing shadow. Remote fields start out unknown and are filled by
/// the first successful refresh; local fields start out unset (thresholds)
/// or disabled (swing).
///
/// # Examples
///
/// ```
/// use remo_aircon::state::AccessoryState;
/// use remo_aircon::response::SensorReading;
///
/// let mut state = AccessoryState::new();
/// assert!(state.device().is_none());
///
/// state.replace_sensor(SensorReading::new(24.5));
/// assert_eq!(state.sensor().map(|s| s.temperature), Some(24.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessoryState {
    device: Option<Appliance>,
    sensor: Option<SensorReading>,
    thresholds: ThresholdMemory,
    swing: SwingMode,
}

impl AccessoryState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Device snapshot ==========

    /// Returns the cached device, if any refresh has succeeded.
    #[must_use]
    pub fn device(&self) -> Option<&Appliance> {
        self.device.as_ref()
    }

    /// Returns the cached device.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` if no device has been fetched yet.
    pub fn require_device(&self) -> Result<&Appliance, Error> {
        self.device.as_ref().ok_or(Error::NotInitialized)
    }

    /// Returns the cached device settings.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` if no device has been fetched yet.
    pub fn settings(&self) -> Result<&AirconSettings, Error> {
        self.require_device().map(|device| &device.settings)
    }

    /// Replaces the cached device wholesale.
    pub fn replace_device(&mut self, device: Appliance) {
        self.device = Some(device);
    }

    /// Replaces the settings of the cached device with a command response.
    ///
    /// Returns `false` if there is no cached device to update.
    pub fn commit_settings(&mut self, settings: AirconSettings) -> bool {
        match self.device.as_mut() {
            Some(device) => {
                device.settings = settings;
                true
            }
            None => false,
        }
    }

    /// Returns a range catalog over the cached device's capabilities.
    #[must_use]
    pub fn catalog(&self) -> RangeCatalog<'_> {
        RangeCatalog::for_device(self.device.as_ref())
    }

    // ========== Sensor ==========

    /// Returns the last sensor reading, if any.
    #[must_use]
    pub fn sensor(&self) -> Option<&SensorReading> {
        self.sensor.as_ref()
    }

    /// Returns the last sensor reading.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` if the sensor has never been read.
    pub fn require_sensor(&self) -> Result<&SensorReading, Error> {
        self.sensor.as_ref().ok_or(Error::NotInitialized)
    }

    /// Replaces the cached sensor reading.
    pub fn replace_sensor(&mut self, reading: SensorReading) {
        self.sensor = Some(reading);
    }

    // ========== Local values ==========

    /// Returns the remembered threshold set points.
    #[must_use]
    pub fn thresholds(&self) -> &ThresholdMemory {
        &self.thresholds
    }

    /// Returns the remembered threshold set points for modification.
    pub fn thresholds_mut(&mut self) -> &mut ThresholdMemory {
        &mut self.thresholds
    }

    /// Returns the swing shadow.
    #[must_use]
    pub fn swing(&self) -> SwingMode {
        self.swing
    }

    /// Sets the swing shadow.
    pub fn set_swing(&mut self, swing: SwingMode) {
        self.swing = swing;
    }

    // ========== Speculation ==========

    /// Applies a speculative change.
    ///
    /// Returns `true` if the state actually changed.
    pub fn apply(&mut self, change: &Speculation) -> bool {
        match *change {
            Speculation::Threshold { kind, next, .. } => {
                #[allow(clippy::float_cmp)]
                let unchanged = self.thresholds.get(kind) == Some(next);
                if unchanged {
                    false
                } else {
                    self.thresholds.set(kind, next);
                    true
                }
            }
            Speculation::Swing { previous } => {
                let next = SwingMode::from(!previous);
                if self.swing == next {
                    false
                } else {
                    self.swing = next;
                    true
                }
            }
        }
    }

    /// Puts back the value a speculative change replaced.
    pub fn revert(&mut self, change: &Speculation) {
        match *change {
            Speculation::Threshold { kind, previous, .. } => {
                self.thresholds.restore(kind, previous);
            }
            Speculation::Swing { previous } => {
                self.swing = SwingMode::from(previous);
            }
        }
    }
}
