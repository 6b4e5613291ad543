// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remembered heating and cooling set points.

use std::fmt;

use crate::types::{Characteristic, OperationMode};

/// Which threshold characteristic a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdKind {
    /// `CoolingThresholdTemperature`, backed by `cool` mode.
    Cooling,
    /// `HeatingThresholdTemperature`, backed by `warm` mode.
    Heating,
}

impl ThresholdKind {
    /// Both kinds.
    pub const ALL: [Self; 2] = [Self::Cooling, Self::Heating];

    /// Returns the device mode whose target temperature this threshold drives.
    #[must_use]
    pub const fn mode(&self) -> OperationMode {
        match self {
            Self::Cooling => OperationMode::Cool,
            Self::Heating => OperationMode::Warm,
        }
    }

    /// Returns the threshold driven by `mode`, if any.
    #[must_use]
    pub const fn for_mode(mode: OperationMode) -> Option<Self> {
        match mode {
            OperationMode::Cool => Some(Self::Cooling),
            OperationMode::Warm => Some(Self::Heating),
            _ => None,
        }
    }

    /// Returns the characteristic this threshold is exposed as.
    #[must_use]
    pub const fn characteristic(&self) -> Characteristic {
        match self {
            Self::Cooling => Characteristic::CoolingThresholdTemperature,
            Self::Heating => Characteristic::HeatingThresholdTemperature,
        }
    }
}

impl fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cooling => f.write_str("cooling"),
            Self::Heating => f.write_str("heating"),
        }
    }
}

/// Last requested temperature per threshold.
///
/// The device exposes a single target temperature, while the host expects a
/// heating and a cooling threshold to be readable at all times. Each value is
/// seeded lazily on first read and afterwards changed only by explicit sets.
///
/// # Examples
///
/// ```
/// use remo_aircon::state::{ThresholdKind, ThresholdMemory};
///
/// let mut memory = ThresholdMemory::new();
/// assert_eq!(memory.get(ThresholdKind::Cooling), None);
///
/// memory.set(ThresholdKind::Cooling, 24.0);
/// assert_eq!(memory.get(ThresholdKind::Cooling), Some(24.0));
/// assert_eq!(memory.get(ThresholdKind::Heating), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdMemory {
    cool: Option<f64>,
    warm: Option<f64>,
}

impl ThresholdMemory {
    /// Creates an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached threshold, if one was ever set or seeded.
    #[must_use]
    pub fn get(&self, kind: ThresholdKind) -> Option<f64> {
        match kind {
            ThresholdKind::Cooling => self.cool,
            ThresholdKind::Heating => self.warm,
        }
    }

    /// Caches a threshold.
    pub fn set(&mut self, kind: ThresholdKind, value: f64) {
        *self.slot(kind) = Some(value);
    }

    /// Restores a threshold to a previous, possibly unset, value.
    pub fn restore(&mut self, kind: ThresholdKind, previous: Option<f64>) {
        *self.slot(kind) = previous;
    }

    fn slot(&mut self, kind: ThresholdKind) -> &mut Option<f64> {
        match kind {
            ThresholdKind::Cooling => &mut self.cool,
            ThresholdKind::Heating => &mut self.warm,
        }
    }
}
