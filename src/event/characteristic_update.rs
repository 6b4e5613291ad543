// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Characteristic update types.

use crate::capabilities::TemperatureBounds;
use crate::state::ThresholdKind;
use crate::types::{Characteristic, TemperatureDisplayUnits};

/// Valid range of a threshold characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdProps {
    /// Lowest accepted value.
    pub min: i32,
    /// Highest accepted value.
    pub max: i32,
    /// Increment between accepted values.
    pub step: u8,
}

impl ThresholdProps {
    /// Threshold characteristics always move in whole degrees.
    pub const STEP: u8 = 1;

    /// Builds the props for a mode's temperature bounds.
    #[must_use]
    pub const fn from_bounds(bounds: TemperatureBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
            step: Self::STEP,
        }
    }
}

/// Values pushed to the host without it asking.
///
/// Emitted after each successful refresh so the host can update its
/// characteristics even when no get is in flight.
///
/// # Examples
///
/// ```
/// use remo_aircon::event::CharacteristicUpdate;
/// use remo_aircon::types::Characteristic;
///
/// let update = CharacteristicUpdate::CurrentTemperature(23.5);
/// assert_eq!(update.characteristic(), Characteristic::CurrentTemperature);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacteristicUpdate {
    /// The room sensor was read.
    CurrentTemperature(f64),

    /// The device's temperature unit, sent on every device refresh.
    TemperatureDisplayUnits(TemperatureDisplayUnits),

    /// New valid range for a threshold characteristic.
    ///
    /// Not sent for a mode the capability descriptor gives no bounds for.
    ThresholdProps {
        /// The threshold the range applies to.
        kind: ThresholdKind,
        /// The range.
        props: ThresholdProps,
    },
}

impl CharacteristicUpdate {
    /// Returns the characteristic this update targets.
    #[must_use]
    pub const fn characteristic(&self) -> Characteristic {
        match self {
            Self::CurrentTemperature(_) => Characteristic::CurrentTemperature,
            Self::TemperatureDisplayUnits(_) => Characteristic::TemperatureDisplayUnits,
            Self::ThresholdProps { kind, .. } => kind.characteristic(),
        }
    }
}
