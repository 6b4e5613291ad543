// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed percentage to volume step conversion.
//!
//! Step `s` of `c` is reported as `ceil(100 * s / c)` percent. The reverse
//! direction picks the smallest step whose reported percentage reaches the
//! requested one, so every step survives a round trip through its own
//! percentage.
//!
//! # Examples
//!
//! ```
//! use remo_aircon::mapping::{percentage_to_step, step_to_percentage};
//!
//! assert_eq!(step_to_percentage(1, 3), 34);
//! assert_eq!(step_to_percentage(3, 3), 100);
//! assert_eq!(percentage_to_step(34, 3), 1);
//! assert_eq!(percentage_to_step(35, 3), 2);
//! assert_eq!(percentage_to_step(100, 3), 3);
//! ```

use crate::capabilities::VolumeSteps;
use crate::types::{AirVolume, RotationSpeed};

/// Returns the percentage reported for `step` out of `count` steps.
///
/// Steps beyond `count` are reported as 100. Returns 0 if `count` is zero.
#[must_use]
pub fn step_to_percentage(step: u8, count: u8) -> u8 {
    if count == 0 {
        return 0;
    }
    let step = u32::from(step);
    let count = u32::from(count);
    let percent = (100 * step).div_ceil(count).min(100);
    u8::try_from(percent).unwrap_or(100)
}

/// Returns the step for a percentage in `1..=100` out of `count` steps.
///
/// Percentages of 0 are treated as 1. Returns 0 if `count` is zero.
#[must_use]
pub fn percentage_to_step(percentage: u8, count: u8) -> u8 {
    if count == 0 {
        return 0;
    }
    let below = u32::from(percentage.clamp(1, 100)) - 1;
    let step = below * u32::from(count) / 100 + 1;
    u8::try_from(step).unwrap_or(count).clamp(1, count)
}

/// Reports a cached volume as a rotation speed.
///
/// The auto marker and an unset volume both read as 0.
#[must_use]
pub fn volume_to_speed(volume: Option<AirVolume>, steps: VolumeSteps) -> RotationSpeed {
    match volume {
        Some(AirVolume::Step(step)) => {
            RotationSpeed::clamped(step_to_percentage(step, steps.count))
        }
        Some(AirVolume::Auto) | None => RotationSpeed::MIN,
    }
}

/// Converts a requested rotation speed to the volume to send.
///
/// 0 selects auto when the mode offers it and the slowest step otherwise;
/// there is no fan-off state short of powering the unit down. A mode with
/// only the auto marker always gets auto.
#[must_use]
pub fn speed_to_volume(speed: RotationSpeed, steps: VolumeSteps) -> AirVolume {
    if steps.count == 0 {
        return AirVolume::Auto;
    }
    if speed.requests_auto() {
        return if steps.has_auto {
            AirVolume::Auto
        } else {
            AirVolume::Step(1)
        };
    }
    AirVolume::Step(percentage_to_step(speed.value(), steps.count))
}
