// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host's fan speed percentage.

use std::fmt;

use crate::error::ValueError;

/// `RotationSpeed` characteristic value, 0 to 100.
///
/// 0 doubles as the request for automatic fan speed, and is what an
/// automatic fan reads as.
///
/// ```
/// use remo_aircon::types::RotationSpeed;
///
/// let half = RotationSpeed::new(50).unwrap();
/// assert_eq!(half.value(), 50);
/// assert!(RotationSpeed::MIN.requests_auto());
/// assert!(RotationSpeed::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RotationSpeed(u8);

impl RotationSpeed {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` above 100.
    pub fn new(percent: u8) -> Result<Self, ValueError> {
        if percent > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX.0),
                actual: u16::from(percent),
            });
        }
        Ok(Self(percent))
    }

    /// Saturates at 100 instead of failing.
    #[must_use]
    pub const fn clamped(percent: u8) -> Self {
        if percent > Self::MAX.0 {
            Self::MAX
        } else {
            Self(percent)
        }
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Whether the host asked for the automatic fan.
    #[must_use]
    pub const fn requests_auto(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RotationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for RotationSpeed {
    type Error = ValueError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}
