// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optimistic local changes.
//!
//! A [`Speculation`] is committed to the cached state before the matching
//! remote command completes, so concurrent reads see the intended value
//! immediately. It remembers the single value it replaced and can put it
//! back if the command fails.
//!
//! # Examples
//!
//! ```
//! use remo_aircon::state::{AccessoryState, Speculation, ThresholdKind};
//!
//! let mut state = AccessoryState::new();
//! state.thresholds_mut().set(ThresholdKind::Cooling, 24.0);
//!
//! let change = Speculation::threshold(&state, ThresholdKind::Cooling, 26.0);
//! assert!(state.apply(&change));
//! assert_eq!(state.thresholds().get(ThresholdKind::Cooling), Some(26.0));
//!
//! state.revert(&change);
//! assert_eq!(state.thresholds().get(ThresholdKind::Cooling), Some(24.0));
//! ```

use super::{AccessoryState, ThresholdKind};

/// A speculative change to a locally owned field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speculation {
    /// A threshold set point changed.
    Threshold {
        /// The threshold being changed.
        kind: ThresholdKind,
        /// Value before the change; `None` if never cached.
        previous: Option<f64>,
        /// Requested value.
        next: f64,
    },

    /// The swing shadow flipped.
    Swing {
        /// Value before the flip.
        previous: bool,
    },
}

impl Speculation {
    /// Captures a threshold change against the current state.
    #[must_use]
    pub fn threshold(state: &AccessoryState, kind: ThresholdKind, next: f64) -> Self {
        Self::Threshold {
            kind,
            previous: state.thresholds().get(kind),
            next,
        }
    }

    /// Captures a swing flip against the current state.
    #[must_use]
    pub fn swing(state: &AccessoryState) -> Self {
        Self::Swing {
            previous: state.swing().is_enabled(),
        }
    }
}
