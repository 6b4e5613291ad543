// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory state management types.
//!
//! [`AccessoryState`] caches what was last fetched from the cloud and the
//! values the accessory keeps for itself. [`Speculation`] represents a local
//! change made ahead of a remote command, which can be reverted if the
//! command fails.
//!
//! # Examples
//!
//! ```
//! use remo_aircon::state::{AccessoryState, Speculation};
//! use remo_aircon::types::SwingMode;
//!
//! let mut state = AccessoryState::new();
//!
//! let change = Speculation::swing(&state);
//! state.apply(&change);
//!
//! assert_eq!(state.swing(), SwingMode::Enabled);
//! ```

mod accessory_state;
mod speculation;
mod thresholds;

pub use accessory_state::AccessoryState;
pub use speculation::Speculation;
pub use thresholds::{ThresholdKind, ThresholdMemory};
