// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Settings commands sent to the remote service.
//!
//! Every change to the air conditioner is one [`SettingsUpdate`]: a partial
//! record of the fields that change. The service answers with the complete
//! new settings record.
//!
//! # Fields
//!
//! | Field | Purpose | Example |
//! |-------|---------|---------|
//! | `operation_mode` | Switch mode (also powers on) | `cool` |
//! | `temperature` | Target temperature | `26`, `26.5` |
//! | `air_volume` | Fan speed | `auto`, `3` |
//! | `air_direction` | Louver direction | `1` |
//! | `button` | Stateless IR button | `power-off`, `airdir-swing` |

mod settings;

pub use settings::SettingsUpdate;
