// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Push notifications to the accessory host.
//!
//! Some characteristic properties change without the host asking: the room
//! temperature, the device's display unit, and the valid range of the
//! threshold characteristics. The accessory publishes these on an
//! [`EventBus`] backed by a tokio broadcast channel.
//!
//! # Examples
//!
//! ```
//! use remo_aircon::event::{CharacteristicUpdate, EventBus};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(CharacteristicUpdate::CurrentTemperature(24.0));
//! ```

mod characteristic_update;
mod event_bus;

pub use characteristic_update::{CharacteristicUpdate, ThresholdProps};
pub use event_bus::EventBus;
