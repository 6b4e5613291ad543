// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for the remote service's JSON records.
//!
//! [`Appliance`] and [`SensorReading`] are the two snapshots the accessory
//! caches; the other types are the wire records they are built from.

mod appliance;
mod sensor;
mod settings;

pub use appliance::{AirconRange, AirconSpec, Appliance, ApplianceRecord, ModeRange};
pub use sensor::{NewestEvents, RemoDevice, SensorEvent, SensorReading};
pub use settings::AirconSettings;
