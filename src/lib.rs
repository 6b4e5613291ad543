// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `remo_aircon` - present a Nature Remo air conditioner as a HomeKit
//! heater-cooler accessory.
//!
//! The library keeps a cached mirror of one air conditioner and its room
//! sensor, refreshed by a background poller, and answers the host's
//! characteristic gets and sets from it.
//!
//! # Supported Characteristics
//!
//! - **Active**: power on/off
//! - **CurrentHeaterCoolerState** / **TargetHeaterCoolerState**: cool, heat, auto
//! - **CurrentTemperature**: room sensor reading
//! - **Cooling/HeatingThresholdTemperature**: remembered per mode
//! - **RotationSpeed**: fan steps as a percentage, 0 for auto
//! - **SwingMode**: louver swing toggle
//!
//! Threshold ranges and the display unit are pushed to subscribers after
//! every refresh.
//!
//! # Quick Start
//!
//! ```no_run
//! use remo_aircon::{Accessory, AccessoryConfig};
//! use remo_aircon::event::CharacteristicUpdate;
//! use remo_aircon::types::{RotationSpeed, TargetHeaterCoolerState};
//!
//! #[tokio::main]
//! async fn main() -> remo_aircon::Result<()> {
//!     let config = AccessoryConfig::from_json(r#"{
//!         "name": "Living Room AC",
//!         "accessToken": "my-token"
//!     }"#)?;
//!
//!     let accessory = Accessory::from_config(config)?;
//!     let mut updates = accessory.subscribe();
//!     let _poller = accessory.start();
//!
//!     // The poller refreshes right away; the display unit is pushed once
//!     // the device is cached
//!     while let Ok(update) = updates.recv().await {
//!         if matches!(update, CharacteristicUpdate::TemperatureDisplayUnits(_)) {
//!             break;
//!         }
//!     }
//!
//!     println!("Room: {}°", accessory.get_current_temperature()?);
//!
//!     accessory.set_target_heater_cooler_state(TargetHeaterCoolerState::Cool).await?;
//!     accessory.set_cooling_threshold_temperature(26.0).await?;
//!     accessory.set_rotation_speed(RotationSpeed::new(50)?).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pushed Updates
//!
//! ```no_run
//! use remo_aircon::{Accessory, AccessoryConfig};
//! use remo_aircon::event::CharacteristicUpdate;
//!
//! # async fn example() -> remo_aircon::Result<()> {
//! let config = AccessoryConfig::new("AC").with_access_token("my-token");
//! let (accessory, _poller) = Accessory::spawn(remo_aircon::HttpClient::new("my-token")?, config)?;
//!
//! let mut updates = accessory.subscribe();
//! while let Ok(update) = updates.recv().await {
//!     match update {
//!         CharacteristicUpdate::CurrentTemperature(t) => println!("Room: {t}"),
//!         CharacteristicUpdate::ThresholdProps { kind, props } => {
//!             println!("{kind}: {}..{}", props.min, props.max);
//!         }
//!         CharacteristicUpdate::TemperatureDisplayUnits(units) => println!("{units:?}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod accessory;
mod capabilities;
pub mod command;
mod config;
pub mod error;
pub mod event;
pub mod mapping;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use accessory::{Accessory, PollerHandle};
pub use capabilities::{RangeCatalog, TemperatureBounds, VolumeSteps};
pub use command::SettingsUpdate;
pub use config::AccessoryConfig;
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use event::{CharacteristicUpdate, EventBus, ThresholdProps};
pub use protocol::RemoteClient;
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use state::{AccessoryState, ThresholdKind};
pub use types::{
    Active, AirVolume, CurrentHeaterCoolerState, OperationMode, RotationSpeed, SwingMode,
    TargetHeaterCoolerState, TemperatureDisplayUnits,
};
