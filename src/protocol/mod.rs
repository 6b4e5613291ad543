// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Communication with the remote service.
//!
//! The accessory only needs three operations from the cloud, captured by the
//! [`RemoteClient`] trait. [`HttpClient`] implements them against the Nature
//! Remo cloud API; tests substitute an in-memory implementation.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use std::future::Future;

use crate::command::SettingsUpdate;
use crate::error::ProtocolError;
use crate::response::{AirconSettings, Appliance, SensorReading};

/// Operations the accessory performs against the remote service.
///
/// Implementations handle authentication and transport; they must not retry
/// on their own account beyond what the transport does, since the poller is
/// the accessory's only retry mechanism.
pub trait RemoteClient: Send + Sync + 'static {
    /// Lists the air conditioners on the account, in listing order.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or cannot be decoded.
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Appliance>, ProtocolError>> + Send;

    /// Applies a partial settings update and returns the resulting settings.
    ///
    /// The returned record is the new ground truth and may differ from what
    /// was requested.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or cannot be decoded.
    fn update_settings(
        &self,
        device_id: &str,
        update: &SettingsUpdate,
    ) -> impl Future<Output = Result<AirconSettings, ProtocolError>> + Send;

    /// Reads the room sensor.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails, cannot be decoded, or no
    /// device reports a temperature.
    fn read_sensor(&self) -> impl Future<Output = Result<SensorReading, ProtocolError>> + Send;
}
