// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cache refresh and the periodic poller.

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::{Error, ProtocolError};
use crate::event::{CharacteristicUpdate, ThresholdProps};
use crate::mapping;
use crate::protocol::RemoteClient;
use crate::response::{Appliance, SensorReading};
use crate::state::{AccessoryState, ThresholdKind};

use super::Accessory;

impl<C: RemoteClient> Accessory<C> {
    /// Fetches the device listing and the sensor reading and caches both.
    ///
    /// The two fetches run concurrently and are applied independently: a
    /// failure of one leaves the other's result in the cache. A failed fetch
    /// keeps the previously cached value. After a successful device fetch the
    /// threshold ranges and display unit are published to subscribers.
    ///
    /// # Errors
    ///
    /// Returns the device-side error if the listing failed or did not
    /// contain the configured device (`Error::DeviceNotFound`), otherwise the
    /// sensor-side error.
    pub async fn refresh(&self) -> Result<(), Error> {
        tracing::debug!(accessory = self.name(), "Refreshing");

        let (sensor, devices) = tokio::join!(self.client.read_sensor(), self.client.list_devices());

        let sensor_result = self.apply_sensor(sensor);
        let device_result = self.apply_devices(devices);
        device_result.and(sensor_result)
    }

    fn apply_sensor(&self, result: Result<SensorReading, ProtocolError>) -> Result<(), Error> {
        match result {
            Ok(reading) => {
                tracing::debug!(temperature = reading.temperature, "Sensor refreshed");
                self.state.write().replace_sensor(reading);
                self.events
                    .publish(CharacteristicUpdate::CurrentTemperature(reading.temperature));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(accessory = self.name(), error = %e, "Sensor refresh failed");
                Err(e.into())
            }
        }
    }

    fn apply_devices(&self, result: Result<Vec<Appliance>, ProtocolError>) -> Result<(), Error> {
        let devices = result.inspect_err(|e| {
            tracing::warn!(accessory = self.name(), error = %e, "Device refresh failed");
        })?;

        let aircon_id = self.config.aircon_id();
        let selected = match aircon_id {
            Some(id) => devices.into_iter().find(|device| device.id == id),
            None => devices.into_iter().next(),
        };

        let Some(device) = selected else {
            let err = Error::DeviceNotFound {
                id: aircon_id.map(str::to_string),
            };
            tracing::warn!(accessory = self.name(), error = %err, "Keeping previous snapshot");
            return Err(err);
        };

        tracing::debug!(
            device = %device.id,
            nickname = %device.nickname,
            mode = %device.settings.mode,
            "Device refreshed"
        );

        let updates = {
            let mut state = self.state.write();
            state.replace_device(device);
            device_properties(&state)
        };
        for update in updates {
            self.events.publish(update);
        }
        Ok(())
    }

    /// Starts the background poller.
    ///
    /// The first refresh runs immediately, then one per configured interval
    /// for as long as the returned handle lives. Failed refreshes are logged
    /// and do not affect the schedule.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use = "the poller stops when the handle is dropped"]
    pub fn start(&self) -> PollerHandle {
        let accessory = self.clone();
        let period = self.config.refresh_interval();

        tracing::info!(
            accessory = self.name(),
            interval_secs = period.as_secs(),
            "Starting poller"
        );

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // First tick completes immediately
                interval.tick().await;
                if let Err(e) = accessory.refresh().await {
                    tracing::debug!(accessory = accessory.name(), error = %e, "Refresh tick failed");
                }
            }
        });

        PollerHandle { task }
    }
}

fn device_properties(state: &AccessoryState) -> Vec<CharacteristicUpdate> {
    let catalog = state.catalog();
    let mut updates: Vec<CharacteristicUpdate> = ThresholdKind::ALL
        .into_iter()
        .filter_map(|kind| {
            catalog
                .temperature_bounds(kind.mode())
                .map(|bounds| CharacteristicUpdate::ThresholdProps {
                    kind,
                    props: ThresholdProps::from_bounds(bounds),
                })
        })
        .collect();

    if let Ok(settings) = state.settings() {
        updates.push(CharacteristicUpdate::TemperatureDisplayUnits(
            mapping::display_units(settings.temperature_unit),
        ));
    }
    updates
}

/// Handle to a running poller.
///
/// Dropping the handle stops the poller.
#[derive(Debug)]
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stops the poller.
    pub fn stop(self) {
        self.task.abort();
    }

    /// Returns `true` while the poller task is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
