// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory remote client for accessory tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::Notify;
use remo_aircon::command::SettingsUpdate;
use remo_aircon::protocol::RemoteClient;
use remo_aircon::response::{AirconSettings, Appliance, ApplianceRecord, SensorReading};
use remo_aircon::types::{AirVolume, Button, PowerState};
use remo_aircon::{Accessory, AccessoryConfig, ProtocolError};

/// Builds an air conditioner with the given settings fields.
///
/// Capabilities: `cool` 18..30 with three steps and auto, `warm` 16..30 with
/// five steps, `auto` with relative offsets and only auto fan, `dry` without
/// a set point or fan steps.
pub fn aircon(id: &str, mode: &str, temp: &str, vol: &str, button: &str) -> Appliance {
    let json = serde_json::json!({
        "id": id,
        "nickname": format!("Aircon {id}"),
        "type": "AC",
        "settings": {
            "temp": temp,
            "temp_unit": "c",
            "mode": mode,
            "vol": vol,
            "dir": "",
            "button": button
        },
        "aircon": {
            "range": {
                "modes": {
                    "cool": {"temp": ["18", "19", "20", "30"], "vol": ["1", "2", "3", "auto"], "dir": ["1"]},
                    "warm": {"temp": ["16", "17", "30"], "vol": ["1", "2", "3", "4", "5"], "dir": ["1"]},
                    "auto": {"temp": ["-2", "-1", "0", "1", "2"], "vol": ["auto"], "dir": ["1"]},
                    "dry": {"temp": [""], "vol": [], "dir": []}
                },
                "fixedButtons": ["power-off", "airdir-swing"]
            },
            "tempUnit": "c"
        }
    });
    serde_json::from_value::<ApplianceRecord>(json)
        .unwrap()
        .into_aircon()
        .unwrap()
}

/// The usual device: cooling at 26 degrees, fan step 2, powered on.
pub fn cooling_aircon() -> Appliance {
    aircon("ac-1", "cool", "26", "2", "")
}

/// Scripted remote service.
///
/// Updates are applied to the first listed device the way the service would
/// and the resulting settings are returned.
pub struct FakeClient {
    devices: Mutex<Vec<Appliance>>,
    sensor: Mutex<Option<SensorReading>>,
    fail_listing: AtomicBool,
    fail_updates: AtomicBool,
    list_calls: AtomicUsize,
    updates: Mutex<Vec<(String, SettingsUpdate)>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeClient {
    pub fn new(devices: Vec<Appliance>, temperature: f64) -> Self {
        Self {
            devices: Mutex::new(devices),
            sensor: Mutex::new(Some(SensorReading::new(temperature))),
            fail_listing: AtomicBool::new(false),
            fail_updates: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
        }
    }

    pub fn set_devices(&self, devices: Vec<Appliance>) {
        *self.devices.lock() = devices;
    }

    pub fn set_sensor(&self, reading: Option<SensorReading>) {
        *self.sensor.lock() = reading;
    }

    pub fn fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    /// Holds every later update in flight until the returned gate is
    /// notified once per update.
    pub fn gate_updates(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock() = Some(Arc::clone(&gate));
        gate
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Updates received so far, successful or not.
    pub fn updates(&self) -> Vec<(String, SettingsUpdate)> {
        self.updates.lock().clone()
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().len()
    }

    pub fn last_update(&self) -> Option<SettingsUpdate> {
        self.updates.lock().last().map(|(_, update)| update.clone())
    }
}

fn apply(settings: &mut AirconSettings, update: &SettingsUpdate) {
    if let Some(mode) = update.operation_mode() {
        settings.mode = mode;
        settings.power = PowerState::On;
    }
    if let Some(temperature) = update.temperature_value() {
        settings.temperature = temperature.to_string();
    }
    if let Some(volume) = update.air_volume() {
        settings.volume = Some(volume);
    }
    match update.pressed_button() {
        Some(Button::PowerOff) => settings.power = PowerState::Off,
        Some(Button::PowerOn) => settings.power = PowerState::On,
        _ => {}
    }
}

impl RemoteClient for FakeClient {
    async fn list_devices(&self) -> Result<Vec<Appliance>, ProtocolError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(ProtocolError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(self.devices.lock().clone())
    }

    async fn update_settings(
        &self,
        device_id: &str,
        update: &SettingsUpdate,
    ) -> Result<AirconSettings, ProtocolError> {
        self.updates
            .lock()
            .push((device_id.to_string(), update.clone()));

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(ProtocolError::RateLimited);
        }

        let mut devices = self.devices.lock();
        let device = devices
            .iter_mut()
            .find(|device| device.id == device_id)
            .ok_or_else(|| ProtocolError::Status {
                status: 404,
                message: "Not Found".to_string(),
            })?;
        apply(&mut device.settings, update);
        Ok(device.settings.clone())
    }

    async fn read_sensor(&self) -> Result<SensorReading, ProtocolError> {
        (*self.sensor.lock())
            .ok_or_else(|| ProtocolError::InvalidResponse("no temperature".to_string()))
    }
}

/// Accessory over a fake client, refreshed once.
pub async fn ready_accessory(devices: Vec<Appliance>) -> Accessory<FakeClient> {
    let accessory = Accessory::new(FakeClient::new(devices, 23.5), AccessoryConfig::new("AC")).unwrap();
    accessory.refresh().await.unwrap();
    accessory
}

/// Volume as the service would report it.
pub fn volume(raw: &str) -> AirVolume {
    raw.parse().unwrap()
}
