// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room sensor readings.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A bridge device from the device listing, reduced to its sensor events.
///
/// # Examples
///
/// ```
/// use remo_aircon::response::{RemoDevice, SensorReading};
///
/// let json = r#"[{
///     "id": "remo-1",
///     "name": "Remo",
///     "newest_events": {
///         "te": {"val": 23.4, "created_at": "2024-07-01T10:00:00Z"},
///         "hu": {"val": 48, "created_at": "2024-07-01T10:00:00Z"}
///     }
/// }]"#;
/// let devices: Vec<RemoDevice> = serde_json::from_str(json).unwrap();
/// let reading = SensorReading::from_devices(&devices).unwrap();
/// assert!((reading.temperature - 23.4).abs() < f64::EPSILON);
/// assert_eq!(reading.humidity, Some(48.0));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RemoDevice {
    /// Device id.
    pub id: String,
    /// User-assigned name.
    #[serde(default)]
    pub name: String,
    /// Latest value of each sensor.
    #[serde(default)]
    pub newest_events: NewestEvents,
}

/// Latest sensor events of a bridge device.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewestEvents {
    /// Temperature.
    #[serde(rename = "te", default)]
    pub temperature: Option<SensorEvent>,
    /// Relative humidity.
    #[serde(rename = "hu", default)]
    pub humidity: Option<SensorEvent>,
}

/// A single sensor event.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorEvent {
    /// Measured value.
    pub val: f64,
    /// When the value was measured.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Last known room reading: the sensor snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Room temperature.
    pub temperature: f64,
    /// Relative humidity, if the bridge has a humidity sensor.
    pub humidity: Option<f64>,
    /// When the temperature was measured.
    pub measured_at: Option<DateTime<Utc>>,
}

impl SensorReading {
    /// Creates a reading with only a temperature.
    #[must_use]
    pub fn new(temperature: f64) -> Self {
        Self {
            temperature,
            humidity: None,
            measured_at: None,
        }
    }

    /// Picks the reading of the first device that reports a temperature.
    #[must_use]
    pub fn from_devices(devices: &[RemoDevice]) -> Option<Self> {
        devices.iter().find_map(|device| {
            let events = &device.newest_events;
            events.temperature.as_ref().map(|te| Self {
                temperature: te.val,
                humidity: events.humidity.as_ref().map(|hu| hu.val),
                measured_at: te.created_at,
            })
        })
    }
}
