// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the cloud API client using wiremock.

use remo_aircon::command::SettingsUpdate;
use remo_aircon::protocol::{HttpClient, HttpConfig, RemoteClient};
use remo_aircon::types::{AirVolume, Button, OperationMode, PowerState, TargetHeaterCoolerState};
use remo_aircon::{Accessory, AccessoryConfig, Error, ProtocolError};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> HttpClient {
    HttpConfig::new(TOKEN)
        .with_base_url(server.uri())
        .into_client()
        .unwrap()
}

fn appliances_body() -> serde_json::Value {
    json!([
        {
            "id": "tv-1",
            "nickname": "TV",
            "type": "TV",
            "settings": null,
            "aircon": null
        },
        {
            "id": "ac-1",
            "nickname": "Living room",
            "type": "AC",
            "settings": {
                "temp": "26",
                "temp_unit": "c",
                "mode": "cool",
                "vol": "2",
                "dir": "",
                "button": "",
                "updated_at": "2024-07-01T10:00:00Z"
            },
            "aircon": {
                "range": {
                    "modes": {
                        "cool": {"temp": ["18", "19", "30"], "vol": ["1", "2", "3", "auto"], "dir": ["1", "2"]},
                        "warm": {"temp": ["14", "30"], "vol": ["1", "2", "3", "auto"], "dir": ["1", "2"]},
                        "dry": {"temp": ["-2", "0", "2"], "vol": ["auto"], "dir": ["1"]}
                    },
                    "fixedButtons": ["power-off", "airdir-swing"]
                },
                "tempUnit": "c"
            }
        },
        {
            "id": "ac-2",
            "nickname": "Bedroom",
            "type": "AC",
            "settings": {"temp": "22", "temp_unit": "c", "mode": "warm", "vol": "auto", "dir": "", "button": "power-off"},
            "aircon": {
                "range": {"modes": {"warm": {"temp": ["16", "30"], "vol": ["1", "2", "auto"], "dir": []}}},
                "tempUnit": "c"
            }
        }
    ])
}

/// The usual listing with an extra air conditioner whose settings carry an
/// empty mode and an unknown fan speed.
fn listing_with_malformed_aircon() -> serde_json::Value {
    let mut body = appliances_body();
    let broken = json!({
        "id": "ac-broken",
        "nickname": "Garage",
        "type": "AC",
        "settings": {"temp": "", "temp_unit": "c", "mode": "", "vol": "turbo", "dir": "", "button": ""},
        "aircon": {"range": {"modes": {}}, "tempUnit": "c"}
    });
    if let Some(records) = body.as_array_mut() {
        records.insert(1, broken);
    }
    body
}

fn devices_body() -> serde_json::Value {
    json!([
        {
            "id": "remo-mini",
            "name": "Remo mini",
            "newest_events": {}
        },
        {
            "id": "remo-1",
            "name": "Remo",
            "newest_events": {
                "te": {"val": 24.5, "created_at": "2024-07-01T10:00:00Z"},
                "hu": {"val": 55, "created_at": "2024-07-01T10:00:00Z"}
            }
        }
    ])
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn list_devices_returns_only_aircons() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/appliances"))
            .and(bearer_token(TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(appliances_body()))
            .mount(&mock_server)
            .await;

        let devices = client_for(&mock_server).list_devices().await.unwrap();

        let ids: Vec<&str> = devices.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["ac-1", "ac-2"]);
        assert_eq!(devices[0].settings.mode, OperationMode::Cool);
        assert_eq!(devices[0].settings.volume, Some(AirVolume::Step(2)));
        assert_eq!(devices[1].settings.power, PowerState::Off);
        assert!(devices[0].aircon.mode(OperationMode::Dry).is_some());
    }

    #[tokio::test]
    async fn update_settings_posts_form() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/appliances/ac-1/aircon_settings"))
            .and(bearer_token(TOKEN))
            .and(body_string("operation_mode=warm&temperature=22.5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "temp": "22.5",
                "temp_unit": "c",
                "mode": "warm",
                "vol": "auto",
                "dir": "",
                "button": ""
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let update = SettingsUpdate::mode(OperationMode::Warm)
            .with_temperature(22.5)
            .unwrap();
        let settings = client_for(&mock_server)
            .update_settings("ac-1", &update)
            .await
            .unwrap();

        assert_eq!(settings.mode, OperationMode::Warm);
        assert_eq!(settings.temperature, "22.5");
        assert_eq!(settings.volume, Some(AirVolume::Auto));
        assert!(settings.is_on());
    }

    #[tokio::test]
    async fn update_settings_sends_button() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/appliances/ac-1/aircon_settings"))
            .and(body_string("button=power-off"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "temp": "26", "mode": "cool", "vol": "1", "button": "power-off"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let update = SettingsUpdate::button(Button::PowerOff);
        let settings = client_for(&mock_server)
            .update_settings("ac-1", &update)
            .await
            .unwrap();

        assert_eq!(settings.power, PowerState::Off);
    }

    #[tokio::test]
    async fn update_settings_encodes_device_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/appliances/ac%201/aircon_settings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "temp": "26", "mode": "cool", "vol": "auto", "button": ""
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .update_settings("ac 1", &SettingsUpdate::volume(AirVolume::Auto))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn read_sensor_uses_first_device_with_temperature() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/devices"))
            .and(bearer_token(TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(devices_body()))
            .mount(&mock_server)
            .await;

        let reading = client_for(&mock_server).read_sensor().await.unwrap();

        assert!((reading.temperature - 24.5).abs() < f64::EPSILON);
        assert_eq!(reading.humidity, Some(55.0));
        assert!(reading.measured_at.is_some());
    }

    #[tokio::test]
    async fn list_devices_skips_undecodable_aircon() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/appliances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing_with_malformed_aircon()))
            .mount(&mock_server)
            .await;

        let devices = client_for(&mock_server).list_devices().await.unwrap();

        let ids: Vec<&str> = devices.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["ac-1", "ac-2"]);
    }
}

// ============================================================================
// Accessory over HTTP
// ============================================================================

mod accessory_over_http {
    use super::*;

    async fn mount_listing(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/1/appliances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(appliances_body()))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(devices_body()))
            .mount(server)
            .await;
    }

    fn config_for(server: &MockServer) -> AccessoryConfig {
        AccessoryConfig::new("Living room")
            .with_access_token(TOKEN)
            .with_api_base_url(server.uri())
    }

    #[tokio::test]
    async fn refresh_selects_first_aircon() {
        let mock_server = MockServer::start().await;
        mount_listing(&mock_server).await;

        let accessory = Accessory::from_config(config_for(&mock_server)).unwrap();
        accessory.refresh().await.unwrap();

        let state = accessory.state();
        assert_eq!(state.device().unwrap().id, "ac-1");
        assert!((accessory.get_current_temperature().unwrap() - 24.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn refresh_selects_configured_aircon() {
        let mock_server = MockServer::start().await;
        mount_listing(&mock_server).await;

        let config = config_for(&mock_server).with_aircon_id("ac-2");
        let accessory = Accessory::from_config(config).unwrap();
        accessory.refresh().await.unwrap();

        assert_eq!(accessory.state().device().unwrap().id, "ac-2");
    }

    #[tokio::test]
    async fn set_threshold_in_active_mode_posts_temperature() {
        let mock_server = MockServer::start().await;
        mount_listing(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/1/appliances/ac-1/aircon_settings"))
            .and(body_string("temperature=24"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "temp": "24", "temp_unit": "c", "mode": "cool", "vol": "2", "dir": "", "button": ""
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let accessory = Accessory::from_config(config_for(&mock_server)).unwrap();
        accessory.refresh().await.unwrap();

        accessory.set_cooling_threshold_temperature(24.0).await.unwrap();

        let state = accessory.state();
        assert_eq!(state.settings().unwrap().temperature, "24");
        assert!((accessory.get_cooling_threshold_temperature().unwrap() - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_config_requires_access_token() {
        let result = Accessory::from_config(AccessoryConfig::new("AC"));
        assert!(matches!(
            result,
            Err(Error::Config(remo_aircon::ConfigError::MissingAccessToken))
        ));
    }

    #[tokio::test]
    async fn configured_aircon_found_beside_malformed_one() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1/appliances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing_with_malformed_aircon()))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(devices_body()))
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server).with_aircon_id("ac-2");
        let accessory = Accessory::from_config(config).unwrap();
        accessory.refresh().await.unwrap();

        assert_eq!(accessory.state().device().unwrap().id, "ac-2");
        assert_eq!(
            accessory.get_target_heater_cooler_state().unwrap(),
            TargetHeaterCoolerState::Heat
        );
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[tokio::test]
    async fn unauthorized_is_authentication_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).list_devices().await;
        assert!(matches!(result, Err(ProtocolError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).read_sensor().await;
        assert!(matches!(result, Err(ProtocolError::RateLimited)));
    }

    #[tokio::test]
    async fn server_error_carries_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .update_settings("ac-1", &SettingsUpdate::power_off())
            .await;
        assert!(matches!(
            result,
            Err(ProtocolError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn invalid_json_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).list_devices().await;
        assert!(matches!(result, Err(ProtocolError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn no_temperature_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "remo-mini", "name": "Remo mini", "newest_events": {}}
            ])))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).read_sensor().await;
        assert!(matches!(result, Err(ProtocolError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn connection_refused() {
        let client = HttpConfig::new(TOKEN)
            .with_base_url("http://127.0.0.1:59999")
            .into_client()
            .unwrap();

        let result = client.list_devices().await;
        assert!(matches!(result, Err(ProtocolError::Http(_))));
    }
}
