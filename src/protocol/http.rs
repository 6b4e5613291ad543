// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the Nature Remo cloud API.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::command::SettingsUpdate;
use crate::error::ProtocolError;
use crate::protocol::RemoteClient;
use crate::response::{AirconSettings, Appliance, ApplianceRecord, RemoDevice, SensorReading};

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for the cloud API client.
///
/// # Examples
///
/// ```
/// use remo_aircon::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("token")
///     .with_base_url("http://127.0.0.1:8080/")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://127.0.0.1:8080");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    access_token: String,
    base_url: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Production API endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.nature.global";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with the given access token.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the API endpoint. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not HTTP(S) or the HTTP client cannot
    /// be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("remo_aircon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url,
            access_token: self.access_token,
            client,
        })
    }
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// Cloud API client.
///
/// Uses `GET /1/appliances`, `POST /1/appliances/{id}/aircon_settings` and
/// `GET /1/devices`, authenticated with a bearer token.
///
/// # Examples
///
/// ```no_run
/// use remo_aircon::protocol::{HttpClient, RemoteClient};
///
/// # async fn example() -> Result<(), remo_aircon::ProtocolError> {
/// let client = HttpClient::new("my-access-token")?;
/// let aircons = client.list_devices().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    access_token: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(access_token: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(access_token).into_client()
    }

    /// Returns the API endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProtocolError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Sending GET request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        decode(response).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ProtocolError> {
        let url = self.url(path);
        tracing::debug!(url = %url, params = ?params, "Sending POST request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .form(params)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        decode(response).await
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ProtocolError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(ProtocolError::AuthenticationFailed);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProtocolError::RateLimited);
    }

    if !status.is_success() {
        return Err(ProtocolError::Status {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let body = response.text().await.map_err(ProtocolError::Http)?;
    tracing::trace!(body = %body, "Received HTTP response");

    serde_json::from_str(&body).map_err(|e| ProtocolError::InvalidResponse(e.to_string()))
}

impl RemoteClient for HttpClient {
    async fn list_devices(&self) -> Result<Vec<Appliance>, ProtocolError> {
        let records: Vec<serde_json::Value> = self.get("/1/appliances").await?;
        let total = records.len();

        let aircons: Vec<Appliance> = records
            .into_iter()
            .filter_map(|value| {
                let id = value
                    .get("id")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                match ApplianceRecord::from_value(value) {
                    Ok(record) => record.into_aircon(),
                    Err(e) => {
                        tracing::warn!(appliance = %id, error = %e, "Skipping undecodable appliance");
                        None
                    }
                }
            })
            .collect();

        tracing::debug!(total, aircons = aircons.len(), "Listed appliances");
        Ok(aircons)
    }

    async fn update_settings(
        &self,
        device_id: &str,
        update: &SettingsUpdate,
    ) -> Result<AirconSettings, ProtocolError> {
        let path = format!(
            "/1/appliances/{}/aircon_settings",
            urlencoding::encode(device_id)
        );
        self.post_form(&path, &update.form_params()).await
    }

    async fn read_sensor(&self) -> Result<SensorReading, ProtocolError> {
        let devices: Vec<RemoDevice> = self.get("/1/devices").await?;
        SensorReading::from_devices(&devices).ok_or_else(|| {
            ProtocolError::InvalidResponse("no device reports a temperature".to_string())
        })
    }
}
