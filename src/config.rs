// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory configuration.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
#[cfg(feature = "http")]
use crate::protocol::HttpConfig;

/// Configuration for one air conditioner accessory.
///
/// Deserializes from the accessory block of the host's JSON configuration.
///
/// # Examples
///
/// ```
/// use remo_aircon::AccessoryConfig;
/// use std::time::Duration;
///
/// let config = AccessoryConfig::from_json(r#"{
///     "name": "Living Room AC",
///     "accessToken": "secret",
///     "airconId": "ac-1"
/// }"#).unwrap();
///
/// assert_eq!(config.aircon_id(), Some("ac-1"));
/// assert_eq!(config.refresh_interval(), Duration::from_secs(300));
///
/// // Programmatic construction
/// let config = AccessoryConfig::new("Bedroom AC")
///     .with_access_token("secret")
///     .with_refresh_interval(Duration::from_secs(60));
/// ```
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryConfig {
    name: String,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    aircon_id: Option<String>,
    #[serde(default = "default_refresh_interval")]
    refresh_interval: u64,
    #[serde(default)]
    api_base_url: Option<String>,
}

const fn default_refresh_interval() -> u64 {
    AccessoryConfig::DEFAULT_REFRESH_INTERVAL.as_secs()
}

impl AccessoryConfig {
    /// Default time between two refreshes.
    pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

    /// Creates a configuration with defaults for everything but the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access_token: None,
            aircon_id: None,
            refresh_interval: default_refresh_interval(),
            api_base_url: None,
        }
    }

    /// Parses and validates a JSON accessory block.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the block cannot be decoded, or
    /// `ConfigError::InvalidRefreshInterval` if the interval is zero.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the cloud API access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Selects an air conditioner by id instead of the first listed one.
    #[must_use]
    pub fn with_aircon_id(mut self, id: impl Into<String>) -> Self {
        self.aircon_id = Some(id.into());
        self
    }

    /// Sets the refresh interval, in whole seconds.
    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval.as_secs();
        self
    }

    /// Overrides the cloud API endpoint.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Returns the accessory name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured air conditioner id, if any.
    #[must_use]
    pub fn aircon_id(&self) -> Option<&str> {
        self.aircon_id.as_deref()
    }

    /// Returns the refresh interval.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }

    /// Returns the API endpoint override, if any.
    #[must_use]
    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    /// Checks the configuration for values the accessory cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRefreshInterval` if the interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval == 0 {
            return Err(ConfigError::InvalidRefreshInterval);
        }
        Ok(())
    }

    /// Builds the HTTP client configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingAccessToken` if no non-empty token is set.
    #[cfg(feature = "http")]
    pub fn http_config(&self) -> Result<HttpConfig, ConfigError> {
        let token = self
            .access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingAccessToken)?;

        let config = HttpConfig::new(token);
        Ok(match &self.api_base_url {
            Some(url) => config.with_base_url(url.as_str()),
            None => config,
        })
    }
}

impl fmt::Debug for AccessoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessoryConfig")
            .field("name", &self.name)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("aircon_id", &self.aircon_id)
            .field("refresh_interval", &self.refresh_interval())
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
