// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `remo_aircon` library.
//!
//! The top-level [`Error`] is what every characteristic handler returns.
//! Remote failures are wrapped in [`Error::RemoteCallFailed`] so the host can
//! tell "the cloud rejected this" apart from "the accessory is not ready yet".

use thiserror::Error;

use crate::types::OperationMode;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// No device snapshot (or sensor reading) has been cached yet.
    ///
    /// Surfaced to the host as a failed get/set instead of a default value,
    /// so a freshly started accessory never reports false state.
    #[error("device is not initialized")]
    NotInitialized,

    /// The configured air conditioner is absent from the device listing.
    ///
    /// `id` is `None` when no id was configured and the listing was empty.
    #[error("device not found: {}", id.as_deref().unwrap_or("<first air conditioner>"))]
    DeviceNotFound {
        /// The configured device id, if any.
        id: Option<String>,
    },

    /// A call to the remote service failed.
    #[error("remote call failed: {0}")]
    RemoteCallFailed(#[from] ProtocolError),

    /// A value was outside what the device or characteristic accepts.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Cached device data could not be interpreted.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The accessory configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An unknown operation mode string was provided.
    #[error("invalid operation mode: {0}")]
    InvalidMode(String),

    /// An air volume string that is neither `auto` nor a step number.
    #[error("invalid air volume: {0}")]
    InvalidVolume(String),

    /// An unknown temperature unit string was provided.
    #[error("invalid temperature unit: {0}")]
    InvalidTemperatureUnit(String),

    /// A temperature that is not a finite number.
    #[error("invalid temperature: {0}")]
    InvalidTemperature(f64),

    /// The device's capability descriptor has no entry for the mode.
    #[error("device does not support mode {0}")]
    UnsupportedMode(OperationMode),

    /// The mode exposes neither numeric volume steps nor an auto marker.
    #[error("mode {0} has no air volume steps")]
    NoVolumeSteps(OperationMode),
}

/// Errors related to communication with the remote service.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The access token was rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The service is throttling requests.
    #[error("rate limited by remote service")]
    RateLimited,

    /// The service answered with an unexpected status code.
    #[error("HTTP {status} - {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Reason phrase or body excerpt.
        message: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors related to interpreting device data.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to the accessory configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No access token was configured.
    #[error("accessToken is required")]
    MissingAccessToken,

    /// The refresh interval must be at least one second.
    #[error("refresh interval must be greater than zero")]
    InvalidRefreshInterval,

    /// The configuration block could not be decoded.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
