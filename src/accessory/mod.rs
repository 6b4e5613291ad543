// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater-cooler accessory backed by one air conditioner.
//!
//! [`Accessory`] is what the host talks to: one get/set pair per
//! characteristic, answered from a cached mirror of the remote device.
//! The cache is filled by [`Accessory::refresh`], which a background poller
//! runs once at startup and then on a fixed interval.
//!
//! # Reads
//!
//! Gets never touch the network. Until the first refresh succeeds they fail
//! with [`Error::NotInitialized`] instead of reporting a made-up value.
//!
//! # Writes
//!
//! Sets compute the minimal settings update for the requested value and skip
//! the remote call entirely when the device already reports it. Values the
//! accessory owns locally (the two thresholds and the swing shadow) are
//! changed before the remote call and restored if it fails; the settings the
//! service returns replace the cached ones on success.
//!
//! ```no_run
//! use remo_aircon::{Accessory, AccessoryConfig};
//! use remo_aircon::types::{Active, TargetHeaterCoolerState};
//!
//! # async fn example() -> remo_aircon::Result<()> {
//! let config = AccessoryConfig::new("Living Room AC").with_access_token("token");
//! let accessory = Accessory::from_config(config)?;
//! let _poller = accessory.start();
//!
//! accessory.set_target_heater_cooler_state(TargetHeaterCoolerState::Cool).await?;
//! accessory.set_active(Active::Active).await?;
//! # Ok(())
//! # }
//! ```

mod characteristics;
mod executor;
mod poller;

pub use poller::PollerHandle;

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::config::AccessoryConfig;
use crate::error::Error;
use crate::event::{CharacteristicUpdate, EventBus};
#[cfg(feature = "http")]
use crate::protocol::HttpClient;
use crate::protocol::RemoteClient;
use crate::state::AccessoryState;

/// A heater-cooler accessory for one air conditioner.
///
/// Cloning is cheap; clones share the same cache, client and event bus.
///
/// # Type Parameter
///
/// `C` is the remote client. [`HttpClient`] talks to the cloud API; tests
/// use an in-memory implementation of [`RemoteClient`].
pub struct Accessory<C: RemoteClient> {
    client: Arc<C>,
    state: Arc<RwLock<AccessoryState>>,
    events: EventBus,
    config: Arc<AccessoryConfig>,
}

impl<C: RemoteClient> Accessory<C> {
    /// Creates an accessory with an empty cache.
    ///
    /// Nothing is fetched until [`refresh`](Self::refresh) or
    /// [`start`](Self::start) is called.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(client: C, config: AccessoryConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            client: Arc::new(client),
            state: Arc::new(RwLock::new(AccessoryState::new())),
            events: EventBus::new(),
            config: Arc::new(config),
        })
    }

    /// Creates an accessory and starts its poller.
    ///
    /// The first refresh runs right away in the background.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn spawn(client: C, config: AccessoryConfig) -> Result<(Self, PollerHandle), Error> {
        let accessory = Self::new(client, config)?;
        let poller = accessory.start();
        Ok((accessory, poller))
    }

    /// Returns the configured accessory name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AccessoryConfig {
        &self.config
    }

    /// Returns the remote client.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns a copy of the cached state.
    #[must_use]
    pub fn state(&self) -> AccessoryState {
        self.state.read().clone()
    }

    /// Subscribes to pushed characteristic updates.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CharacteristicUpdate> {
        self.events.subscribe()
    }
}

#[cfg(feature = "http")]
impl Accessory<HttpClient> {
    /// Creates an accessory talking to the cloud API.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid or has no
    /// access token, or `Error::RemoteCallFailed` if the HTTP client cannot
    /// be built.
    pub fn from_config(config: AccessoryConfig) -> Result<Self, Error> {
        let client = config.http_config()?.into_client()?;
        Self::new(client, config)
    }
}

impl<C: RemoteClient> Clone for Accessory<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            state: Arc::clone(&self.state),
            events: self.events.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: RemoteClient> fmt::Debug for Accessory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessory")
            .field("config", &self.config)
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}
