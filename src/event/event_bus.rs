// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan-out of pushed characteristic values.

use tokio::sync::broadcast;

use super::CharacteristicUpdate;

/// A refresh publishes at most four updates; this leaves room for a host
/// that drains its receiver only every few refreshes.
const PUSH_BACKLOG: usize = 64;

/// Broadcast channel carrying [`CharacteristicUpdate`]s to the host.
///
/// Clones share one channel. A receiver that falls more than the backlog
/// behind skips the oldest values and sees `RecvError::Lagged`; for pushed
/// properties only the latest value matters anyway.
///
/// # Examples
///
/// ```
/// use remo_aircon::event::{CharacteristicUpdate, EventBus};
///
/// let bus = EventBus::new();
/// let mut host = bus.subscribe();
///
/// assert_eq!(bus.publish(CharacteristicUpdate::CurrentTemperature(22.0)), 1);
/// assert_eq!(host.try_recv().unwrap(), CharacteristicUpdate::CurrentTemperature(22.0));
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CharacteristicUpdate>,
}

impl EventBus {
    /// Bus with room for a few refreshes' worth of updates per receiver.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(PUSH_BACKLOG)
    }

    /// Bus whose receivers may fall `backlog` updates behind.
    ///
    /// # Panics
    ///
    /// Panics if `backlog` is 0.
    #[must_use]
    pub fn with_capacity(backlog: usize) -> Self {
        let (sender, _) = broadcast::channel(backlog);
        Self { sender }
    }

    /// Receiver for every update published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CharacteristicUpdate> {
        self.sender.subscribe()
    }

    /// Returns `true` while at least one receiver is alive.
    #[must_use]
    pub fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }

    /// Pushes an update and returns how many receivers got it.
    ///
    /// Updates published while nobody listens are dropped.
    pub fn publish(&self, update: CharacteristicUpdate) -> usize {
        let delivered = self.sender.send(update).unwrap_or(0);
        tracing::trace!(characteristic = %update.characteristic(), delivered, "Pushed");
        delivered
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
