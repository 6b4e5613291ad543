// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote command execution with rollback.

use crate::command::SettingsUpdate;
use crate::error::Error;
use crate::protocol::RemoteClient;
use crate::state::Speculation;

use super::Accessory;

impl<C: RemoteClient> Accessory<C> {
    /// Sends a settings update and commits the returned settings.
    pub(crate) async fn execute(&self, update: SettingsUpdate) -> Result<(), Error> {
        let device_id = self.state.read().require_device()?.id.clone();

        tracing::info!(
            accessory = self.name(),
            device = %device_id,
            update = %update,
            "Sending settings update"
        );

        let settings = self.client.update_settings(&device_id, &update).await?;

        tracing::debug!(
            device = %device_id,
            mode = %settings.mode,
            power = ?settings.power,
            "Settings update accepted"
        );
        self.state.write().commit_settings(settings);
        Ok(())
    }

    /// Settles a speculation that was already applied to the cache.
    ///
    /// With no update the speculation simply stands. Otherwise the update is
    /// sent and, if it fails, the speculated field is put back to the value
    /// it had before.
    pub(crate) async fn execute_speculative(
        &self,
        speculation: Speculation,
        update: Option<SettingsUpdate>,
    ) -> Result<(), Error> {
        let Some(update) = update else {
            return Ok(());
        };

        match self.execute(update).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(
                    accessory = self.name(),
                    change = ?speculation,
                    error = %e,
                    "Command failed, rolling back"
                );
                self.state.write().revert(&speculation);
                Err(e)
            }
        }
    }
}
