// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Characteristic get and set handlers.

use crate::command::SettingsUpdate;
use crate::error::{Error, ValueError};
use crate::event::ThresholdProps;
use crate::mapping;
use crate::protocol::RemoteClient;
use crate::state::{Speculation, ThresholdKind};
use crate::types::{
    Active, AirVolume, Characteristic, CurrentHeaterCoolerState, RotationSpeed, SwingMode,
    TargetHeaterCoolerState, TemperatureDisplayUnits,
};

use super::Accessory;

impl<C: RemoteClient> Accessory<C> {
    // ========== Active ==========

    /// Returns whether the unit is on.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh.
    pub fn get_active(&self) -> Result<Active, Error> {
        let value = mapping::active(self.state.read().settings()?);
        log_get(Characteristic::Active, value);
        Ok(value)
    }

    /// Switches the unit on or off.
    ///
    /// Switching on re-sends the last known mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh,
    /// or `Error::RemoteCallFailed` if the service rejects the command.
    pub async fn set_active(&self, value: Active) -> Result<(), Error> {
        let update = mapping::power_update(self.state.read().settings()?, value);
        self.apply_update(Characteristic::Active, value, update).await
    }

    // ========== Heater-cooler state ==========

    /// Returns what the unit is currently doing.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh.
    pub fn get_current_heater_cooler_state(&self) -> Result<CurrentHeaterCoolerState, Error> {
        let value = mapping::current_state(self.state.read().settings()?);
        log_get(Characteristic::CurrentHeaterCoolerState, value);
        Ok(value)
    }

    /// Returns the target state derived from the cached mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh.
    pub fn get_target_heater_cooler_state(&self) -> Result<TargetHeaterCoolerState, Error> {
        let value = mapping::target_state(self.state.read().settings()?.mode);
        log_get(Characteristic::TargetHeaterCoolerState, value);
        Ok(value)
    }

    /// Switches the operating mode.
    ///
    /// Heat and cool also send the remembered threshold of that mode, if
    /// there is one.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh,
    /// or `Error::RemoteCallFailed` if the service rejects the command.
    pub async fn set_target_heater_cooler_state(
        &self,
        value: TargetHeaterCoolerState,
    ) -> Result<(), Error> {
        let update = {
            let state = self.state.read();
            mapping::target_state_update(state.settings()?, value, state.thresholds())?
        };
        self.apply_update(Characteristic::TargetHeaterCoolerState, value, update)
            .await
    }

    // ========== Temperatures ==========

    /// Returns the room temperature from the last sensor reading.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the sensor was first read.
    pub fn get_current_temperature(&self) -> Result<f64, Error> {
        let value = self.state.read().require_sensor()?.temperature;
        log_get(Characteristic::CurrentTemperature, value);
        Ok(value)
    }

    /// Returns a threshold temperature.
    ///
    /// A threshold that was never set is seeded from the device's current
    /// target temperature and remembered from then on.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh,
    /// or `Error::Parse` if there is nothing numeric to seed from.
    pub fn get_threshold(&self, kind: ThresholdKind) -> Result<f64, Error> {
        if let Some(value) = self.state.read().thresholds().get(kind) {
            log_get(kind.characteristic(), value);
            return Ok(value);
        }

        let mut state = self.state.write();
        // Another caller may have seeded it in between
        let value = match state.thresholds().get(kind) {
            Some(value) => value,
            None => mapping::seed_threshold(state.settings()?, &state.catalog(), kind)?,
        };
        state.thresholds_mut().set(kind, value);
        drop(state);

        log_get(kind.characteristic(), value);
        Ok(value)
    }

    /// Sets a threshold temperature.
    ///
    /// The value is remembered right away. The device is only told while it
    /// runs in the threshold's mode; if that command fails the previous value
    /// is restored.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh,
    /// `Error::Value` for non-finite values, or `Error::RemoteCallFailed` if
    /// the service rejects the command.
    pub async fn set_threshold(&self, kind: ThresholdKind, value: f64) -> Result<(), Error> {
        if !value.is_finite() {
            return Err(ValueError::InvalidTemperature(value).into());
        }

        let (speculation, update) = {
            let mut state = self.state.write();
            let settings = state.settings()?;
            let current = state
                .thresholds()
                .get(kind)
                .or_else(|| mapping::seed_threshold(settings, &state.catalog(), kind).ok());

            if current.is_some_and(|current| (current - value).abs() < f64::EPSILON) {
                tracing::debug!(characteristic = %kind.characteristic(), value, "Unchanged, skipping");
                return Ok(());
            }

            let update = mapping::threshold_update(kind, value, settings.mode)?;
            let speculation = Speculation::threshold(&state, kind, value);
            state.apply(&speculation);
            (speculation, update)
        };

        tracing::info!(
            accessory = self.name(),
            characteristic = %kind.characteristic(),
            value,
            remote = update.is_some(),
            "Set"
        );
        self.execute_speculative(speculation, update).await
    }

    /// Returns the cooling threshold.
    ///
    /// # Errors
    ///
    /// See [`get_threshold`](Self::get_threshold).
    pub fn get_cooling_threshold_temperature(&self) -> Result<f64, Error> {
        self.get_threshold(ThresholdKind::Cooling)
    }

    /// Sets the cooling threshold.
    ///
    /// # Errors
    ///
    /// See [`set_threshold`](Self::set_threshold).
    pub async fn set_cooling_threshold_temperature(&self, value: f64) -> Result<(), Error> {
        self.set_threshold(ThresholdKind::Cooling, value).await
    }

    /// Returns the heating threshold.
    ///
    /// # Errors
    ///
    /// See [`get_threshold`](Self::get_threshold).
    pub fn get_heating_threshold_temperature(&self) -> Result<f64, Error> {
        self.get_threshold(ThresholdKind::Heating)
    }

    /// Sets the heating threshold.
    ///
    /// # Errors
    ///
    /// See [`set_threshold`](Self::set_threshold).
    pub async fn set_heating_threshold_temperature(&self, value: f64) -> Result<(), Error> {
        self.set_threshold(ThresholdKind::Heating, value).await
    }

    /// Returns the valid range of a threshold for the cached device.
    ///
    /// `None` until a device is cached or when its descriptor has no numeric
    /// bounds for the threshold's mode.
    #[must_use]
    pub fn threshold_props(&self, kind: ThresholdKind) -> Option<ThresholdProps> {
        self.state
            .read()
            .catalog()
            .temperature_bounds(kind.mode())
            .map(ThresholdProps::from_bounds)
    }

    /// Returns the unit the device displays temperatures in.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh.
    pub fn get_display_units(&self) -> Result<TemperatureDisplayUnits, Error> {
        let value = mapping::display_units(self.state.read().settings()?.temperature_unit);
        log_get(Characteristic::TemperatureDisplayUnits, value);
        Ok(value)
    }

    // ========== Fan ==========

    /// Returns the fan speed as a percentage; auto reads as 0.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh,
    /// or `Error::Value` if the current mode has no fan steps.
    pub fn get_rotation_speed(&self) -> Result<RotationSpeed, Error> {
        let value = {
            let state = self.state.read();
            let settings = state.settings()?;
            match settings.volume {
                Some(AirVolume::Step(_)) => {
                    let steps = state.catalog().volume_steps(settings.mode)?;
                    mapping::volume_to_speed(settings.volume, steps)
                }
                Some(AirVolume::Auto) | None => RotationSpeed::MIN,
            }
        };
        log_get(Characteristic::RotationSpeed, value);
        Ok(value)
    }

    /// Sets the fan speed.
    ///
    /// 0 selects auto when the current mode offers it. Nothing is sent when
    /// the resulting step equals the cached one.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh,
    /// `Error::Value` if the current mode has no fan steps, or
    /// `Error::RemoteCallFailed` if the service rejects the command.
    pub async fn set_rotation_speed(&self, value: RotationSpeed) -> Result<(), Error> {
        let update = {
            let state = self.state.read();
            let settings = state.settings()?;
            let steps = state.catalog().volume_steps(settings.mode)?;
            let volume = mapping::speed_to_volume(value, steps);
            (settings.volume != Some(volume)).then(|| SettingsUpdate::volume(volume))
        };
        self.apply_update(Characteristic::RotationSpeed, value, update)
            .await
    }

    // ========== Swing ==========

    /// Returns the swing shadow.
    ///
    /// The service keeps no swing state, so this is whatever was last set
    /// through this accessory.
    #[must_use]
    pub fn get_swing_mode(&self) -> SwingMode {
        let value = self.state.read().swing();
        log_get(Characteristic::SwingMode, value);
        value
    }

    /// Sets the swing mode by toggling the louvers.
    ///
    /// Ignored while the unit is off. The shadow flips before the toggle is
    /// sent and flips back if it fails.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before the first successful refresh,
    /// or `Error::RemoteCallFailed` if the service rejects the command.
    pub async fn set_swing_mode(&self, value: SwingMode) -> Result<(), Error> {
        let speculation = {
            let mut state = self.state.write();
            if !state.settings()?.is_on() {
                tracing::debug!(characteristic = %Characteristic::SwingMode, "Unit is off, ignoring");
                return Ok(());
            }
            if state.swing() == value {
                tracing::debug!(characteristic = %Characteristic::SwingMode, "Unchanged, skipping");
                return Ok(());
            }
            let speculation = Speculation::swing(&state);
            state.apply(&speculation);
            speculation
        };

        tracing::info!(
            accessory = self.name(),
            characteristic = %Characteristic::SwingMode,
            value = ?value,
            "Set"
        );
        self.execute_speculative(speculation, Some(SettingsUpdate::toggle_swing()))
            .await
    }

    // ========== Helpers ==========

    async fn apply_update<V: std::fmt::Debug + Send>(
        &self,
        characteristic: Characteristic,
        value: V,
        update: Option<SettingsUpdate>,
    ) -> Result<(), Error> {
        let Some(update) = update else {
            tracing::debug!(characteristic = %characteristic, value = ?value, "Unchanged, skipping");
            return Ok(());
        };
        tracing::info!(
            accessory = self.name(),
            characteristic = %characteristic,
            value = ?value,
            "Set"
        );
        self.execute(update).await
    }
}

fn log_get<V: std::fmt::Debug>(characteristic: Characteristic, value: V) {
    tracing::debug!(characteristic = %characteristic, value = ?value, "Get");
}
