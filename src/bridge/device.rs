// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Internal per-device entry of the bridge registry.

use tokio::task::JoinHandle;

use crate::codec;
use crate::overrides::ResolvedOverrides;
use crate::state::DeviceState;
use crate::surface::{FanModeSnapshot, SurfaceProperties, SurfaceSnapshot};
use crate::types::Archetype;

use super::config::DeviceConfig;

/// One registered device: its state, its declared characteristic set,
/// and the cancellation handle of its push loop.
pub(crate) struct BridgedDevice {
    /// Canonical device state.
    pub state: DeviceState,
    /// Characteristic properties declared at construction.
    pub properties: SurfaceProperties,
    /// Whether the fan-mode sub-service is exposed.
    pub fan_mode_enabled: bool,
    /// Whether the outdoor-temperature sub-service is exposed.
    pub outdoor_temperature_enabled: bool,
    /// Push-loop task handle, aborted on deregistration.
    pub push_task: Option<JoinHandle<()>>,
}

impl BridgedDevice {
    /// Builds the registry entry for a newly registered device.
    ///
    /// Overrides have already been resolved; this runs once and never
    /// repeats. An unrecognized device-type code leaves the device
    /// without characteristics instead of failing registration.
    pub fn new(config: &DeviceConfig, overrides: &ResolvedOverrides) -> Self {
        let archetype = Archetype::try_from(config.device_type).ok();

        let state = DeviceState::new(
            config.id.clone(),
            archetype,
            config.name.clone(),
            overrides.supported_swing,
            overrides.temperature_bounds,
        );

        let properties = match archetype {
            Some(Archetype::ClimateUnit) => {
                SurfaceProperties::climate(overrides.temperature_bounds)
            }
            Some(Archetype::Dehumidifier) => SurfaceProperties::dehumidifier(),
            None => {
                tracing::error!(
                    device_id = %config.id,
                    device_type = config.device_type,
                    "Unsupported device type, exposing no characteristics"
                );
                SurfaceProperties::Unsupported
            }
        };

        tracing::info!(
            device_id = %config.id,
            name = %config.name,
            model = %state.model(),
            "Created device"
        );

        // The optional sub-services only exist on climate units.
        let is_climate = matches!(archetype, Some(Archetype::ClimateUnit));

        Self {
            state,
            properties,
            fan_mode_enabled: is_climate && overrides.fan_only_mode,
            outdoor_temperature_enabled: is_climate && overrides.outdoor_temperature,
            push_task: None,
        }
    }

    /// Re-derives every externally-observable value from current
    /// state.
    ///
    /// Returns `None` for devices without characteristics.
    pub fn snapshot(&self) -> Option<SurfaceSnapshot> {
        match self.state.archetype()? {
            Archetype::ClimateUnit => Some(SurfaceSnapshot::Climate {
                active: codec::power_active(self.state.power()),
                current_state: codec::current_climate_state(&self.state),
                target_state: codec::target_climate_state(self.state.operational_mode()),
                current_temperature: self.state.indoor_temperature(),
                target_temperature: self.state.target_temperature(),
                rotation_speed: self.state.fan_speed().rotation_percent(),
                swing: codec::swing_setting(self.state.swing_mode()),
                display_units: codec::display_units(self.state.use_fahrenheit()),
                fan_mode: self.fan_mode_enabled.then(|| FanModeSnapshot {
                    active: codec::fan_mode_active(&self.state),
                    rotation_speed: self.state.fan_speed().rotation_percent(),
                    swing: codec::swing_setting(self.state.swing_mode()),
                }),
                outdoor_temperature: self
                    .outdoor_temperature_enabled
                    .then(|| self.state.outdoor_temperature()),
            }),
            Archetype::Dehumidifier => Some(SurfaceSnapshot::Dehumidifier {
                active: codec::power_active(self.state.power()),
                current_state: codec::current_dehumidifier_state(&self.state),
                target_state: codec::target_dehumidifier_state(&self.state),
                current_humidity: self.state.current_humidity(),
                humidity_threshold: self.state.target_humidity(),
                wind_speed: self.state.fan_speed().wind_percent(),
                swing: codec::swing_setting(self.state.swing_mode()),
                water_level: self.state.water_level(),
            }),
        }
    }

    /// Aborts the push loop, if one is running.
    pub fn abort_push_task(&mut self) {
        if let Some(task) = self.push_task.take() {
            task.abort();
        }
    }
}

impl std::fmt::Debug for BridgedDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgedDevice")
            .field("id", &self.state.id())
            .field("model", &self.state.model())
            .field("fan_mode_enabled", &self.fan_mode_enabled)
            .field(
                "outdoor_temperature_enabled",
                &self.outdoor_temperature_enabled,
            )
            .finish_non_exhaustive()
    }
}
