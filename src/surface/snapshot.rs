// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-tick snapshot of every externally-observable value.
//!
//! The push loop derives one of these from current device state on
//! every tick and hands it to the control-surface adapter, whether or
//! not anything changed. Inbound device reports become externally
//! visible only through this path, so their propagation delay is
//! bounded by the push interval.

use serde::{Deserialize, Serialize};

use super::values::{
    Active, CurrentClimateState, CurrentDehumidifierState, SwingSetting, TargetClimateState,
    TargetDehumidifierState, TemperatureDisplayUnits,
};

/// Values for the optional fan-mode sub-service of a climate unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanModeSnapshot {
    /// Whether the device is in fan-only operation.
    pub active: Active,
    /// Rotation speed percentage.
    pub rotation_speed: u8,
    /// Swing toggle.
    pub swing: SwingSetting,
}

/// Encoded values of every characteristic a device exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceSnapshot {
    /// Climate-unit characteristic values.
    Climate {
        /// Power toggle.
        active: Active,
        /// Observed heating/cooling activity.
        current_state: CurrentClimateState,
        /// Requested operating regime.
        target_state: TargetClimateState,
        /// Indoor temperature in °C.
        current_temperature: f64,
        /// Setpoint in °C (advertised on both threshold characteristics).
        target_temperature: f64,
        /// Rotation speed percentage.
        rotation_speed: u8,
        /// Swing toggle.
        swing: SwingSetting,
        /// Display-unit preference.
        display_units: TemperatureDisplayUnits,
        /// Fan-mode sub-service values, when enabled by override.
        fan_mode: Option<FanModeSnapshot>,
        /// Outdoor temperature in °C, when the sensor sub-service is
        /// enabled by override.
        outdoor_temperature: Option<f64>,
    },
    /// Dehumidifier characteristic values.
    Dehumidifier {
        /// Power toggle.
        active: Active,
        /// Observed activity.
        current_state: CurrentDehumidifierState,
        /// Requested program (always dehumidify).
        target_state: TargetDehumidifierState,
        /// Current relative humidity (percent).
        current_humidity: u8,
        /// Dehumidify threshold (percent).
        humidity_threshold: u8,
        /// Wind speed percentage.
        wind_speed: u8,
        /// Swing toggle.
        swing: SwingSetting,
        /// Tank water level (percent).
        water_level: u8,
    },
}

impl SurfaceSnapshot {
    /// Returns the power toggle value common to both archetypes.
    #[must_use]
    pub const fn active(&self) -> Active {
        match self {
            Self::Climate { active, .. } | Self::Dehumidifier { active, .. } => *active,
        }
    }
}
