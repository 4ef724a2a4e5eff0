// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the fundamental building blocks for updating
//! device state. They come from two directions: decoded external set
//! requests, and inbound device status reports. Applying a change to a
//! [`DeviceState`](super::DeviceState) reports whether anything
//! actually changed; the synchronization engine transmits to the
//! device exactly when it did.
//!
//! # Examples
//!
//! ```
//! use climabridge::state::StateChange;
//! use climabridge::types::{OperationalMode, PowerState};
//!
//! // A single set on the fan-mode characteristic can produce two
//! // logical changes but only one transmission: batch them.
//! let change = StateChange::Batch(vec![
//!     StateChange::Power(PowerState::On),
//!     StateChange::Mode(OperationalMode::FanOnly),
//! ]);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{FanSpeed, OperationalMode, PowerState};

/// Represents a change in device state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateChange {
    /// Power state changed.
    Power(PowerState),

    /// Operational mode changed.
    Mode(OperationalMode),

    /// Target temperature setpoint changed (°C).
    TargetTemperature(f64),

    /// Display-unit preference changed (`true` = Fahrenheit).
    UseFahrenheit(bool),

    /// Fan speed changed.
    FanSpeed(FanSpeed),

    /// Swing state changed (native code; 0 = off).
    Swing(u8),

    /// Dehumidify threshold changed (percent).
    TargetHumidity(u8),

    /// Device reported a new indoor temperature (°C).
    IndoorTemperature(f64),

    /// Device reported a new outdoor temperature (°C).
    OutdoorTemperature(f64),

    /// Device reported a new relative humidity (percent).
    CurrentHumidity(u8),

    /// Device reported a new tank water level (percent).
    WaterLevel(u8),

    /// Multiple changes applied together.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a power-on change.
    #[must_use]
    pub const fn power_on() -> Self {
        Self::Power(PowerState::On)
    }

    /// Creates a power-off change.
    #[must_use]
    pub const fn power_off() -> Self {
        Self::Power(PowerState::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_helpers() {
        assert_eq!(StateChange::power_on(), StateChange::Power(PowerState::On));
        assert_eq!(StateChange::power_off(), StateChange::Power(PowerState::Off));
    }

    #[test]
    fn serde_round_trip() {
        let change = StateChange::Batch(vec![
            StateChange::Power(PowerState::On),
            StateChange::FanSpeed(FanSpeed::Medium),
            StateChange::TargetTemperature(22.5),
        ]);

        let json = serde_json::to_string(&change).unwrap();
        let back: StateChange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }
}
