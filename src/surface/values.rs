// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Externally-observable characteristic values.
//!
//! The control surface speaks in small numeric enumerations. Each type
//! here carries its wire number (`as_num`) and a total decoder
//! (`from_num`) that clamps unknown numbers onto a defined value;
//! set handlers must always complete, so there is no reject path.

use serde::{Deserialize, Serialize};

/// Whether a service is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Active {
    /// The service is inactive (wire value 0).
    Inactive,
    /// The service is active (wire value 1).
    Active,
}

impl Active {
    /// Returns the wire number.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    /// Decodes a wire number; anything other than 1 is inactive.
    #[must_use]
    pub const fn from_num(value: u8) -> Self {
        if value == 1 { Self::Active } else { Self::Inactive }
    }

    /// Returns `true` for [`Active::Active`].
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Observed heating/cooling activity of a climate unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrentClimateState {
    /// Powered off (wire value 0).
    Inactive,
    /// Powered on without heat exchange (wire value 1).
    Idle,
    /// Actively heating (wire value 2).
    Heating,
    /// Actively cooling (wire value 3).
    Cooling,
}

impl CurrentClimateState {
    /// Returns the wire number.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Idle => 1,
            Self::Heating => 2,
            Self::Cooling => 3,
        }
    }
}

/// Requested operating regime of a climate unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetClimateState {
    /// Let the device choose (wire value 0).
    Auto,
    /// Heat towards the setpoint (wire value 1).
    Heat,
    /// Cool towards the setpoint (wire value 2).
    Cool,
}

impl TargetClimateState {
    /// Returns the wire number.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Heat => 1,
            Self::Cool => 2,
        }
    }

    /// Decodes a wire number; unknown numbers clamp to Auto.
    #[must_use]
    pub const fn from_num(value: u8) -> Self {
        match value {
            1 => Self::Heat,
            2 => Self::Cool,
            _ => Self::Auto,
        }
    }
}

/// Display-unit preference for temperatures.
///
/// Display only: stored and transmitted temperatures are always
/// Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureDisplayUnits {
    /// Celsius (wire value 0).
    Celsius,
    /// Fahrenheit (wire value 1).
    Fahrenheit,
}

impl TemperatureDisplayUnits {
    /// Returns the wire number.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Celsius => 0,
            Self::Fahrenheit => 1,
        }
    }

    /// Decodes a wire number; anything other than 1 is Celsius.
    #[must_use]
    pub const fn from_num(value: u8) -> Self {
        if value == 1 { Self::Fahrenheit } else { Self::Celsius }
    }
}

/// Swing toggle as seen by the control surface.
///
/// There is no axis selection here: enabling swing engages whatever
/// single axis configuration the device supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwingSetting {
    /// Swing off (wire value 0).
    Disabled,
    /// Swing on (wire value 1).
    Enabled,
}

impl SwingSetting {
    /// Returns the wire number.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }

    /// Decodes a wire number; 0 disables, anything else enables.
    #[must_use]
    pub const fn from_num(value: u8) -> Self {
        if value == 0 { Self::Disabled } else { Self::Enabled }
    }
}

/// Observed activity of a dehumidifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrentDehumidifierState {
    /// Powered off (wire value 0).
    Inactive,
    /// Powered on but not currently dehumidifying (wire value 1).
    Idle,
    /// Humidifying (wire value 2, never produced by this bridge).
    Humidifying,
    /// Actively dehumidifying (wire value 3).
    Dehumidifying,
}

impl CurrentDehumidifierState {
    /// Returns the wire number.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Idle => 1,
            Self::Humidifying => 2,
            Self::Dehumidifying => 3,
        }
    }
}

/// Requested program of a humidifier/dehumidifier service.
///
/// Only [`TargetDehumidifierState::Dehumidifier`] is supported by the
/// devices this bridge targets; the other values exist in the surface
/// vocabulary but decode onto the dehumidify program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetDehumidifierState {
    /// Either direction, device decides (wire value 0).
    Either,
    /// Humidify (wire value 1).
    Humidifier,
    /// Dehumidify (wire value 2).
    Dehumidifier,
}

impl TargetDehumidifierState {
    /// Returns the wire number.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Either => 0,
            Self::Humidifier => 1,
            Self::Dehumidifier => 2,
        }
    }

    /// Decodes a wire number; unknown numbers clamp to Dehumidifier.
    #[must_use]
    pub const fn from_num(value: u8) -> Self {
        match value {
            0 => Self::Either,
            1 => Self::Humidifier,
            _ => Self::Dehumidifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_is_binary() {
        assert_eq!(Active::from_num(1), Active::Active);
        assert_eq!(Active::from_num(0), Active::Inactive);
        assert_eq!(Active::from_num(7), Active::Inactive);
        assert!(Active::Active.is_active());
        assert!(!Active::Inactive.is_active());
    }

    #[test]
    fn target_climate_state_round_trip() {
        for state in [
            TargetClimateState::Auto,
            TargetClimateState::Heat,
            TargetClimateState::Cool,
        ] {
            assert_eq!(TargetClimateState::from_num(state.as_num()), state);
        }
    }

    #[test]
    fn target_climate_state_clamps_unknown() {
        assert_eq!(TargetClimateState::from_num(99), TargetClimateState::Auto);
    }

    #[test]
    fn display_units_round_trip() {
        assert_eq!(
            TemperatureDisplayUnits::from_num(0),
            TemperatureDisplayUnits::Celsius
        );
        assert_eq!(
            TemperatureDisplayUnits::from_num(1),
            TemperatureDisplayUnits::Fahrenheit
        );
        assert_eq!(
            TemperatureDisplayUnits::from_num(42),
            TemperatureDisplayUnits::Celsius
        );
    }

    #[test]
    fn swing_setting_decode() {
        assert_eq!(SwingSetting::from_num(0), SwingSetting::Disabled);
        assert_eq!(SwingSetting::from_num(1), SwingSetting::Enabled);
        assert_eq!(SwingSetting::from_num(200), SwingSetting::Enabled);
    }

    #[test]
    fn current_state_wire_numbers() {
        assert_eq!(CurrentClimateState::Inactive.as_num(), 0);
        assert_eq!(CurrentClimateState::Idle.as_num(), 1);
        assert_eq!(CurrentClimateState::Heating.as_num(), 2);
        assert_eq!(CurrentClimateState::Cooling.as_num(), 3);
        assert_eq!(CurrentDehumidifierState::Dehumidifying.as_num(), 3);
    }

    #[test]
    fn target_dehumidifier_state_clamps_unknown() {
        assert_eq!(
            TargetDehumidifierState::from_num(9),
            TargetDehumidifierState::Dehumidifier
        );
        assert_eq!(
            TargetDehumidifierState::from_num(1),
            TargetDehumidifierState::Humidifier
        );
    }
}
