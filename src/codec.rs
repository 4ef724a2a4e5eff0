// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cross-field value codec.
//!
//! Pure, stateless functions mapping between device state and the
//! control surface's characteristic values. The per-scale bucket
//! mappings live on the value types themselves
//! ([`FanSpeed`](crate::types::FanSpeed)); this module covers the
//! encodings that read more than one field, and the decodings that
//! need device capability to resolve.
//!
//! Every function is total: there is no input for which a mapping is
//! rejected, because the control surface's callback contract requires
//! handlers to always produce a value.

use crate::state::DeviceState;
use crate::surface::{
    Active, CurrentClimateState, CurrentDehumidifierState, SwingSetting, TargetClimateState,
    TargetDehumidifierState, TemperatureDisplayUnits,
};
use crate::types::{OperationalMode, PowerState, SwingAxis};

/// The only dehumidifier program the devices support, sharing the
/// native mode field's code space.
const DEHUMIDIFY_PROGRAM: u8 = 0;

/// Encodes the power state as the surface's Active value.
#[must_use]
pub const fn power_active(power: PowerState) -> Active {
    match power {
        PowerState::On => Active::Active,
        PowerState::Off => Active::Inactive,
    }
}

/// Decodes the surface's Active value into a power state.
#[must_use]
pub const fn power_for_active(active: Active) -> PowerState {
    match active {
        Active::Active => PowerState::On,
        Active::Inactive => PowerState::Off,
    }
}

/// Encodes the observed heating/cooling activity of a climate unit.
///
/// With the device powered off the state is Inactive. A reported
/// Cooling or Heating mode is taken at face value; for every other
/// mode the indoor/target comparison stands in as a heuristic: indoor
/// above target reads as cooling, otherwise heating.
#[must_use]
pub fn current_climate_state(state: &DeviceState) -> CurrentClimateState {
    if !state.power().is_on() {
        CurrentClimateState::Inactive
    } else if state.operational_mode() == OperationalMode::Cooling {
        CurrentClimateState::Cooling
    } else if state.operational_mode() == OperationalMode::Heating {
        CurrentClimateState::Heating
    } else if state.indoor_temperature() > state.target_temperature() {
        CurrentClimateState::Cooling
    } else {
        CurrentClimateState::Heating
    }
}

/// Encodes the operational mode as the surface's target climate state.
///
/// Cooling and Heating map to their counterparts; every other mode
/// (including FanOnly and Dry) reads as Auto.
#[must_use]
pub const fn target_climate_state(mode: OperationalMode) -> TargetClimateState {
    match mode {
        OperationalMode::Cooling => TargetClimateState::Cool,
        OperationalMode::Heating => TargetClimateState::Heat,
        _ => TargetClimateState::Auto,
    }
}

/// Decodes a requested target climate state into an operational mode.
///
/// FanOnly and Dry are not reachable through this characteristic;
/// the fan-mode path is the only way into FanOnly.
#[must_use]
pub const fn mode_for_target(target: TargetClimateState) -> OperationalMode {
    match target {
        TargetClimateState::Auto => OperationalMode::Auto,
        TargetClimateState::Cool => OperationalMode::Cooling,
        TargetClimateState::Heat => OperationalMode::Heating,
    }
}

/// Encodes whether the fan-mode sub-service is active.
///
/// Active exactly when the device is powered on in FanOnly mode.
#[must_use]
pub fn fan_mode_active(state: &DeviceState) -> Active {
    if state.operational_mode() == OperationalMode::FanOnly && state.power().is_on() {
        Active::Active
    } else {
        Active::Inactive
    }
}

/// Encodes a native swing code as the surface's toggle.
#[must_use]
pub const fn swing_setting(swing_code: u8) -> SwingSetting {
    if swing_code == 0 {
        SwingSetting::Disabled
    } else {
        SwingSetting::Enabled
    }
}

/// Decodes the surface's swing toggle into a native code.
///
/// Enabling engages the device's single supported configuration; a
/// device with no swing support yields 0, so an unsupported axis can
/// never be requested.
#[must_use]
pub const fn swing_code(setting: SwingSetting, supported: SwingAxis) -> u8 {
    match setting {
        SwingSetting::Disabled => 0,
        SwingSetting::Enabled => supported.as_code(),
    }
}

/// Encodes the display-unit preference.
#[must_use]
pub const fn display_units(use_fahrenheit: bool) -> TemperatureDisplayUnits {
    if use_fahrenheit {
        TemperatureDisplayUnits::Fahrenheit
    } else {
        TemperatureDisplayUnits::Celsius
    }
}

/// Decodes the display-unit preference.
#[must_use]
pub const fn use_fahrenheit_for(units: TemperatureDisplayUnits) -> bool {
    matches!(units, TemperatureDisplayUnits::Fahrenheit)
}

/// Encodes the observed activity of a dehumidifier.
///
/// Powered off reads as Inactive; the dehumidify program reads as
/// Dehumidifying. Any other reported program has no defined activity
/// and reads as Idle, the documented default.
#[must_use]
pub fn current_dehumidifier_state(state: &DeviceState) -> CurrentDehumidifierState {
    if !state.power().is_on() {
        CurrentDehumidifierState::Inactive
    } else if state.operational_mode().as_code() == DEHUMIDIFY_PROGRAM {
        CurrentDehumidifierState::Dehumidifying
    } else {
        CurrentDehumidifierState::Idle
    }
}

/// Encodes the requested dehumidifier program.
///
/// Only the dehumidify program exists on these devices, so the target
/// is constant regardless of the reported mode.
#[must_use]
pub const fn target_dehumidifier_state(_state: &DeviceState) -> TargetDehumidifierState {
    TargetDehumidifierState::Dehumidifier
}

/// Decodes a requested dehumidifier target into a native mode.
///
/// Humidifier and combined programs are explicitly unsupported; every
/// external value clamps onto the dehumidify program, which occupies
/// code 0 of the shared mode field.
#[must_use]
pub const fn mode_for_dehumidifier_target(_target: TargetDehumidifierState) -> OperationalMode {
    OperationalMode::Off
}
