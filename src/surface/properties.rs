// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static characteristic properties advertised to the control surface.
//!
//! Computed once at device construction and never changed: the adapter
//! uses them to declare slider ranges and valid enumeration values
//! when it registers characteristics.

use crate::types::TemperatureBounds;

use super::values::{TargetClimateState, TargetDehumidifierState, TemperatureDisplayUnits};

/// Target states a climate unit accepts.
const CLIMATE_TARGET_STATES: &[TargetClimateState] = &[
    TargetClimateState::Auto,
    TargetClimateState::Heat,
    TargetClimateState::Cool,
];

/// Display units a climate unit accepts.
const CLIMATE_DISPLAY_UNITS: &[TemperatureDisplayUnits] = &[
    TemperatureDisplayUnits::Fahrenheit,
    TemperatureDisplayUnits::Celsius,
];

/// Target states a dehumidifier accepts (dehumidify only).
const DEHUMIDIFIER_TARGET_STATES: &[TargetDehumidifierState] =
    &[TargetDehumidifierState::Dehumidifier];

/// A numeric characteristic's advertised range and granularity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Minimum advertised value.
    pub min: f64,
    /// Maximum advertised value.
    pub max: f64,
    /// Advertised step between selectable values.
    pub step: f64,
}

impl ValueRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }
}

/// Declared characteristic set of one device.
///
/// The variant is selected by archetype at construction. A device
/// registered with an unsupported type code gets
/// [`SurfaceProperties::Unsupported`]: no characteristics at all, the
/// documented degraded state.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceProperties {
    /// Heater/cooler service properties.
    Climate {
        /// Range for the current-temperature reading.
        current_temperature: ValueRange,
        /// Range for the heating/cooling threshold setpoints.
        target_temperature: ValueRange,
        /// Target states the device accepts.
        valid_target_states: &'static [TargetClimateState],
        /// Display units the device accepts.
        valid_display_units: &'static [TemperatureDisplayUnits],
    },
    /// Dehumidifier service properties.
    Dehumidifier {
        /// Range for the current-humidity reading.
        current_humidity: ValueRange,
        /// Range for the dehumidifier threshold setpoint.
        humidity_threshold: ValueRange,
        /// Target states the device accepts (dehumidify only).
        valid_target_states: &'static [TargetDehumidifierState],
    },
    /// No characteristics exposed (unsupported device type).
    Unsupported,
}

impl SurfaceProperties {
    /// Builds climate-unit properties from the device's temperature
    /// capability.
    #[must_use]
    pub const fn climate(bounds: TemperatureBounds) -> Self {
        Self::Climate {
            current_temperature: ValueRange::new(-100.0, 100.0, 0.1),
            target_temperature: ValueRange::new(bounds.min, bounds.max, bounds.step),
            valid_target_states: CLIMATE_TARGET_STATES,
            valid_display_units: CLIMATE_DISPLAY_UNITS,
        }
    }

    /// Builds dehumidifier properties.
    #[must_use]
    pub const fn dehumidifier() -> Self {
        Self::Dehumidifier {
            current_humidity: ValueRange::new(0.0, 100.0, 1.0),
            humidity_threshold: ValueRange::new(35.0, 85.0, 5.0),
            valid_target_states: DEHUMIDIFIER_TARGET_STATES,
        }
    }

    /// Returns `true` if the device exposes any characteristics.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_properties_use_bounds() {
        let bounds = TemperatureBounds {
            min: 16.0,
            max: 31.0,
            step: 0.5,
        };
        let props = SurfaceProperties::climate(bounds);

        let SurfaceProperties::Climate {
            target_temperature,
            valid_target_states,
            ..
        } = props
        else {
            panic!("expected climate properties");
        };
        assert!((target_temperature.min - 16.0).abs() < f64::EPSILON);
        assert!((target_temperature.max - 31.0).abs() < f64::EPSILON);
        assert!((target_temperature.step - 0.5).abs() < f64::EPSILON);
        assert_eq!(valid_target_states.len(), 3);
    }

    #[test]
    fn dehumidifier_declares_only_dehumidify() {
        let SurfaceProperties::Dehumidifier {
            humidity_threshold,
            valid_target_states,
            ..
        } = SurfaceProperties::dehumidifier()
        else {
            panic!("expected dehumidifier properties");
        };
        assert_eq!(
            valid_target_states,
            &[TargetDehumidifierState::Dehumidifier]
        );
        assert!((humidity_threshold.min - 35.0).abs() < f64::EPSILON);
        assert!((humidity_threshold.max - 85.0).abs() < f64::EPSILON);
        assert!((humidity_threshold.step - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unsupported_exposes_nothing() {
        assert!(!SurfaceProperties::Unsupported.is_supported());
        assert!(SurfaceProperties::dehumidifier().is_supported());
    }
}
