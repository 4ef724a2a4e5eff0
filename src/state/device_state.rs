// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical per-device state.

use serde::{Deserialize, Serialize};

use crate::event::DeviceId;
use crate::types::{
    Archetype, FanSpeed, OperationalMode, PowerState, SwingAxis, TemperatureBounds,
};

use super::StateChange;

/// The canonical in-memory record of one device's last-known and
/// desired attributes.
///
/// One instance exists per physical device, owned exclusively by that
/// device's bridge entry. Identity and capability fields are fixed at
/// construction; everything else is mutated through
/// [`apply`](DeviceState::apply), which reports whether the state
/// actually changed.
///
/// All temperatures are Celsius. The Fahrenheit flag is a display
/// preference for the control surface only.
///
/// # Examples
///
/// ```
/// use climabridge::event::DeviceId;
/// use climabridge::state::{DeviceState, StateChange};
/// use climabridge::types::{Archetype, PowerState, SwingAxis, TemperatureBounds};
///
/// let mut state = DeviceState::new(
///     DeviceId::new("unit-1"),
///     Some(Archetype::ClimateUnit),
///     "Living Room",
///     SwingAxis::None,
///     TemperatureBounds::default(),
/// );
///
/// assert!(state.apply(&StateChange::Power(PowerState::On)));
/// // Applying the same change again is a no-op.
/// assert!(!state.apply(&StateChange::Power(PowerState::On)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    // Identity, fixed at construction.
    id: DeviceId,
    archetype: Option<Archetype>,
    name: String,
    model: String,
    firmware_version: String,

    // Capability, fixed at construction.
    supported_swing: SwingAxis,
    temperature_bounds: TemperatureBounds,

    // Operational state.
    power: PowerState,
    operational_mode: OperationalMode,
    target_temperature: f64,
    indoor_temperature: f64,
    outdoor_temperature: f64,
    use_fahrenheit: bool,
    fan_speed: FanSpeed,
    swing_mode: u8,
    current_humidity: u8,
    target_humidity: u8,
    water_level: u8,
}

impl DeviceState {
    /// Default target temperature in °C.
    pub const DEFAULT_TARGET_TEMPERATURE: f64 = 24.0;

    /// Default dehumidify threshold in percent.
    pub const DEFAULT_TARGET_HUMIDITY: u8 = 35;

    /// Creates the state record for a newly registered device.
    ///
    /// `archetype` is `None` for unsupported device-type codes; such a
    /// device keeps a valid state record but exposes no
    /// characteristics.
    #[must_use]
    pub fn new(
        id: DeviceId,
        archetype: Option<Archetype>,
        name: impl Into<String>,
        supported_swing: SwingAxis,
        temperature_bounds: TemperatureBounds,
    ) -> Self {
        let model = archetype.map_or("Undefined", |a| a.model()).to_string();

        Self {
            id,
            archetype,
            name: name.into(),
            model,
            firmware_version: env!("CARGO_PKG_VERSION").to_string(),
            supported_swing,
            temperature_bounds,
            power: PowerState::Off,
            operational_mode: OperationalMode::Off,
            target_temperature: Self::DEFAULT_TARGET_TEMPERATURE,
            indoor_temperature: 0.0,
            outdoor_temperature: 0.0,
            use_fahrenheit: true,
            fan_speed: FanSpeed::Auto,
            swing_mode: 0,
            current_humidity: 0,
            target_humidity: Self::DEFAULT_TARGET_HUMIDITY,
            water_level: 0,
        }
    }

    // ========== Identity & capability ==========

    /// Returns the device id.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Returns the archetype, or `None` for unsupported device types.
    #[must_use]
    pub const fn archetype(&self) -> Option<Archetype> {
        self.archetype
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the model string.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the firmware version string.
    #[must_use]
    pub fn firmware_version(&self) -> &str {
        &self.firmware_version
    }

    /// Returns the swing configuration the device supports.
    #[must_use]
    pub const fn supported_swing(&self) -> SwingAxis {
        self.supported_swing
    }

    /// Returns the target-temperature capability.
    #[must_use]
    pub const fn temperature_bounds(&self) -> TemperatureBounds {
        self.temperature_bounds
    }

    // ========== Operational state ==========

    /// Returns the power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns the operational mode.
    #[must_use]
    pub const fn operational_mode(&self) -> OperationalMode {
        self.operational_mode
    }

    /// Returns the target temperature in °C.
    #[must_use]
    pub const fn target_temperature(&self) -> f64 {
        self.target_temperature
    }

    /// Returns the last reported indoor temperature in °C.
    #[must_use]
    pub const fn indoor_temperature(&self) -> f64 {
        self.indoor_temperature
    }

    /// Returns the last reported outdoor temperature in °C.
    #[must_use]
    pub const fn outdoor_temperature(&self) -> f64 {
        self.outdoor_temperature
    }

    /// Returns `true` if temperatures should be displayed in
    /// Fahrenheit.
    #[must_use]
    pub const fn use_fahrenheit(&self) -> bool {
        self.use_fahrenheit
    }

    /// Returns the fan speed.
    #[must_use]
    pub const fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    /// Returns the native swing state (0 = off, otherwise the
    /// supported axis code).
    #[must_use]
    pub const fn swing_mode(&self) -> u8 {
        self.swing_mode
    }

    /// Returns the last reported relative humidity in percent.
    #[must_use]
    pub const fn current_humidity(&self) -> u8 {
        self.current_humidity
    }

    /// Returns the dehumidify threshold in percent.
    #[must_use]
    pub const fn target_humidity(&self) -> u8 {
        self.target_humidity
    }

    /// Returns the last reported tank water level in percent.
    #[must_use]
    pub const fn water_level(&self) -> u8 {
        self.water_level
    }

    // ========== State changes ==========

    /// Applies a state change and returns whether the state actually
    /// changed.
    ///
    /// Swing changes are snapped to the invariant that the state is
    /// either 0 or the single supported axis code: a nonzero code is
    /// stored as the supported code (0 when the device supports no
    /// swing), never as an arbitrary axis.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        // Compare-and-set for one field
        macro_rules! update {
            ($field:ident, $value:expr) => {{
                let value = $value;
                if self.$field == value {
                    false
                } else {
                    self.$field = value;
                    true
                }
            }};
        }

        match change {
            StateChange::Power(state) => update!(power, *state),
            StateChange::Mode(mode) => update!(operational_mode, *mode),
            StateChange::TargetTemperature(celsius) => update!(target_temperature, *celsius),
            StateChange::UseFahrenheit(flag) => update!(use_fahrenheit, *flag),
            StateChange::FanSpeed(speed) => update!(fan_speed, *speed),
            StateChange::Swing(code) => {
                let snapped = if *code == 0 {
                    0
                } else {
                    self.supported_swing.as_code()
                };
                update!(swing_mode, snapped)
            }
            StateChange::TargetHumidity(percent) => update!(target_humidity, (*percent).min(100)),
            StateChange::IndoorTemperature(celsius) => update!(indoor_temperature, *celsius),
            StateChange::OutdoorTemperature(celsius) => update!(outdoor_temperature, *celsius),
            StateChange::CurrentHumidity(percent) => update!(current_humidity, (*percent).min(100)),
            StateChange::WaterLevel(percent) => update!(water_level, (*percent).min(100)),
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    if self.apply(c) {
                        any_changed = true;
                    }
                }
                any_changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climate_state() -> DeviceState {
        DeviceState::new(
            DeviceId::new("test-unit"),
            Some(Archetype::ClimateUnit),
            "Test Unit",
            SwingAxis::Vertical,
            TemperatureBounds::default(),
        )
    }

    #[test]
    fn new_state_has_documented_defaults() {
        let state = climate_state();

        assert_eq!(state.power(), PowerState::Off);
        assert_eq!(state.operational_mode(), OperationalMode::Off);
        assert!((state.target_temperature() - 24.0).abs() < f64::EPSILON);
        assert_eq!(state.fan_speed(), FanSpeed::Auto);
        assert_eq!(state.swing_mode(), 0);
        assert_eq!(state.target_humidity(), 35);
        assert!(state.use_fahrenheit());
        assert_eq!(state.model(), "Air Conditioner");
    }

    #[test]
    fn unsupported_archetype_has_undefined_model() {
        let state = DeviceState::new(
            DeviceId::new("mystery"),
            None,
            "Mystery",
            SwingAxis::None,
            TemperatureBounds::default(),
        );
        assert_eq!(state.model(), "Undefined");
        assert!(state.archetype().is_none());
    }

    #[test]
    fn apply_is_idempotent() {
        let mut state = climate_state();

        assert!(state.apply(&StateChange::Power(PowerState::On)));
        assert!(!state.apply(&StateChange::Power(PowerState::On)));

        assert!(state.apply(&StateChange::TargetTemperature(22.5)));
        assert!(!state.apply(&StateChange::TargetTemperature(22.5)));
    }

    #[test]
    fn swing_snaps_to_supported_axis() {
        let mut state = climate_state();

        // Request some arbitrary nonzero code: the vertical-only device
        // stores its own axis code.
        assert!(state.apply(&StateChange::Swing(0x03)));
        assert_eq!(state.swing_mode(), SwingAxis::Vertical.as_code());

        assert!(state.apply(&StateChange::Swing(0)));
        assert_eq!(state.swing_mode(), 0);
    }

    #[test]
    fn swing_without_support_stays_off() {
        let mut state = DeviceState::new(
            DeviceId::new("no-swing"),
            Some(Archetype::ClimateUnit),
            "No Swing",
            SwingAxis::None,
            TemperatureBounds::default(),
        );

        // Enabling swing on a device without support changes nothing.
        assert!(!state.apply(&StateChange::Swing(0x0C)));
        assert_eq!(state.swing_mode(), 0);
    }

    #[test]
    fn humidity_values_are_capped() {
        let mut state = climate_state();

        assert!(state.apply(&StateChange::CurrentHumidity(150)));
        assert_eq!(state.current_humidity(), 100);

        assert!(state.apply(&StateChange::TargetHumidity(200)));
        assert_eq!(state.target_humidity(), 100);
    }

    #[test]
    fn batch_reports_any_change() {
        let mut state = climate_state();

        let batch = StateChange::Batch(vec![
            StateChange::Power(PowerState::On),
            StateChange::Mode(OperationalMode::FanOnly),
        ]);
        assert!(state.apply(&batch));
        assert_eq!(state.power(), PowerState::On);
        assert_eq!(state.operational_mode(), OperationalMode::FanOnly);

        // Re-applying the identical batch changes nothing.
        assert!(!state.apply(&batch));
    }

    #[test]
    fn batch_with_one_effective_change_reports_true() {
        let mut state = climate_state();
        state.apply(&StateChange::Power(PowerState::On));

        let batch = StateChange::Batch(vec![
            StateChange::Power(PowerState::On),
            StateChange::FanSpeed(FanSpeed::Low),
        ]);
        assert!(state.apply(&batch));
        assert_eq!(state.fan_speed(), FanSpeed::Low);
    }

    #[test]
    fn inbound_readings_update_state() {
        let mut state = climate_state();

        assert!(state.apply(&StateChange::IndoorTemperature(26.0)));
        assert!(state.apply(&StateChange::OutdoorTemperature(31.5)));
        assert!((state.indoor_temperature() - 26.0).abs() < f64::EPSILON);
        assert!((state.outdoor_temperature() - 31.5).abs() < f64::EPSILON);

        // Same reading again is not a change.
        assert!(!state.apply(&StateChange::IndoorTemperature(26.0)));
    }
}
