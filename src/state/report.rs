// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound device status reports.
//!
//! The transport delivers device-reported status with native values
//! (raw codes, Celsius readings). Reports bypass the value codec:
//! the device already speaks its own representation, so fields are
//! decoded structurally and applied to state directly. Readings only
//! become externally visible on the next push tick.

use serde::{Deserialize, Serialize};

use crate::types::{FanSpeed, OperationalMode, PowerState};

use super::StateChange;

/// A device-reported status snapshot.
///
/// All fields are optional so partial reports can be applied. Raw
/// codes that the device reports but this bridge does not model (an
/// unknown fan speed or mode code) are skipped rather than rejected;
/// the rest of the report still applies.
///
/// # Examples
///
/// ```
/// use climabridge::state::StatusReport;
///
/// let report: StatusReport = serde_json::from_str(
///     r#"{"powerState": 1, "indoorTemperature": 23.5, "fanSpeed": 60}"#,
/// ).unwrap();
/// assert_eq!(report.to_state_changes().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusReport {
    /// Raw power value (1 = on).
    pub power_state: Option<u8>,
    /// Raw operational-mode code.
    pub operational_mode: Option<u8>,
    /// Raw fan-speed code.
    pub fan_speed: Option<u8>,
    /// Raw swing code (0 = off).
    pub swing_mode: Option<u8>,
    /// Target temperature in °C.
    pub target_temperature: Option<f64>,
    /// Indoor temperature in °C.
    pub indoor_temperature: Option<f64>,
    /// Outdoor temperature in °C.
    pub outdoor_temperature: Option<f64>,
    /// Relative humidity in percent.
    pub current_humidity: Option<u8>,
    /// Dehumidify threshold in percent.
    pub target_humidity: Option<u8>,
    /// Tank water level in percent.
    pub water_level: Option<u8>,
}

impl StatusReport {
    /// Converts the report into state changes.
    ///
    /// Unknown raw codes are dropped; every recognized field yields
    /// one change.
    #[must_use]
    pub fn to_state_changes(&self) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if let Some(raw) = self.power_state {
            changes.push(StateChange::Power(PowerState::from_raw(raw)));
        }
        if let Some(code) = self.operational_mode
            && let Ok(mode) = OperationalMode::try_from(code)
        {
            changes.push(StateChange::Mode(mode));
        }
        if let Some(code) = self.fan_speed
            && let Ok(speed) = FanSpeed::try_from(code)
        {
            changes.push(StateChange::FanSpeed(speed));
        }
        if let Some(code) = self.swing_mode {
            changes.push(StateChange::Swing(code));
        }
        if let Some(celsius) = self.target_temperature {
            changes.push(StateChange::TargetTemperature(celsius));
        }
        if let Some(celsius) = self.indoor_temperature {
            changes.push(StateChange::IndoorTemperature(celsius));
        }
        if let Some(celsius) = self.outdoor_temperature {
            changes.push(StateChange::OutdoorTemperature(celsius));
        }
        if let Some(percent) = self.current_humidity {
            changes.push(StateChange::CurrentHumidity(percent));
        }
        if let Some(percent) = self.target_humidity {
            changes.push(StateChange::TargetHumidity(percent));
        }
        if let Some(percent) = self.water_level {
            changes.push(StateChange::WaterLevel(percent));
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_yields_no_changes() {
        assert!(StatusReport::default().to_state_changes().is_empty());
    }

    #[test]
    fn full_report_parses_from_json() {
        let json = r#"{
            "powerState": 1,
            "operationalMode": 2,
            "fanSpeed": 80,
            "swingMode": 12,
            "targetTemperature": 22.5,
            "indoorTemperature": 26.0,
            "outdoorTemperature": 31.0,
            "currentHumidity": 55,
            "targetHumidity": 40,
            "waterLevel": 25
        }"#;

        let report: StatusReport = serde_json::from_str(json).unwrap();
        let changes = report.to_state_changes();

        assert_eq!(changes.len(), 10);
        assert!(changes.contains(&StateChange::Power(PowerState::On)));
        assert!(changes.contains(&StateChange::Mode(OperationalMode::Cooling)));
        assert!(changes.contains(&StateChange::FanSpeed(FanSpeed::High)));
        assert!(changes.contains(&StateChange::IndoorTemperature(26.0)));
    }

    #[test]
    fn unknown_codes_are_skipped() {
        let report = StatusReport {
            power_state: Some(1),
            operational_mode: Some(99),
            fan_speed: Some(20),
            ..StatusReport::default()
        };

        let changes = report.to_state_changes();
        assert_eq!(changes, vec![StateChange::Power(PowerState::On)]);
    }

    #[test]
    fn non_sentinel_power_is_off() {
        let report = StatusReport {
            power_state: Some(3),
            ..StatusReport::default()
        };
        assert_eq!(
            report.to_state_changes(),
            vec![StateChange::Power(PowerState::Off)]
        );
    }
}
