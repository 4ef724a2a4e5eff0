// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device configuration overrides.
//!
//! The hosting platform's configuration can override selected device
//! capabilities. Overrides are looked up once, at device construction,
//! and never again. An unrecognized or missing value is a
//! configuration anomaly, not an error: it falls back to the
//! documented default with at most a log line.

use std::collections::HashMap;

use serde_json::Value;

use crate::event::DeviceId;
use crate::types::{SwingAxis, TemperatureBounds};

/// Override key for the supported swing configuration.
pub const KEY_SUPPORTED_SWING_MODE: &str = "supportedSwingMode";

/// Override key for the target-temperature step.
pub const KEY_TEMPERATURE_STEPS: &str = "temperatureSteps";

/// Override key enabling the fan-mode sub-service.
pub const KEY_FAN_ONLY_MODE: &str = "fanOnlyMode";

/// Override key enabling the outdoor-temperature sub-service.
pub const KEY_OUTDOOR_TEMPERATURE: &str = "OutdoorTemperature";

/// Source of per-device configuration overrides.
///
/// Implemented by the hosting platform; consumed once per device at
/// construction time.
pub trait OverrideSource: Send + Sync {
    /// Looks up an override value for a device, or `None` if the
    /// configuration has no entry.
    fn value(&self, device_id: &DeviceId, key: &str) -> Option<Value>;
}

/// Map-backed override source.
///
/// # Examples
///
/// ```
/// use climabridge::event::DeviceId;
/// use climabridge::overrides::{OverrideSource, StaticOverrides};
///
/// let overrides = StaticOverrides::new()
///     .with("unit-1", "supportedSwingMode", "Vertical")
///     .with("unit-1", "temperatureSteps", 0.5);
///
/// let id = DeviceId::new("unit-1");
/// assert!(overrides.value(&id, "supportedSwingMode").is_some());
/// assert!(overrides.value(&id, "fanOnlyMode").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticOverrides {
    entries: HashMap<(String, String), Value>,
}

impl StaticOverrides {
    /// Creates an empty override source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override entry.
    #[must_use]
    pub fn with(mut self, device_id: &str, key: &str, value: impl Into<Value>) -> Self {
        self.entries
            .insert((device_id.to_string(), key.to_string()), value.into());
        self
    }
}

impl OverrideSource for StaticOverrides {
    fn value(&self, device_id: &DeviceId, key: &str) -> Option<Value> {
        self.entries
            .get(&(device_id.as_str().to_string(), key.to_string()))
            .cloned()
    }
}

/// Capability values resolved from overrides at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOverrides {
    /// Swing configuration the device supports.
    pub supported_swing: SwingAxis,
    /// Target-temperature capability.
    pub temperature_bounds: TemperatureBounds,
    /// Whether to expose the fan-mode sub-service.
    pub fan_only_mode: bool,
    /// Whether to expose the outdoor-temperature sub-service.
    pub outdoor_temperature: bool,
}

impl ResolvedOverrides {
    /// Resolves all override keys for one device.
    ///
    /// Missing or unrecognized values fall back to defaults: no swing
    /// support, a 1° step, and no optional sub-services.
    #[must_use]
    pub fn resolve(source: &dyn OverrideSource, device_id: &DeviceId) -> Self {
        let supported_swing = match source.value(device_id, KEY_SUPPORTED_SWING_MODE) {
            Some(Value::String(name)) => SwingAxis::from_name(&name).unwrap_or_else(|| {
                tracing::warn!(%device_id, value = %name, "Unrecognized swing override, using None");
                SwingAxis::None
            }),
            Some(other) => {
                tracing::warn!(%device_id, value = %other, "Non-string swing override, using None");
                SwingAxis::None
            }
            None => SwingAxis::None,
        };

        let step = source
            .value(device_id, KEY_TEMPERATURE_STEPS)
            .and_then(|v| v.as_f64())
            .unwrap_or(TemperatureBounds::DEFAULT_STEP);

        Self {
            supported_swing,
            temperature_bounds: TemperatureBounds::with_step(step),
            fan_only_mode: flag(source, device_id, KEY_FAN_ONLY_MODE),
            outdoor_temperature: flag(source, device_id, KEY_OUTDOOR_TEMPERATURE),
        }
    }
}

/// Reads a boolean feature flag; anything but `true` is disabled.
fn flag(source: &dyn OverrideSource, device_id: &DeviceId, key: &str) -> bool {
    source
        .value(device_id, key)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}
