// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registration configuration for a bridged device.

use crate::event::DeviceId;
use crate::types::Archetype;

/// What the external device registry supplies when a device is
/// registered with the bridge.
///
/// # Examples
///
/// ```
/// use climabridge::bridge::DeviceConfig;
///
/// let config = DeviceConfig::climate_unit("14500abc", "Living Room AC");
/// let raw = DeviceConfig::new("99", 0x10, "Mystery Box"); // unsupported type
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Vendor-assigned device id.
    pub id: DeviceId,
    /// Native device-type code as reported by the registry.
    pub device_type: u8,
    /// Display name.
    pub name: String,
}

impl DeviceConfig {
    /// Creates a configuration from a raw device-type code.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>, device_type: u8, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            device_type,
            name: name.into(),
        }
    }

    /// Creates a configuration for a climate unit.
    #[must_use]
    pub fn climate_unit(id: impl Into<DeviceId>, name: impl Into<String>) -> Self {
        Self::new(id, Archetype::ClimateUnit.as_code(), name)
    }

    /// Creates a configuration for a dehumidifier.
    #[must_use]
    pub fn dehumidifier(id: impl Into<DeviceId>, name: impl Into<String>) -> Self {
        Self::new(id, Archetype::Dehumidifier.as_code(), name)
    }
}
