// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the power state of a device.
///
/// Device status reports carry power as a raw number. The device
/// contract is binary: the active sentinel `1` means on, and any other
/// value is treated as off.
///
/// # Examples
///
/// ```
/// use climabridge::types::PowerState;
///
/// assert_eq!(PowerState::from_raw(1), PowerState::On);
/// assert_eq!(PowerState::from_raw(0), PowerState::Off);
/// assert_eq!(PowerState::from_raw(255), PowerState::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Decodes a raw power value from a device report.
    ///
    /// Only the active sentinel `1` maps to [`PowerState::On`]; every
    /// other value is treated as inactive.
    #[must_use]
    pub const fn from_raw(value: u8) -> Self {
        if value == 1 { Self::On } else { Self::Off }
    }

    /// Returns the numeric value used by the device.
    #[must_use]
    pub const fn as_raw(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// Returns `true` if the power is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the display string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
