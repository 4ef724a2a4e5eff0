// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operational mode type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Device-native operational mode.
///
/// Climate units use the full set. Dehumidifiers reuse the same native
/// mode field, where code 0 selects the (only supported) dehumidify
/// program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperationalMode {
    /// Device idle (native code 0).
    #[default]
    Off,
    /// Automatic mode selection (native code 1).
    Auto,
    /// Cooling (native code 2).
    Cooling,
    /// Dry / dehumidify program (native code 3).
    Dry,
    /// Heating (native code 4).
    Heating,
    /// Fan only, no heat exchange (native code 5).
    FanOnly,
}

impl OperationalMode {
    /// Returns the device-native code.
    #[must_use]
    pub const fn as_code(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Auto => 1,
            Self::Cooling => 2,
            Self::Dry => 3,
            Self::Heating => 4,
            Self::FanOnly => 5,
        }
    }
}

impl fmt::Display for OperationalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "Off",
            Self::Auto => "Auto",
            Self::Cooling => "Cooling",
            Self::Dry => "Dry",
            Self::Heating => "Heating",
            Self::FanOnly => "FanOnly",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<u8> for OperationalMode {
    type Error = ValueError;

    /// Decodes a device-native mode code from a status report.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Off),
            1 => Ok(Self::Auto),
            2 => Ok(Self::Cooling),
            3 => Ok(Self::Dry),
            4 => Ok(Self::Heating),
            5 => Ok(Self::FanOnly),
            other => Err(ValueError::InvalidOperationalMode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for mode in [
            OperationalMode::Off,
            OperationalMode::Auto,
            OperationalMode::Cooling,
            OperationalMode::Dry,
            OperationalMode::Heating,
            OperationalMode::FanOnly,
        ] {
            assert_eq!(OperationalMode::try_from(mode.as_code()).unwrap(), mode);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let result = OperationalMode::try_from(9);
        assert!(matches!(result, Err(ValueError::InvalidOperationalMode(9))));
    }

    #[test]
    fn default_is_off() {
        assert_eq!(OperationalMode::default(), OperationalMode::Off);
    }

    #[test]
    fn display() {
        assert_eq!(OperationalMode::FanOnly.to_string(), "FanOnly");
    }
}
