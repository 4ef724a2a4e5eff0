// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device archetype.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The device category, determining which characteristic set and
/// mapping tables apply.
///
/// The vendor registry reports device types as raw codes; only the two
/// climate-related codes are supported by this bridge. Registering a
/// device with any other code leaves it without exposed
/// characteristics (see the bridge module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Heating/cooling climate unit (native type code 0xAC).
    ClimateUnit,
    /// Dehumidifier (native type code 0xA1).
    Dehumidifier,
}

impl Archetype {
    /// Returns the vendor's native device-type code.
    #[must_use]
    pub const fn as_code(&self) -> u8 {
        match self {
            Self::ClimateUnit => 0xAC,
            Self::Dehumidifier => 0xA1,
        }
    }

    /// Returns the model string advertised for this archetype.
    #[must_use]
    pub const fn model(&self) -> &'static str {
        match self {
            Self::ClimateUnit => "Air Conditioner",
            Self::Dehumidifier => "Dehumidifier",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model())
    }
}

impl TryFrom<u8> for Archetype {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0xAC => Ok(Self::ClimateUnit),
            0xA1 => Ok(Self::Dehumidifier),
            other => Err(ValueError::InvalidDeviceType(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for archetype in [Archetype::ClimateUnit, Archetype::Dehumidifier] {
            assert_eq!(Archetype::try_from(archetype.as_code()).unwrap(), archetype);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(matches!(
            Archetype::try_from(0x10),
            Err(ValueError::InvalidDeviceType(0x10))
        ));
    }

    #[test]
    fn model_strings() {
        assert_eq!(Archetype::ClimateUnit.model(), "Air Conditioner");
        assert_eq!(Archetype::Dehumidifier.model(), "Dehumidifier");
    }
}
