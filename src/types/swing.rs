// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Swing capability type.
//!
//! A device supports at most one swing configuration, fixed at
//! construction from a per-device override. The swing *state* is then
//! always either 0 (off) or the supported axis code: the control
//! surface only toggles, it never selects an axis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The swing axis configuration a device supports.
///
/// The discriminant values are the device-native swing command codes.
///
/// # Examples
///
/// ```
/// use climabridge::types::SwingAxis;
///
/// assert_eq!(SwingAxis::Vertical.as_code(), 0x0C);
/// assert_eq!(SwingAxis::from_name("Horizontal"), Some(SwingAxis::Horizontal));
/// assert_eq!(SwingAxis::from_name("Diagonal"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SwingAxis {
    /// No swing support (code 0).
    #[default]
    None,
    /// Horizontal swing only (code 0x03).
    Horizontal,
    /// Vertical swing only (code 0x0C).
    Vertical,
    /// Both axes together (code 0x0F).
    Both,
}

impl SwingAxis {
    /// Returns the device-native swing code for this axis.
    #[must_use]
    pub const fn as_code(&self) -> u8 {
        match self {
            Self::None => 0x00,
            Self::Horizontal => 0x03,
            Self::Vertical => 0x0C,
            Self::Both => 0x0F,
        }
    }

    /// Parses an override configuration value.
    ///
    /// Returns `None` for unrecognized names so the caller can fall
    /// back to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Vertical" => Some(Self::Vertical),
            "Horizontal" => Some(Self::Horizontal),
            "Both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Returns `true` if the device supports any swing at all.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for SwingAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::Both => "Both",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<u8> for SwingAxis {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::None),
            0x03 => Ok(Self::Horizontal),
            0x0C => Ok(Self::Vertical),
            0x0F => Ok(Self::Both),
            other => Err(ValueError::InvalidSwingAxis(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for axis in [
            SwingAxis::None,
            SwingAxis::Horizontal,
            SwingAxis::Vertical,
            SwingAxis::Both,
        ] {
            assert_eq!(SwingAxis::try_from(axis.as_code()).unwrap(), axis);
        }
    }

    #[test]
    fn from_name_known_values() {
        assert_eq!(SwingAxis::from_name("Vertical"), Some(SwingAxis::Vertical));
        assert_eq!(
            SwingAxis::from_name("Horizontal"),
            Some(SwingAxis::Horizontal)
        );
        assert_eq!(SwingAxis::from_name("Both"), Some(SwingAxis::Both));
    }

    #[test]
    fn from_name_unknown_is_none() {
        assert_eq!(SwingAxis::from_name("vertical"), None);
        assert_eq!(SwingAxis::from_name(""), None);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(matches!(
            SwingAxis::try_from(0x05),
            Err(ValueError::InvalidSwingAxis(0x05))
        ));
    }

    #[test]
    fn default_is_none() {
        assert_eq!(SwingAxis::default(), SwingAxis::None);
        assert!(!SwingAxis::default().is_supported());
    }

    #[test]
    fn is_supported() {
        assert!(SwingAxis::Vertical.is_supported());
        assert!(SwingAxis::Both.is_supported());
        assert!(!SwingAxis::None.is_supported());
    }
}
