// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type and the percentage bucket mappings.
//!
//! Devices report fan speed as one of a fixed set of native codes
//! (40 = Low, 60 = Medium, 80 = High, 102 = Auto), while the control
//! surface works with percentage sliders. The mappings between the two
//! are deliberately lossy: each percentage bucket collapses onto one
//! native code, and each native code re-encodes to one representative
//! percentage.
//!
//! Climate units use the rotation-percentage scale (25/50/75/100, with
//! Auto at 100). Dehumidifiers use the wind-speed scale (30/60/100)
//! and have no Auto tier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Native fan-speed code of a climate device.
///
/// # Examples
///
/// ```
/// use climabridge::types::FanSpeed;
///
/// // Percentage buckets collapse onto native codes.
/// assert_eq!(FanSpeed::from_rotation_percent(25.0), FanSpeed::Low);
/// assert_eq!(FanSpeed::from_rotation_percent(76.0), FanSpeed::Auto);
///
/// // Native codes re-encode to representative percentages.
/// assert_eq!(FanSpeed::Medium.rotation_percent(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanSpeed {
    /// Low speed (native code 40).
    Low,
    /// Medium speed (native code 60).
    Medium,
    /// High speed (native code 80).
    High,
    /// Automatic speed selection (native code 102).
    Auto,
}

impl FanSpeed {
    /// Returns the device-native code.
    #[must_use]
    pub const fn as_code(&self) -> u8 {
        match self {
            Self::Low => 40,
            Self::Medium => 60,
            Self::High => 80,
            Self::Auto => 102,
        }
    }

    /// Decodes a rotation-percentage set value into a native code
    /// (climate unit scale).
    ///
    /// Buckets are inclusive at their upper bound: 25 maps to Low,
    /// 50 to Medium, 75 to High, and anything above 75 to Auto.
    /// The function is total; values below 0 land in the lowest bucket.
    #[must_use]
    pub fn from_rotation_percent(percent: f64) -> Self {
        if percent <= 25.0 {
            Self::Low
        } else if percent <= 50.0 {
            Self::Medium
        } else if percent <= 75.0 {
            Self::High
        } else {
            Self::Auto
        }
    }

    /// Encodes this speed as a rotation percentage (climate unit scale).
    ///
    /// Auto encodes as 100, sharing the top of the slider with High+.
    #[must_use]
    pub const fn rotation_percent(&self) -> u8 {
        match self {
            Self::Low => 25,
            Self::Medium => 50,
            Self::High => 75,
            Self::Auto => 100,
        }
    }

    /// Decodes a wind-speed set value into a native code (dehumidifier
    /// scale).
    ///
    /// Dehumidifiers have no Auto tier: 30 maps to Low, 60 to Medium,
    /// and everything above 60 to High. Total over all inputs.
    #[must_use]
    pub fn from_wind_percent(percent: f64) -> Self {
        if percent <= 30.0 {
            Self::Low
        } else if percent <= 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Encodes this speed as a wind-speed percentage (dehumidifier
    /// scale).
    ///
    /// Auto has no dehumidifier representation and encodes as 0.
    #[must_use]
    pub const fn wind_percent(&self) -> u8 {
        match self {
            Self::Low => 30,
            Self::Medium => 60,
            Self::High => 100,
            Self::Auto => 0,
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Auto => "Auto",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<u8> for FanSpeed {
    type Error = ValueError;

    /// Decodes a device-native code from a status report.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            40 => Ok(Self::Low),
            60 => Ok(Self::Medium),
            80 => Ok(Self::High),
            102 => Ok(Self::Auto),
            other => Err(ValueError::InvalidFanSpeed(other)),
        }
    }
}
