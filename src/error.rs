// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `climabridge` library.
//!
//! Characteristic get/set handlers never fail: out-of-range external
//! values are clamped into the nearest bucket and configuration
//! anomalies fall back to documented defaults. The errors here cover
//! the remaining fallible surfaces: registry dispatch with an unknown
//! device id, and typed decoding of raw native codes at the report
//! boundary.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while decoding a raw native value.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Device was not found in the bridge registry.
    #[error("device not found")]
    DeviceNotFound,
}

/// Errors related to decoding raw device-native values.
///
/// These errors occur when constructing typed values from raw codes,
/// e.g. while interpreting an inbound status report. The handler paths
/// use the clamping constructors instead and never produce these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An unknown fan-speed code was provided.
    #[error("unknown fan speed code: {0}")]
    InvalidFanSpeed(u8),

    /// An unknown operational-mode code was provided.
    #[error("unknown operational mode code: {0}")]
    InvalidOperationalMode(u8),

    /// An unknown swing-axis code was provided.
    #[error("unknown swing axis code: {0}")]
    InvalidSwingAxis(u8),

    /// An unknown device-type code was provided.
    #[error("unknown device type code: {0}")]
    InvalidDeviceType(u8),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidFanSpeed(55);
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidFanSpeed(55))));
    }

    #[test]
    fn device_not_found_display() {
        assert_eq!(Error::DeviceNotFound.to_string(), "device not found");
    }
}
