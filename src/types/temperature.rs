// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature capability bounds.
//!
//! All temperatures in this library are stored and transmitted in
//! Celsius. The Fahrenheit preference on a device only tells the
//! control surface how to *display* values; it never changes units in
//! state or on the wire.

use serde::{Deserialize, Serialize};

/// Target-temperature capability of a device.
///
/// Resolved once at construction (step from a per-device override,
/// bounds from the device contract) and read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBounds {
    /// Minimum settable target temperature in °C.
    pub min: f64,
    /// Maximum settable target temperature in °C.
    pub max: f64,
    /// Setpoint granularity the control surface should offer, in °C.
    pub step: f64,
}

impl TemperatureBounds {
    /// Default minimum target temperature in °C.
    pub const DEFAULT_MIN: f64 = 17.0;

    /// Default maximum target temperature in °C.
    pub const DEFAULT_MAX: f64 = 30.0;

    /// Default setpoint step in °C.
    pub const DEFAULT_STEP: f64 = 1.0;

    /// Creates bounds with the default range and the given step.
    #[must_use]
    pub const fn with_step(step: f64) -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            step,
        }
    }
}

impl Default for TemperatureBounds {
    fn default() -> Self {
        Self::with_step(Self::DEFAULT_STEP)
    }
}
