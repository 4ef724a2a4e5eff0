// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-native value types.
//!
//! This module provides type-safe representations of the values a
//! climate device understands natively. Each type owns its raw-code
//! conversions and, where the control surface uses a different scale,
//! the lossy bucket mappings between the two.
//!
//! # Types
//!
//! - [`Archetype`] - Device category (climate unit / dehumidifier)
//! - [`PowerState`] - Binary power (active sentinel 1)
//! - [`OperationalMode`] - Native mode codes (Off/Auto/Cooling/Dry/Heating/FanOnly)
//! - [`FanSpeed`] - Native speed codes (40/60/80/102) with percentage buckets
//! - [`SwingAxis`] - Supported swing configuration, fixed at construction
//! - [`TemperatureBounds`] - Target-temperature range and step

mod archetype;
mod fan_speed;
mod mode;
mod power;
mod swing;
mod temperature;

pub use archetype::Archetype;
pub use fan_speed::FanSpeed;
pub use mode::OperationalMode;
pub use power::PowerState;
pub use swing::SwingAxis;
pub use temperature::TemperatureBounds;
