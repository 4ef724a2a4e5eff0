// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The control surface's value vocabulary.
//!
//! This module defines what the external control surface sees:
//! characteristic value enumerations with their wire numbers
//! ([`values`]), the static per-device characteristic properties
//! declared at registration ([`SurfaceProperties`]), and the per-tick
//! [`SurfaceSnapshot`] the push loop publishes.

mod properties;
mod snapshot;
mod values;

pub use properties::{SurfaceProperties, ValueRange};
pub use snapshot::{FanModeSnapshot, SurfaceSnapshot};
pub use values::{
    Active, CurrentClimateState, CurrentDehumidifierState, SwingSetting, TargetClimateState,
    TargetDehumidifierState, TemperatureDisplayUnits,
};
