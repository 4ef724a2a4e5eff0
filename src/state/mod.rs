// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! [`DeviceState`] is the canonical record of one device's last-known
//! and desired attributes. [`StateChange`] represents discrete
//! mutations (decoded external sets and inbound report fields), and
//! applying one reports whether state actually changed, which is the
//! signal the synchronization engine uses to decide whether to
//! transmit. [`StatusReport`] is the inbound device-reported form.
//!
//! # Examples
//!
//! ```
//! use climabridge::event::DeviceId;
//! use climabridge::state::{DeviceState, StateChange};
//! use climabridge::types::{Archetype, PowerState, SwingAxis, TemperatureBounds};
//!
//! let mut state = DeviceState::new(
//!     DeviceId::new("unit-1"),
//!     Some(Archetype::ClimateUnit),
//!     "Living Room",
//!     SwingAxis::Vertical,
//!     TemperatureBounds::default(),
//! );
//!
//! let changed = state.apply(&StateChange::Power(PowerState::On));
//! assert!(changed);
//! ```

mod device_state;
mod report;
mod state_change;

pub use device_state::DeviceState;
pub use report::StatusReport;
pub use state_change::StateChange;
