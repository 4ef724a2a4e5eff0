// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for surface updates and device lifecycle.
//!
//! The [`EventBus`] is the channel-based path by which the
//! control-surface adapter observes the bridge: registration and
//! deregistration events plus one [`BridgeEvent::SurfaceUpdated`] per
//! device per push tick. Adapters preferring callbacks over channels
//! can use the [`subscription`](crate::subscription) module instead.
//!
//! # Examples
//!
//! ```
//! use climabridge::event::{BridgeEvent, DeviceId, EventBus};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(BridgeEvent::registered(DeviceId::new("unit-1")));
//! ```

mod device_event;
mod device_id;
mod event_bus;

pub use device_event::BridgeEvent;
pub use device_id::DeviceId;
pub use event_bus::EventBus;
