// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The synchronization engine and its device registry.
//!
//! The [`Bridge`] owns every registered device's state and is the
//! single entry point for the control-surface adapter: characteristic
//! get/set methods keyed by device id, inbound status reports, and the
//! per-device push loop that republishes the full encoded
//! characteristic set on a fixed interval.
//!
//! # Overview
//!
//! - **Registration** resolves per-device overrides once, declares the
//!   archetype's characteristic set, and starts the push loop. An
//!   unsupported device type registers degraded (no characteristics),
//!   never fails.
//! - **Sets** decode through the value codec, mutate state, and
//!   transmit the full snapshot to the device only when state actually
//!   changed.
//! - **Gets** encode from state and never fail for a registered
//!   device.
//! - **Deregistration** stops the push loop synchronously via its
//!   stored handle.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use climabridge::bridge::{Bridge, DeviceConfig};
//! use climabridge::overrides::StaticOverrides;
//! use climabridge::transport::NullTransport;
//!
//! #[tokio::main]
//! async fn main() {
//!     let bridge = Bridge::new(
//!         Arc::new(StaticOverrides::new()),
//!         Arc::new(NullTransport),
//!     );
//!
//!     let id = bridge
//!         .register(DeviceConfig::climate_unit("14500abc", "Living Room AC"))
//!         .await;
//!
//!     // Push ticks now republish this device's characteristics
//!     // every 5 seconds until it is deregistered.
//!     bridge.deregister(&id).await;
//! }
//! ```

mod config;
mod device;
mod engine;

pub use config::DeviceConfig;
pub use engine::Bridge;
