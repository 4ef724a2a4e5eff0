// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `climabridge` - the state-mapping and synchronization core of a
//! smart-home climate bridge.
//!
//! This library translates between a control surface's fixed
//! characteristic vocabulary (power, target temperature, fan
//! percentage, swing, humidity) and a climate device's native
//! representation of the same attributes (discrete speed codes, mode
//! codes, raw thresholds), and keeps the two sides synchronized.
//!
//! # Supported Features
//!
//! - **Bidirectional mapping**: lossy percentage buckets, mode
//!   enumerations, and swing toggles, total in both directions
//! - **Transmit-on-change**: sets mutate state and send the full
//!   snapshot to the device exactly when something changed
//! - **Periodic push**: every device republishes its encoded
//!   characteristic set on a fixed interval
//! - **Per-device overrides**: swing capability, temperature step, and
//!   optional sub-services resolved once at registration
//!
//! # Supported Archetypes
//!
//! - Climate unit (heater/cooler, type code 0xAC)
//! - Dehumidifier (type code 0xA1)
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use climabridge::bridge::{Bridge, DeviceConfig};
//! use climabridge::overrides::StaticOverrides;
//! use climabridge::surface::Active;
//! use climabridge::transport::NullTransport;
//!
//! #[tokio::main]
//! async fn main() -> climabridge::Result<()> {
//!     let overrides = StaticOverrides::new()
//!         .with("14500abc", "supportedSwingMode", "Vertical")
//!         .with("14500abc", "temperatureSteps", 0.5);
//!
//!     let bridge = Bridge::new(Arc::new(overrides), Arc::new(NullTransport));
//!
//!     // Register a device; its push loop starts immediately.
//!     let id = bridge
//!         .register(DeviceConfig::climate_unit("14500abc", "Living Room AC"))
//!         .await;
//!
//!     // Characteristic handlers, as the control surface would call them.
//!     bridge.set_power_state(&id, Active::Active).await?;
//!     bridge.set_target_temperature(&id, 22.5).await?;
//!     assert_eq!(bridge.target_temperature(&id).await?, 22.5);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Observing Push Updates
//!
//! The control-surface adapter receives the full encoded
//! characteristic set on every push tick, via the event bus or a
//! callback:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use climabridge::bridge::Bridge;
//! use climabridge::event::BridgeEvent;
//! use climabridge::overrides::StaticOverrides;
//! use climabridge::transport::NullTransport;
//!
//! #[tokio::main]
//! async fn main() {
//!     let bridge = Bridge::new(Arc::new(StaticOverrides::new()), Arc::new(NullTransport));
//!
//!     let mut events = bridge.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             if let BridgeEvent::SurfaceUpdated { device_id, snapshot } = event {
//!                 println!("{device_id}: {snapshot:?}");
//!             }
//!         }
//!     });
//! }
//! ```

pub mod bridge;
pub mod codec;
pub mod error;
pub mod event;
pub mod overrides;
pub mod state;
pub mod subscription;
pub mod surface;
pub mod transport;
pub mod types;

pub use bridge::{Bridge, DeviceConfig};
pub use error::{Error, Result, ValueError};
pub use event::{BridgeEvent, DeviceId, EventBus};
pub use overrides::{OverrideSource, StaticOverrides};
pub use state::{DeviceState, StateChange, StatusReport};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use surface::{SurfaceProperties, SurfaceSnapshot};
pub use transport::{DeviceTransport, NullTransport};
pub use types::{
    Archetype, FanSpeed, OperationalMode, PowerState, SwingAxis, TemperatureBounds,
};
