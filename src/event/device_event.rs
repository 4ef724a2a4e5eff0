// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge event types.

use crate::surface::SurfaceSnapshot;

use super::DeviceId;

/// Events emitted by the bridge.
///
/// Lifecycle events mark registration and deregistration; the
/// [`BridgeEvent::SurfaceUpdated`] event carries the full encoded
/// characteristic set and is published on every push tick, whether or
/// not anything changed.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    /// A device was registered with the bridge.
    DeviceRegistered {
        /// The id of the registered device.
        device_id: DeviceId,
    },

    /// A device was deregistered and its push loop stopped.
    DeviceDeregistered {
        /// The id of the deregistered device.
        device_id: DeviceId,
    },

    /// A push tick republished the device's characteristic values.
    SurfaceUpdated {
        /// The id of the device.
        device_id: DeviceId,
        /// Every exposed characteristic's current encoded value.
        snapshot: SurfaceSnapshot,
    },
}

impl BridgeEvent {
    /// Returns the device id associated with this event.
    #[must_use]
    pub const fn device_id(&self) -> &DeviceId {
        match self {
            Self::DeviceRegistered { device_id }
            | Self::DeviceDeregistered { device_id }
            | Self::SurfaceUpdated { device_id, .. } => device_id,
        }
    }

    /// Returns `true` if this is a lifecycle event.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::DeviceRegistered { .. } | Self::DeviceDeregistered { .. }
        )
    }

    /// Returns `true` if this is a push-tick update.
    #[must_use]
    pub const fn is_surface_update(&self) -> bool {
        matches!(self, Self::SurfaceUpdated { .. })
    }

    /// Creates a device registered event.
    #[must_use]
    pub const fn registered(device_id: DeviceId) -> Self {
        Self::DeviceRegistered { device_id }
    }

    /// Creates a device deregistered event.
    #[must_use]
    pub const fn deregistered(device_id: DeviceId) -> Self {
        Self::DeviceDeregistered { device_id }
    }

    /// Creates a surface update event.
    #[must_use]
    pub const fn surface_updated(device_id: DeviceId, snapshot: SurfaceSnapshot) -> Self {
        Self::SurfaceUpdated {
            device_id,
            snapshot,
        }
    }
}
