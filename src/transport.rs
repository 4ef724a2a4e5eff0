// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound device transport.
//!
//! The bridge does not own a wire protocol. Whenever a set handler
//! changes device state, the full state snapshot is handed to the
//! transport and forgotten: the bridge never waits for an
//! acknowledgment, never retries, and never observes a transport
//! failure. State keeps the optimistically-applied value until a
//! subsequent inbound report corrects it.

use crate::state::DeviceState;

/// Delivers state snapshots to the physical device.
///
/// Implementations are expected to be non-blocking: enqueue the
/// snapshot and return. Any failure stays inside the implementation's
/// own error channel.
pub trait DeviceTransport: Send + Sync {
    /// Pushes the full current state to the physical device.
    fn send_update(&self, state: &DeviceState);
}

/// Transport that discards every update.
///
/// Useful for adapters under construction and for tests that only
/// exercise the mapping core.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

impl DeviceTransport for NullTransport {
    fn send_update(&self, state: &DeviceState) {
        tracing::debug!(device_id = %state.id(), "Discarding device update (null transport)");
    }
}
