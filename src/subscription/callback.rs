// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for surface-update subscriptions.
//!
//! This module provides the core types for managing subscription
//! callbacks:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::event::DeviceId;
use crate::surface::SurfaceSnapshot;

/// Unique identifier for a subscription.
///
/// Returned when a callback is registered; pass it back to
/// [`CallbackRegistry::unsubscribe`] to remove the callback. Ids are
/// unique within one registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for surface-update callbacks.
type SurfaceCallback = Arc<dyn Fn(&DeviceId, &SurfaceSnapshot) + Send + Sync>;

/// Type alias for lifecycle callbacks.
type LifecycleCallback = Arc<dyn Fn(&DeviceId) + Send + Sync>;

/// Registry for control-surface adapter callbacks.
///
/// Thread-safe via `parking_lot::RwLock`; callbacks are wrapped in
/// `Arc` so dispatch clones them cheaply and never holds a lock while
/// invoking adapter code.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Per-tick surface update callbacks.
    surface_callbacks: RwLock<HashMap<SubscriptionId, SurfaceCallback>>,
    /// Device registered callbacks.
    registered_callbacks: RwLock<HashMap<SubscriptionId, LifecycleCallback>>,
    /// Device deregistered callbacks.
    deregistered_callbacks: RwLock<HashMap<SubscriptionId, LifecycleCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            surface_callbacks: RwLock::new(HashMap::new()),
            registered_callbacks: RwLock::new(HashMap::new()),
            deregistered_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn allocate_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback invoked on every push tick with the full
    /// encoded characteristic set.
    pub fn on_surface_update<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceId, &SurfaceSnapshot) + Send + Sync + 'static,
    {
        let id = self.allocate_id();
        self.surface_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback invoked when a device is registered.
    pub fn on_device_registered<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceId) + Send + Sync + 'static,
    {
        let id = self.allocate_id();
        self.registered_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback invoked when a device is deregistered.
    pub fn on_device_deregistered<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceId) + Send + Sync + 'static,
    {
        let id = self.allocate_id();
        self.deregistered_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.surface_callbacks.write().remove(&id).is_some()
            || self.registered_callbacks.write().remove(&id).is_some()
            || self.deregistered_callbacks.write().remove(&id).is_some()
    }

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.surface_callbacks.read().len()
            + self.registered_callbacks.read().len()
            + self.deregistered_callbacks.read().len()
    }

    /// Dispatches a surface update to all subscribers.
    pub(crate) fn notify_surface_update(&self, device_id: &DeviceId, snapshot: &SurfaceSnapshot) {
        let callbacks: Vec<SurfaceCallback> =
            self.surface_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(device_id, snapshot);
        }
    }

    /// Dispatches a registration notification to all subscribers.
    pub(crate) fn notify_registered(&self, device_id: &DeviceId) {
        let callbacks: Vec<LifecycleCallback> =
            self.registered_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(device_id);
        }
    }

    /// Dispatches a deregistration notification to all subscribers.
    pub(crate) fn notify_deregistered(&self, device_id: &DeviceId) {
        let callbacks: Vec<LifecycleCallback> = self
            .deregistered_callbacks
            .read()
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(device_id);
        }
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
