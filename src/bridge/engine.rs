// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The synchronization engine and device registry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;

use crate::codec;
use crate::error::Error;
use crate::event::{BridgeEvent, DeviceId, EventBus};
use crate::overrides::{OverrideSource, ResolvedOverrides};
use crate::state::{DeviceState, StateChange, StatusReport};
use crate::subscription::CallbackRegistry;
use crate::surface::{
    Active, CurrentClimateState, CurrentDehumidifierState, SurfaceProperties, SurfaceSnapshot,
    SwingSetting, TargetClimateState, TargetDehumidifierState, TemperatureDisplayUnits,
};
use crate::transport::DeviceTransport;
use crate::types::{FanSpeed, OperationalMode};

use super::config::DeviceConfig;
use super::device::BridgedDevice;

/// Interval between surface push ticks.
const PUSH_INTERVAL: Duration = Duration::from_secs(5);

/// The synchronization engine: registry of bridged devices plus the
/// characteristic get/set entry points the control-surface adapter
/// calls.
///
/// # Behavior
///
/// - **Get handlers** encode current state and never fail for a known
///   device: an attribute that is undefined in the current mode reads
///   as its documented default.
/// - **Set handlers** decode the external value, compare against
///   current state, and transmit the full state snapshot to the device
///   exactly when something changed. Repeating a set is a no-op.
/// - **Push loop**: every registered device republishes its full
///   encoded characteristic set on a fixed interval, whether or not
///   anything changed. Inbound status reports become externally
///   visible through this path only.
///
/// Handlers and push ticks serialize on the registry lock, so a
/// handler is atomic with respect to other handlers and ticks.
/// Devices are fully independent of each other.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use climabridge::bridge::{Bridge, DeviceConfig};
/// use climabridge::overrides::StaticOverrides;
/// use climabridge::surface::Active;
/// use climabridge::transport::NullTransport;
///
/// #[tokio::main]
/// async fn main() -> climabridge::Result<()> {
///     let bridge = Bridge::new(
///         Arc::new(StaticOverrides::new()),
///         Arc::new(NullTransport),
///     );
///
///     let id = bridge
///         .register(DeviceConfig::climate_unit("14500abc", "Living Room AC"))
///         .await;
///
///     bridge.set_power_state(&id, Active::Active).await?;
///     bridge.set_target_temperature(&id, 22.5).await?;
///
///     Ok(())
/// }
/// ```
pub struct Bridge {
    /// Registered devices, keyed by device id.
    devices: Arc<RwLock<HashMap<DeviceId, BridgedDevice>>>,
    /// Event bus publishing lifecycle and push-tick events.
    event_bus: EventBus,
    /// Callback registry for adapters preferring callbacks.
    callbacks: Arc<CallbackRegistry>,
    /// Configuration override lookup, consumed at registration.
    overrides: Arc<dyn OverrideSource>,
    /// Outbound device transport.
    transport: Arc<dyn DeviceTransport>,
    /// Interval between push ticks.
    push_interval: Duration,
}

impl Bridge {
    /// Creates a bridge with the default 5 second push interval.
    #[must_use]
    pub fn new(overrides: Arc<dyn OverrideSource>, transport: Arc<dyn DeviceTransport>) -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
            event_bus: EventBus::new(),
            callbacks: Arc::new(CallbackRegistry::new()),
            overrides,
            transport,
            push_interval: PUSH_INTERVAL,
        }
    }

    /// Overrides the push interval.
    #[must_use]
    pub fn with_push_interval(mut self, interval: Duration) -> Self {
        self.push_interval = interval;
        self
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribes to bridge events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<BridgeEvent> {
        self.event_bus.subscribe()
    }

    /// Returns the callback registry for callback-style subscriptions.
    #[must_use]
    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    // =========================================================================
    // Device Lifecycle
    // =========================================================================

    /// Registers a device and starts its push loop.
    ///
    /// Overrides are resolved here, once. A device with an unsupported
    /// type code is registered in a degraded state: no characteristics
    /// and no push loop, but no failure either. Re-registering an id
    /// replaces the previous entry and stops its push loop.
    pub async fn register(&self, config: DeviceConfig) -> DeviceId {
        let device_id = config.id.clone();
        let resolved = ResolvedOverrides::resolve(self.overrides.as_ref(), &device_id);
        let mut device = BridgedDevice::new(&config, &resolved);

        if device.properties.is_supported() {
            device.push_task = Some(self.spawn_push_loop(device_id.clone()));
        }

        if let Some(mut previous) = self.devices.write().await.insert(device_id.clone(), device) {
            previous.abort_push_task();
        }

        self.callbacks.notify_registered(&device_id);
        self.event_bus
            .publish(BridgeEvent::registered(device_id.clone()));

        device_id
    }

    /// Deregisters a device, stopping its push loop.
    ///
    /// Returns `true` if the device was found and removed.
    pub async fn deregister(&self, device_id: &DeviceId) -> bool {
        let removed = self.devices.write().await.remove(device_id);

        let Some(mut device) = removed else {
            return false;
        };
        device.abort_push_task();

        tracing::info!(%device_id, "Deregistered device");
        self.callbacks.notify_deregistered(device_id);
        self.event_bus
            .publish(BridgeEvent::deregistered(device_id.clone()));

        true
    }

    /// Returns the ids of all registered devices.
    pub async fn device_ids(&self) -> Vec<DeviceId> {
        self.devices.read().await.keys().cloned().collect()
    }

    /// Returns the number of registered devices.
    pub async fn device_count(&self) -> usize {
        self.devices.read().await.len()
    }

    /// Returns a copy of a device's current state.
    pub async fn state(&self, device_id: &DeviceId) -> Option<DeviceState> {
        self.devices
            .read()
            .await
            .get(device_id)
            .map(|d| d.state.clone())
    }

    /// Returns the characteristic properties declared for a device.
    pub async fn properties(&self, device_id: &DeviceId) -> Option<SurfaceProperties> {
        self.devices
            .read()
            .await
            .get(device_id)
            .map(|d| d.properties.clone())
    }

    /// Derives the current surface snapshot on demand.
    ///
    /// Returns `None` for unknown devices and for devices without
    /// characteristics.
    pub async fn snapshot(&self, device_id: &DeviceId) -> Option<SurfaceSnapshot> {
        self.devices
            .read()
            .await
            .get(device_id)
            .and_then(BridgedDevice::snapshot)
    }

    // =========================================================================
    // Inbound Reports
    // =========================================================================

    /// Applies a device-reported status snapshot.
    ///
    /// Reports carry native values and bypass the codec. No
    /// transmission results, since the device is the source here. The new
    /// values reach the control surface on the next push tick.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn apply_report(
        &self,
        device_id: &DeviceId,
        report: &StatusReport,
    ) -> Result<(), Error> {
        let mut devices = self.devices.write().await;
        let device = devices.get_mut(device_id).ok_or(Error::DeviceNotFound)?;

        let changed = device
            .state
            .apply(&StateChange::Batch(report.to_state_changes()));
        tracing::debug!(%device_id, changed, "Applied device status report");

        Ok(())
    }

    // =========================================================================
    // Power
    // =========================================================================

    /// Get handler for the power characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn power_state(&self, device_id: &DeviceId) -> Result<Active, Error> {
        self.read(device_id, |d| codec::power_active(d.state.power()))
            .await
    }

    /// Set handler for the power characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_power_state(&self, device_id: &DeviceId, value: Active) -> Result<(), Error> {
        tracing::debug!(%device_id, value = value.as_num(), "Set power state");
        self.apply_set(device_id, StateChange::Power(codec::power_for_active(value)))
            .await
    }

    // =========================================================================
    // Climate Unit
    // =========================================================================

    /// Get handler for the observed heating/cooling activity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn current_climate_state(
        &self,
        device_id: &DeviceId,
    ) -> Result<CurrentClimateState, Error> {
        self.read(device_id, |d| codec::current_climate_state(&d.state))
            .await
    }

    /// Get handler for the requested operating regime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn target_climate_state(
        &self,
        device_id: &DeviceId,
    ) -> Result<TargetClimateState, Error> {
        self.read(device_id, |d| {
            codec::target_climate_state(d.state.operational_mode())
        })
        .await
    }

    /// Set handler for the requested operating regime.
    ///
    /// The comparison happens at the encoded level: requesting Auto
    /// while the device is in a mode that already reads as Auto
    /// (FanOnly, Dry, Off) is a no-op. FanOnly is entered and left
    /// through the fan-mode characteristic only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_target_climate_state(
        &self,
        device_id: &DeviceId,
        value: TargetClimateState,
    ) -> Result<(), Error> {
        let mut devices = self.devices.write().await;
        let device = devices.get_mut(device_id).ok_or(Error::DeviceNotFound)?;

        if codec::target_climate_state(device.state.operational_mode()) != value {
            tracing::debug!(%device_id, value = value.as_num(), "Set target climate state");
            device
                .state
                .apply(&StateChange::Mode(codec::mode_for_target(value)));
            self.transmit(&device.state);
        }
        Ok(())
    }

    /// Get handler for the indoor temperature reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn current_temperature(&self, device_id: &DeviceId) -> Result<f64, Error> {
        self.read(device_id, |d| d.state.indoor_temperature()).await
    }

    /// Get handler for the threshold-temperature characteristics.
    ///
    /// Both the heating and cooling thresholds advertise the single
    /// setpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn target_temperature(&self, device_id: &DeviceId) -> Result<f64, Error> {
        self.read(device_id, |d| d.state.target_temperature()).await
    }

    /// Set handler for the threshold-temperature characteristics.
    ///
    /// The value is Celsius regardless of the display-unit preference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_target_temperature(
        &self,
        device_id: &DeviceId,
        celsius: f64,
    ) -> Result<(), Error> {
        tracing::debug!(%device_id, celsius, "Set target temperature");
        self.apply_set(device_id, StateChange::TargetTemperature(celsius))
            .await
    }

    /// Get handler for the rotation-speed characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn rotation_speed(&self, device_id: &DeviceId) -> Result<u8, Error> {
        self.read(device_id, |d| d.state.fan_speed().rotation_percent())
            .await
    }

    /// Set handler for the rotation-speed characteristic.
    ///
    /// The percentage collapses onto a native speed code; a set that
    /// lands in the current bucket transmits nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_rotation_speed(
        &self,
        device_id: &DeviceId,
        percent: f64,
    ) -> Result<(), Error> {
        tracing::debug!(%device_id, percent, "Set rotation speed");
        self.apply_set(
            device_id,
            StateChange::FanSpeed(FanSpeed::from_rotation_percent(percent)),
        )
        .await
    }

    /// Get handler for the swing characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn swing(&self, device_id: &DeviceId) -> Result<SwingSetting, Error> {
        self.read(device_id, |d| codec::swing_setting(d.state.swing_mode()))
            .await
    }

    /// Set handler for the swing characteristic.
    ///
    /// Enabling engages the device's single supported axis; on a
    /// device without swing support the decoded state stays 0 and
    /// nothing is transmitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_swing(&self, device_id: &DeviceId, value: SwingSetting) -> Result<(), Error> {
        let mut devices = self.devices.write().await;
        let device = devices.get_mut(device_id).ok_or(Error::DeviceNotFound)?;

        let code = codec::swing_code(value, device.state.supported_swing());
        if device.state.apply(&StateChange::Swing(code)) {
            tracing::debug!(%device_id, code, "Set swing");
            self.transmit(&device.state);
        }
        Ok(())
    }

    /// Get handler for the display-units characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn display_units(
        &self,
        device_id: &DeviceId,
    ) -> Result<TemperatureDisplayUnits, Error> {
        self.read(device_id, |d| codec::display_units(d.state.use_fahrenheit()))
            .await
    }

    /// Set handler for the display-units characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_display_units(
        &self,
        device_id: &DeviceId,
        value: TemperatureDisplayUnits,
    ) -> Result<(), Error> {
        tracing::debug!(%device_id, value = value.as_num(), "Set display units");
        self.apply_set(
            device_id,
            StateChange::UseFahrenheit(codec::use_fahrenheit_for(value)),
        )
        .await
    }

    /// Get handler for the fan-mode sub-service's active flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn fan_mode_active(&self, device_id: &DeviceId) -> Result<Active, Error> {
        self.read(device_id, |d| codec::fan_mode_active(&d.state))
            .await
    }

    /// Set handler for the fan-mode sub-service's active flag.
    ///
    /// Fan mode is mutually exclusive with "off", not an independent
    /// toggle: activating it on a powered-off device also powers it on
    /// (two logical changes, one transmission), and deactivating it
    /// powers the device off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_fan_mode_active(
        &self,
        device_id: &DeviceId,
        value: Active,
    ) -> Result<(), Error> {
        let change = match value {
            Active::Active => StateChange::Batch(vec![
                StateChange::power_on(),
                StateChange::Mode(OperationalMode::FanOnly),
            ]),
            Active::Inactive => StateChange::power_off(),
        };
        tracing::debug!(%device_id, value = value.as_num(), "Set fan mode");
        self.apply_set(device_id, change).await
    }

    /// Get handler for the outdoor-temperature sensor sub-service.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn outdoor_temperature(&self, device_id: &DeviceId) -> Result<f64, Error> {
        self.read(device_id, |d| d.state.outdoor_temperature()).await
    }

    // =========================================================================
    // Dehumidifier
    // =========================================================================

    /// Get handler for the observed dehumidifier activity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn current_dehumidifier_state(
        &self,
        device_id: &DeviceId,
    ) -> Result<CurrentDehumidifierState, Error> {
        self.read(device_id, |d| codec::current_dehumidifier_state(&d.state))
            .await
    }

    /// Get handler for the requested dehumidifier program.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn target_dehumidifier_state(
        &self,
        device_id: &DeviceId,
    ) -> Result<TargetDehumidifierState, Error> {
        self.read(device_id, |d| codec::target_dehumidifier_state(&d.state))
            .await
    }

    /// Set handler for the requested dehumidifier program.
    ///
    /// Every external value clamps onto the dehumidify program; the
    /// set transmits only when the device was in some other program.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_target_dehumidifier_state(
        &self,
        device_id: &DeviceId,
        value: TargetDehumidifierState,
    ) -> Result<(), Error> {
        tracing::debug!(%device_id, value = value.as_num(), "Set target dehumidifier state");
        self.apply_set(
            device_id,
            StateChange::Mode(codec::mode_for_dehumidifier_target(value)),
        )
        .await
    }

    /// Get handler for the current-humidity characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn current_humidity(&self, device_id: &DeviceId) -> Result<u8, Error> {
        self.read(device_id, |d| d.state.current_humidity()).await
    }

    /// Get handler for the dehumidify-threshold characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn humidity_threshold(&self, device_id: &DeviceId) -> Result<u8, Error> {
        self.read(device_id, |d| d.state.target_humidity()).await
    }

    /// Set handler for the dehumidify-threshold characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_humidity_threshold(
        &self,
        device_id: &DeviceId,
        percent: f64,
    ) -> Result<(), Error> {
        tracing::debug!(%device_id, percent, "Set humidity threshold");
        // Out-of-range values clamp onto the 0-100 percent scale.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = percent.clamp(0.0, 100.0).round() as u8;
        self.apply_set(device_id, StateChange::TargetHumidity(percent))
            .await
    }

    /// Get handler for the wind-speed characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn wind_speed(&self, device_id: &DeviceId) -> Result<u8, Error> {
        self.read(device_id, |d| d.state.fan_speed().wind_percent())
            .await
    }

    /// Set handler for the wind-speed characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn set_wind_speed(&self, device_id: &DeviceId, percent: f64) -> Result<(), Error> {
        tracing::debug!(%device_id, percent, "Set wind speed");
        self.apply_set(
            device_id,
            StateChange::FanSpeed(FanSpeed::from_wind_percent(percent)),
        )
        .await
    }

    /// Get handler for the water-level characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] for an unknown device id.
    pub async fn water_level(&self, device_id: &DeviceId) -> Result<u8, Error> {
        self.read(device_id, |d| d.state.water_level()).await
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Runs a read-only closure against one device.
    async fn read<T>(
        &self,
        device_id: &DeviceId,
        f: impl FnOnce(&BridgedDevice) -> T,
    ) -> Result<T, Error> {
        let devices = self.devices.read().await;
        let device = devices.get(device_id).ok_or(Error::DeviceNotFound)?;
        Ok(f(device))
    }

    /// Applies a decoded set and transmits when state changed.
    async fn apply_set(&self, device_id: &DeviceId, change: StateChange) -> Result<(), Error> {
        let mut devices = self.devices.write().await;
        let device = devices.get_mut(device_id).ok_or(Error::DeviceNotFound)?;

        if device.state.apply(&change) {
            self.transmit(&device.state);
        }
        Ok(())
    }

    /// Hands the full state snapshot to the transport, fire-and-forget.
    fn transmit(&self, state: &DeviceState) {
        tracing::debug!(device_id = %state.id(), "Sending state update to device");
        self.transport.send_update(state);
    }

    /// Spawns the per-device push loop.
    ///
    /// The first tick fires one interval after registration, then the
    /// loop republishes the full characteristic set every interval
    /// until the device is removed from the registry (the handle is
    /// also aborted on deregistration, whichever happens first).
    fn spawn_push_loop(&self, device_id: DeviceId) -> JoinHandle<()> {
        let devices = Arc::clone(&self.devices);
        let event_bus = self.event_bus.clone();
        let callbacks = Arc::clone(&self.callbacks);
        let period = self.push_interval;

        tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);

            loop {
                ticker.tick().await;

                let snapshot = {
                    let devices = devices.read().await;
                    let Some(device) = devices.get(&device_id) else {
                        break;
                    };
                    device.snapshot()
                };
                let Some(snapshot) = snapshot else {
                    break;
                };

                callbacks.notify_surface_update(&device_id, &snapshot);
                event_bus.publish(BridgeEvent::surface_updated(
                    device_id.clone(),
                    snapshot,
                ));
            }

            tracing::debug!(%device_id, "Push loop stopped");
        })
    }
}

impl Clone for Bridge {
    fn clone(&self) -> Self {
        Self {
            devices: Arc::clone(&self.devices),
            event_bus: self.event_bus.clone(),
            callbacks: Arc::clone(&self.callbacks),
            overrides: Arc::clone(&self.overrides),
            transport: Arc::clone(&self.transport),
            push_interval: self.push_interval,
        }
    }
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("push_interval", &self.push_interval)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::overrides::StaticOverrides;
    use crate::types::{OperationalMode, PowerState, SwingAxis};

    /// Transport that counts transmissions and keeps the last snapshot.
    #[derive(Default)]
    struct RecordingTransport {
        sends: AtomicUsize,
        last: Mutex<Option<DeviceState>>,
    }

    impl RecordingTransport {
        fn send_count(&self) -> usize {
            self.sends.load(Ordering::SeqCst)
        }

        fn last_state(&self) -> Option<DeviceState> {
            self.last.lock().unwrap().clone()
        }
    }

    impl DeviceTransport for RecordingTransport {
        fn send_update(&self, state: &DeviceState) {
            self.sends.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(state.clone());
        }
    }

    fn bridge_with(overrides: StaticOverrides) -> (Bridge, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::default());
        let bridge = Bridge::new(Arc::new(overrides), Arc::<RecordingTransport>::clone(&transport));
        (bridge, transport)
    }

    #[tokio::test]
    async fn register_without_overrides_uses_defaults() {
        let (bridge, _) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        let state = bridge.state(&id).await.unwrap();
        assert_eq!(state.supported_swing(), SwingAxis::None);
        assert!((state.temperature_bounds().step - 1.0).abs() < f64::EPSILON);
        assert_eq!(bridge.device_count().await, 1);
    }

    #[tokio::test]
    async fn register_publishes_lifecycle_event() {
        let (bridge, _) = bridge_with(StaticOverrides::new());
        let mut events = bridge.subscribe();

        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        let event = events.recv().await.unwrap();
        assert_eq!(event, BridgeEvent::registered(id));
    }

    #[tokio::test]
    async fn set_target_temperature_transmits_once() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        bridge.set_target_temperature(&id, 22.5).await.unwrap();
        assert_eq!(transport.send_count(), 1);
        assert!((bridge.target_temperature(&id).await.unwrap() - 22.5).abs() < f64::EPSILON);

        // Idempotent: the identical set transmits nothing.
        bridge.set_target_temperature(&id, 22.5).await.unwrap();
        assert_eq!(transport.send_count(), 1);
    }

    #[tokio::test]
    async fn transmitted_snapshot_is_full_state() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        bridge.set_power_state(&id, Active::Active).await.unwrap();

        let sent = transport.last_state().unwrap();
        assert_eq!(sent.id(), &id);
        assert_eq!(sent.power(), PowerState::On);
        // Untouched fields ride along in the snapshot.
        assert!((sent.target_temperature() - 24.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn rotation_speed_buckets_are_idempotent() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        bridge.set_rotation_speed(&id, 40.0).await.unwrap();
        assert_eq!(transport.send_count(), 1);
        assert_eq!(bridge.rotation_speed(&id).await.unwrap(), 50);

        // A different percentage in the same bucket is a no-op.
        bridge.set_rotation_speed(&id, 33.0).await.unwrap();
        assert_eq!(transport.send_count(), 1);
    }

    #[tokio::test]
    async fn fan_mode_on_while_off_powers_on_with_one_transmission() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        bridge.set_fan_mode_active(&id, Active::Active).await.unwrap();

        let state = bridge.state(&id).await.unwrap();
        assert_eq!(state.power(), PowerState::On);
        assert_eq!(state.operational_mode(), OperationalMode::FanOnly);
        assert_eq!(transport.send_count(), 1);
        assert_eq!(bridge.fan_mode_active(&id).await.unwrap(), Active::Active);
    }

    #[tokio::test]
    async fn fan_mode_off_powers_off() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        bridge.set_fan_mode_active(&id, Active::Active).await.unwrap();
        bridge
            .set_fan_mode_active(&id, Active::Inactive)
            .await
            .unwrap();

        let state = bridge.state(&id).await.unwrap();
        assert_eq!(state.power(), PowerState::Off);
        assert_eq!(transport.send_count(), 2);

        // Deactivating an already-off device transmits nothing.
        bridge
            .set_fan_mode_active(&id, Active::Inactive)
            .await
            .unwrap();
        assert_eq!(transport.send_count(), 2);
    }

    #[tokio::test]
    async fn swing_enable_uses_supported_axis() {
        let overrides = StaticOverrides::new().with("d1", "supportedSwingMode", "Vertical");
        let (bridge, transport) = bridge_with(overrides);
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        bridge.set_swing(&id, SwingSetting::Enabled).await.unwrap();

        let state = bridge.state(&id).await.unwrap();
        assert_eq!(state.swing_mode(), SwingAxis::Vertical.as_code());
        assert_eq!(transport.send_count(), 1);
        assert_eq!(bridge.swing(&id).await.unwrap(), SwingSetting::Enabled);
    }

    #[tokio::test]
    async fn swing_enable_without_support_is_inert() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        bridge.set_swing(&id, SwingSetting::Enabled).await.unwrap();

        assert_eq!(bridge.state(&id).await.unwrap().swing_mode(), 0);
        assert_eq!(bridge.swing(&id).await.unwrap(), SwingSetting::Disabled);
        assert_eq!(transport.send_count(), 0);
    }

    #[tokio::test]
    async fn target_climate_state_compares_encoded() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        // Off encodes as Auto, so requesting Auto changes nothing.
        bridge
            .set_target_climate_state(&id, TargetClimateState::Auto)
            .await
            .unwrap();
        assert_eq!(transport.send_count(), 0);
        assert_eq!(
            bridge.state(&id).await.unwrap().operational_mode(),
            OperationalMode::Off
        );

        bridge
            .set_target_climate_state(&id, TargetClimateState::Cool)
            .await
            .unwrap();
        assert_eq!(transport.send_count(), 1);
        assert_eq!(
            bridge.state(&id).await.unwrap().operational_mode(),
            OperationalMode::Cooling
        );
        assert_eq!(
            bridge.target_climate_state(&id).await.unwrap(),
            TargetClimateState::Cool
        );
    }

    #[tokio::test]
    async fn dehumidifier_target_set_leaves_other_program() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::dehumidifier("d2", "Basement"))
            .await;

        // Already in the dehumidify program: no-op.
        bridge
            .set_target_dehumidifier_state(&id, TargetDehumidifierState::Dehumidifier)
            .await
            .unwrap();
        assert_eq!(transport.send_count(), 0);

        // Device reported some other program; the set corrects it.
        bridge
            .apply_report(
                &id,
                &StatusReport {
                    operational_mode: Some(OperationalMode::Auto.as_code()),
                    ..StatusReport::default()
                },
            )
            .await
            .unwrap();
        bridge
            .set_target_dehumidifier_state(&id, TargetDehumidifierState::Dehumidifier)
            .await
            .unwrap();
        assert_eq!(transport.send_count(), 1);
    }

    #[tokio::test]
    async fn humidity_threshold_clamps() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::dehumidifier("d2", "Basement"))
            .await;

        bridge.set_humidity_threshold(&id, 140.0).await.unwrap();
        assert_eq!(bridge.humidity_threshold(&id).await.unwrap(), 100);
        assert_eq!(transport.send_count(), 1);
    }

    #[tokio::test]
    async fn wind_speed_uses_dehumidifier_scale() {
        let (bridge, _) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::dehumidifier("d2", "Basement"))
            .await;

        bridge.set_wind_speed(&id, 45.0).await.unwrap();
        assert_eq!(
            bridge.state(&id).await.unwrap().fan_speed(),
            FanSpeed::Medium
        );
        assert_eq!(bridge.wind_speed(&id).await.unwrap(), 60);
    }

    #[tokio::test]
    async fn report_updates_state_without_transmission() {
        let (bridge, transport) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        let report = StatusReport {
            power_state: Some(1),
            operational_mode: Some(OperationalMode::Cooling.as_code()),
            indoor_temperature: Some(26.0),
            ..StatusReport::default()
        };
        bridge.apply_report(&id, &report).await.unwrap();

        assert_eq!(transport.send_count(), 0);
        assert_eq!(
            bridge.current_climate_state(&id).await.unwrap(),
            CurrentClimateState::Cooling
        );
        assert!((bridge.current_temperature(&id).await.unwrap() - 26.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn unknown_device_yields_not_found() {
        let (bridge, _) = bridge_with(StaticOverrides::new());
        let unknown = DeviceId::new("ghost");

        assert!(matches!(
            bridge.power_state(&unknown).await,
            Err(Error::DeviceNotFound)
        ));
        assert!(matches!(
            bridge.set_power_state(&unknown, Active::Active).await,
            Err(Error::DeviceNotFound)
        ));
        assert!(matches!(
            bridge.apply_report(&unknown, &StatusReport::default()).await,
            Err(Error::DeviceNotFound)
        ));
    }

    #[tokio::test]
    async fn deregister_removes_device() {
        let (bridge, _) = bridge_with(StaticOverrides::new());
        let id = bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;

        assert!(bridge.deregister(&id).await);
        assert_eq!(bridge.device_count().await, 0);
        assert!(!bridge.deregister(&id).await);
    }

    #[tokio::test]
    async fn unsupported_archetype_registers_degraded() {
        let (bridge, _) = bridge_with(StaticOverrides::new());
        let id = bridge.register(DeviceConfig::new("d9", 0x10, "Mystery")).await;

        assert_eq!(
            bridge.properties(&id).await,
            Some(SurfaceProperties::Unsupported)
        );
        assert!(bridge.snapshot(&id).await.is_none());
        // Still registered, still removable.
        assert!(bridge.deregister(&id).await);
    }

    #[tokio::test]
    async fn callback_subscribers_see_lifecycle() {
        let (bridge, _) = bridge_with(StaticOverrides::new());
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        bridge.callbacks().on_device_registered(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        bridge
            .register(DeviceConfig::climate_unit("d1", "AC"))
            .await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
