use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{DomainError, DomainResult};
use crate::repository::DeviceStateRepository;
use crate::transition::next_state;
use crate::types::{DeviceState, SeenEvent};

/// Behavior toggles for the presence engine
#[derive(Debug, Clone, Default)]
pub struct PresenceServiceConfig {
    /// When true, an event for a device without a record registers the
    /// device (checked out, then transitioned into the observed room)
    /// instead of failing with DeviceNotFound. Off by default.
    pub register_unknown_devices: bool,
}

/// Domain service for presence tracking business logic
/// This is the orchestration layer that handlers call
///
/// Flow:
/// 1. Validate the event
/// 2. Fetch the current state
/// 3. Compute the transition
/// 4. Persist the next state
///
/// Store failures are terminal for the current event; nothing is retried
/// here. There is no cross-event locking either: concurrent events for
/// the same device interleave read-modify-write and the last writer wins.
pub struct PresenceService {
    repository: Arc<dyn DeviceStateRepository>,
    config: PresenceServiceConfig,
}

impl PresenceService {
    pub fn new(repository: Arc<dyn DeviceStateRepository>) -> Self {
        Self {
            repository,
            config: PresenceServiceConfig::default(),
        }
    }

    pub fn with_config(
        repository: Arc<dyn DeviceStateRepository>,
        config: PresenceServiceConfig,
    ) -> Self {
        Self { repository, config }
    }

    /// Apply a single "seen in room" event and return the persisted state
    pub async fn process_event(&self, event: SeenEvent) -> DomainResult<DeviceState> {
        if event.device_id.is_empty() {
            return Err(DomainError::InvalidDeviceId(
                "Device ID cannot be empty".to_string(),
            ));
        }

        if event.room.is_empty() {
            return Err(DomainError::InvalidRoomId(
                "Room ID cannot be empty".to_string(),
            ));
        }

        debug!(device_id = %event.device_id, room = %event.room, "Processing seen event");

        let current = self.repository.get_state(&event.device_id).await?;

        let current = match current {
            Some(state) => state,
            None if self.config.register_unknown_devices => {
                return self.register_and_transition(event).await;
            }
            None => {
                warn!(device_id = %event.device_id, "No state recorded for device");
                return Err(DomainError::DeviceNotFound(event.device_id));
            }
        };

        // Guarded by the not-found check above, but a missing next state
        // must still map to DeviceNotFound rather than panic
        let next = next_state(Some(&current), &event.room)
            .ok_or_else(|| DomainError::DeviceNotFound(event.device_id.clone()))?;

        debug!(
            device_id = %next.device_id,
            presence = %next.presence.as_str(),
            room = ?next.room,
            "Determined next state"
        );

        let updated = self.repository.update_state(next.clone().into()).await?;

        if !updated {
            warn!(
                device_id = %next.device_id,
                "State update affected no record"
            );
            return Err(DomainError::UpdateFailed(next.device_id));
        }

        info!(
            device_id = %next.device_id,
            presence = %next.presence.as_str(),
            "Device state updated"
        );

        Ok(next)
    }

    /// Registers a never-seen device as if it had just checked out, then
    /// applies the transition for the observed room. Only reachable with
    /// `register_unknown_devices` enabled.
    async fn register_and_transition(&self, event: SeenEvent) -> DomainResult<DeviceState> {
        let baseline = DeviceState::checked_out(event.device_id.clone());
        let next = next_state(Some(&baseline), &event.room)
            .ok_or_else(|| DomainError::DeviceNotFound(event.device_id.clone()))?;

        self.repository.upsert_state(next.clone().into()).await?;

        info!(
            device_id = %next.device_id,
            room = ?next.room,
            "Registered unknown device"
        );

        Ok(next)
    }
}
