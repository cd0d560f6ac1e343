use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::DomainResult;
use crate::repository::DeviceStateRepository;
use crate::types::{DeviceState, UpdateStateInput};

/// In-memory implementation of DeviceStateRepository
/// Suitable for tests and single-process local runs
#[derive(Default)]
pub struct InMemoryDeviceStateStore {
    states: RwLock<HashMap<String, DeviceState>>,
}

impl InMemoryDeviceStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record, replacing any existing state for the device
    pub async fn seed(&self, state: DeviceState) {
        let mut states = self.states.write().await;
        states.insert(state.device_id.clone(), state);
    }

    /// Number of devices with a stored record
    pub async fn count(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl DeviceStateRepository for InMemoryDeviceStateStore {
    async fn get_state(&self, device_id: &str) -> DomainResult<Option<DeviceState>> {
        let states = self.states.read().await;
        Ok(states.get(device_id).cloned())
    }

    async fn update_state(&self, input: UpdateStateInput) -> DomainResult<bool> {
        let mut states = self.states.write().await;
        match states.get_mut(&input.device_id) {
            Some(state) => {
                state.presence = input.presence;
                state.room = input.room;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn upsert_state(&self, input: UpdateStateInput) -> DomainResult<()> {
        let mut states = self.states.write().await;
        states.insert(
            input.device_id.clone(),
            DeviceState {
                device_id: input.device_id,
                presence: input.presence,
                room: input.room,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Presence;

    #[tokio::test]
    async fn test_get_state_returns_none_for_unknown_device() {
        let store = InMemoryDeviceStateStore::new();
        assert_eq!(store.get_state("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_seeded_state_is_returned() {
        let store = InMemoryDeviceStateStore::new();
        store
            .seed(DeviceState::checked_in("device-1".to_string(), "room-a".to_string()))
            .await;

        let state = store.get_state("device-1").await.unwrap().unwrap();
        assert_eq!(state.presence, Presence::In);
        assert_eq!(state.room.as_deref(), Some("room-a"));
    }

    #[tokio::test]
    async fn test_update_state_modifies_existing_record() {
        let store = InMemoryDeviceStateStore::new();
        store
            .seed(DeviceState::checked_in("device-1".to_string(), "room-a".to_string()))
            .await;

        let updated = store
            .update_state(UpdateStateInput {
                device_id: "device-1".to_string(),
                presence: Presence::Out,
                room: None,
            })
            .await
            .unwrap();

        assert!(updated);
        let state = store.get_state("device-1").await.unwrap().unwrap();
        assert_eq!(state.presence, Presence::Out);
        assert!(state.room.is_none());
    }

    #[tokio::test]
    async fn test_update_state_reports_missing_record() {
        let store = InMemoryDeviceStateStore::new();

        let updated = store
            .update_state(UpdateStateInput {
                device_id: "device-1".to_string(),
                presence: Presence::In,
                room: Some("room-a".to_string()),
            })
            .await
            .unwrap();

        assert!(!updated);
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_upsert_state_creates_record() {
        let store = InMemoryDeviceStateStore::new();

        store
            .upsert_state(UpdateStateInput {
                device_id: "device-1".to_string(),
                presence: Presence::In,
                room: Some("room-a".to_string()),
            })
            .await
            .unwrap();

        let state = store.get_state("device-1").await.unwrap().unwrap();
        assert_eq!(state, DeviceState::checked_in("device-1".to_string(), "room-a".to_string()));
    }
}
