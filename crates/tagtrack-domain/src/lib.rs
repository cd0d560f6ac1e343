pub mod error;
pub mod in_memory_store;
pub mod presence_service;
pub mod repository;
pub mod transition;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use in_memory_store::InMemoryDeviceStateStore;
pub use presence_service::{PresenceService, PresenceServiceConfig};
pub use repository::DeviceStateRepository;
pub use transition::next_state;
pub use types::{DeviceState, Presence, SeenEvent, UpdateStateInput};
