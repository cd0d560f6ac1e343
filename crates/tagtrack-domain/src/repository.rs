use async_trait::async_trait;

use crate::error::DomainResult;
use crate::types::{DeviceState, UpdateStateInput};

/// Repository trait for device presence storage
/// Infrastructure layer (e.g., tagtrack-postgres) implements this trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceStateRepository: Send + Sync {
    /// Fetch the current state for a device, `None` if no record exists
    async fn get_state(&self, device_id: &str) -> DomainResult<Option<DeviceState>>;

    /// Persist a computed state over an existing record
    ///
    /// Returns `true` iff at least one record was modified. `false` means
    /// the record vanished between read and write; callers decide how to
    /// surface that.
    async fn update_state(&self, input: UpdateStateInput) -> DomainResult<bool>;

    /// Insert a record or overwrite an existing one
    ///
    /// Only used when unknown devices are registered on first sight; the
    /// default engine path never creates records.
    async fn upsert_state(&self, input: UpdateStateInput) -> DomainResult<()>;
}
