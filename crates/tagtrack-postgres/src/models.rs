use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tagtrack_domain::{DeviceState, DomainError, Presence};

/// Device state row for PostgreSQL storage with timestamp metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceStateRow {
    pub device_id: String,
    pub presence: String,
    pub room_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DeviceStateRow> for DeviceState {
    type Error = DomainError;

    fn try_from(row: DeviceStateRow) -> Result<Self, Self::Error> {
        let presence = Presence::from_str(&row.presence).map_err(DomainError::RepositoryError)?;

        Ok(DeviceState {
            device_id: row.device_id,
            presence,
            room: row.room_id,
        })
    }
}
