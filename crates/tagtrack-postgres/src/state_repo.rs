use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use tagtrack_domain::{
    DeviceState, DeviceStateRepository, DomainError, DomainResult, UpdateStateInput,
};

use crate::client::PostgresClient;
use crate::models::DeviceStateRow;

/// PostgreSQL implementation of DeviceStateRepository trait
#[derive(Clone)]
pub struct PostgresDeviceStateRepository {
    client: PostgresClient,
}

impl PostgresDeviceStateRepository {
    pub fn new(client: PostgresClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeviceStateRepository for PostgresDeviceStateRepository {
    async fn get_state(&self, device_id: &str) -> DomainResult<Option<DeviceState>> {
        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let row = conn
            .query_opt(
                "SELECT device_id, presence, room_id, created_at, updated_at
                 FROM device_states
                 WHERE device_id = $1",
                &[&device_id],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        match row {
            Some(row) => {
                let state_row = DeviceStateRow {
                    device_id: row.get(0),
                    presence: row.get(1),
                    room_id: row.get(2),
                    created_at: row.get(3),
                    updated_at: row.get(4),
                };
                Ok(Some(state_row.try_into()?))
            }
            None => Ok(None),
        }
    }

    async fn update_state(&self, input: UpdateStateInput) -> DomainResult<bool> {
        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let now = Utc::now();

        let rows_affected = conn
            .execute(
                "UPDATE device_states
                 SET presence = $1, room_id = $2, updated_at = $3
                 WHERE device_id = $4",
                &[
                    &input.presence.as_str(),
                    &input.room,
                    &now,
                    &input.device_id,
                ],
            )
            .await
            .map_err(|e| DomainError::RepositoryError(e.into()))?;

        debug!(
            "Updated state for device {}: {} rows affected",
            input.device_id, rows_affected
        );

        Ok(rows_affected > 0)
    }

    async fn upsert_state(&self, input: UpdateStateInput) -> DomainResult<()> {
        let conn = self
            .client
            .get_connection()
            .await
            .map_err(DomainError::RepositoryError)?;

        let now = Utc::now();

        conn.execute(
            "INSERT INTO device_states (device_id, presence, room_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (device_id)
             DO UPDATE SET presence = EXCLUDED.presence,
                           room_id = EXCLUDED.room_id,
                           updated_at = EXCLUDED.updated_at",
            &[
                &input.device_id,
                &input.presence.as_str(),
                &input.room,
                &now,
                &now,
            ],
        )
        .await
        .map_err(|e| DomainError::RepositoryError(e.into()))?;

        debug!("Upserted state for device {}", input.device_id);

        Ok(())
    }
}
