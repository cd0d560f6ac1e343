use serde::{Deserialize, Serialize};

use tagtrack_domain::SeenEvent;

/// Wire representation of a single "seen in room" invocation input
///
/// Absent keys deserialize to empty strings and are rejected by the
/// engine's validation, so a missing field and an empty field report the
/// same way.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSeenEvent {
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub room: String,
}

impl From<DeviceSeenEvent> for SeenEvent {
    fn from(event: DeviceSeenEvent) -> Self {
        Self {
            device_id: event.device_id,
            room: event.room,
        }
    }
}

/// Wire representation of the invocation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub status_code: u16,
    pub body: String,
}

impl EventResponse {
    pub fn new(status_code: u16, body: &str) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }

    pub fn updated() -> Self {
        Self::new(200, "Data updated successfully")
    }

    pub fn missing_parameters() -> Self {
        Self::new(400, "Missing required parameters")
    }
}
