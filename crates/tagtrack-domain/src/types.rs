use serde::{Deserialize, Serialize};

/// Whether a device is currently inside a room or checked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    In,
    Out,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::In => "in",
            Presence::Out => "out",
        }
    }
}

impl std::str::FromStr for Presence {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Presence::In),
            "out" => Ok(Presence::Out),
            other => Err(anyhow::anyhow!("unknown presence value: {}", other)),
        }
    }
}

/// Current presence record for a single device.
///
/// Invariant: `room` is `Some` exactly when `presence` is `In`. The
/// constructors are the only way the engine builds new states, so the
/// invariant holds everywhere a state is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    pub device_id: String,
    pub presence: Presence,
    pub room: Option<String>,
}

impl DeviceState {
    /// A device checked into `room`
    pub fn checked_in(device_id: String, room: String) -> Self {
        Self {
            device_id,
            presence: Presence::In,
            room: Some(room),
        }
    }

    /// A device checked out of all rooms
    pub fn checked_out(device_id: String) -> Self {
        Self {
            device_id,
            presence: Presence::Out,
            room: None,
        }
    }
}

/// Input for processing a single "seen in room" observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenEvent {
    pub device_id: String,
    pub room: String,
}

/// Input for persisting a computed state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStateInput {
    pub device_id: String,
    pub presence: Presence,
    pub room: Option<String>,
}

impl From<DeviceState> for UpdateStateInput {
    fn from(state: DeviceState) -> Self {
        Self {
            device_id: state.device_id,
            presence: state.presence,
            room: state.room,
        }
    }
}
