use crate::types::{DeviceState, Presence};

/// Computes the next presence state after a device was seen in
/// `observed_room`.
///
/// Returns `None` when there is no current record (unknown device).
/// A checked-out device is checked into the observed room. A device seen
/// in the room it is already checked into is treated as leaving; seeing
/// it in a different room moves it there directly, without an
/// intervening departure.
pub fn next_state(current: Option<&DeviceState>, observed_room: &str) -> Option<DeviceState> {
    let current = current?;

    let next = match (current.presence, current.room.as_deref()) {
        (Presence::Out, _) => {
            DeviceState::checked_in(current.device_id.clone(), observed_room.to_string())
        }
        (Presence::In, Some(room)) if room == observed_room => {
            DeviceState::checked_out(current.device_id.clone())
        }
        (Presence::In, _) => {
            DeviceState::checked_in(current.device_id.clone(), observed_room.to_string())
        }
    };

    Some(next)
}
