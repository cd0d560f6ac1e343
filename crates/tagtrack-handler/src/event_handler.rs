use std::sync::Arc;
use tracing::{debug, info, warn};

use tagtrack_domain::PresenceService;

use crate::error::domain_error_to_response;
use crate::event::{DeviceSeenEvent, EventResponse};

/// Event boundary for the presence engine
/// Handles wire → domain mapping and error conversion; every invocation
/// returns a structured response, errors never escape
pub struct PresenceEventHandler {
    service: Arc<PresenceService>,
}

impl PresenceEventHandler {
    pub fn new(service: Arc<PresenceService>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, event: DeviceSeenEvent) -> EventResponse {
        debug!(
            device_id = %event.device_id,
            room = %event.room,
            "Received seen event"
        );

        match self.service.process_event(event.into()).await {
            Ok(state) => {
                info!(
                    device_id = %state.device_id,
                    presence = %state.presence.as_str(),
                    "Event processed"
                );
                EventResponse::updated()
            }
            Err(e) => {
                warn!(error = %e, "Event processing failed");
                domain_error_to_response(e)
            }
        }
    }
}
