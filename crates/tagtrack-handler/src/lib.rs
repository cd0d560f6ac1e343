pub mod error;
pub mod event;
pub mod event_handler;

pub use error::domain_error_to_response;
pub use event::{DeviceSeenEvent, EventResponse};
pub use event_handler::PresenceEventHandler;
