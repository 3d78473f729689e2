// Application layer
//
// Unit-of-work handlers around the Organizer aggregate: load, apply one
// domain operation, persist, then publish the drained domain events.

pub mod errors;
pub mod events;
pub mod organizer_service;

pub use errors::{ServiceError, ServiceResult};
pub use events::{EventPublisher, TracingEventPublisher};
pub use organizer_service::OrganizerService;
