// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;

pub use bus::EventBus;
pub use handlers::register_logging_handlers;
pub use types::{
    CategoryResolutionFailed,
    CategoryResolved,
    CharacterCompleted,
    CharacterPersisted,
    CharacterRosterResolved,
    DomainEvent,
    FilmsIndexLoaded,
    MovieOpened,
};

use std::sync::Arc;

/// Create an event bus with the standard logging subscribers attached
pub fn create_event_bus() -> Arc<EventBus> {
    let bus = Arc::new(EventBus::new());
    register_logging_handlers(&bus);
    bus
}
