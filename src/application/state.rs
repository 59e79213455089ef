// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::services::{AggregationService, CharacterService};

/// Application state handed to the presentation layer.
/// All fields are Arc-wrapped for thread-safe sharing.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub aggregation_service: Arc<AggregationService>,
    pub character_service: Arc<CharacterService>,
}
