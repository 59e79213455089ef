// src/events/handlers.rs
//
// Standard subscribers: observability only, no state mutation.

use crate::events::bus::EventBus;
use crate::events::types::{
    CategoryResolutionFailed, CategoryResolved, CharacterCompleted, CharacterPersisted,
    CharacterRosterResolved, FilmsIndexLoaded, MovieOpened,
};

/// Attach the logging subscribers to a bus
pub fn register_logging_handlers(bus: &EventBus) {
    bus.subscribe::<FilmsIndexLoaded, _>(|event| {
        log::info!(
            "films index loaded: {} films (from_cache={})",
            event.films_count,
            event.from_cache
        );
    });

    bus.subscribe::<MovieOpened, _>(|event| {
        log::info!(
            "movie {} opened: {} (from_cache={})",
            event.movie_id,
            event.title,
            event.from_cache
        );
    });

    bus.subscribe::<CharacterRosterResolved, _>(|event| {
        log::info!(
            "movie {} roster resolved: {} characters fetched",
            event.movie_id,
            event.characters_fetched
        );
    });

    bus.subscribe::<CategoryResolved, _>(|event| {
        log::debug!(
            "{} resolved for {} ({} values)",
            event.category,
            event.character_url,
            event.values_count
        );
    });

    bus.subscribe::<CategoryResolutionFailed, _>(|event| {
        log::warn!(
            "{} resolution failed for {}: {}",
            event.category,
            event.character_url,
            event.reason
        );
    });

    bus.subscribe::<CharacterCompleted, _>(|event| {
        log::info!("character complete: {}", event.character_url);
    });

    bus.subscribe::<CharacterPersisted, _>(|event| {
        log::info!(
            "character persisted into movie {}: {}",
            event.movie_id,
            event.character_url
        );
    });
}
