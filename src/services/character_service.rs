// src/services/character_service.rs
//
// Character Completion Tracker
//
// Launches the five category chains of one character concurrently and joins
// them with an explicit barrier: when the join returns, every chain has
// either resolved or failed, so completion is checked exactly once and
// persistence fires at most once. There is no re-check loop and no fixed
// polling interval.
//
// CRITICAL RULES:
// - Category chains are independent: one failure never aborts a sibling
// - A character is persisted only when all five categories are loaded
// - A failed category stays unloaded; the character is simply never cached
// - Already-loaded categories are skipped on re-entry (no refetch)

use std::sync::{Arc, RwLock};

use crate::domain::{validate_character, Category, CharacterRecord};
use crate::error::{AppError, AppResult};
use crate::events::{
    CategoryResolutionFailed, CategoryResolved, CharacterCompleted, CharacterPersisted, EventBus,
};
use crate::repositories::CacheStore;
use crate::services::reference_resolution_service::ReferenceResolutionService;

/// A character record shared between the orchestrator's roster and the
/// in-flight resolution chains; partial categories are visible through it
/// while resolution runs.
pub type SharedCharacter = Arc<RwLock<CharacterRecord>>;

/// One permanently-aborted category chain
#[derive(Debug, Clone)]
pub struct CategoryFailure {
    pub category: Category,
    pub reason: String,
}

/// Outcome of resolving one character
#[derive(Debug, Clone)]
pub struct CharacterResolution {
    pub character_url: String,
    /// All five categories loaded
    pub completed: bool,
    /// The record was written into the cached aggregate by this call
    pub persisted: bool,
    pub failed_categories: Vec<CategoryFailure>,
}

pub struct CharacterService {
    resolver: Arc<ReferenceResolutionService>,
    cache: Arc<dyn CacheStore>,
    event_bus: Arc<EventBus>,
}

impl CharacterService {
    pub fn new(
        resolver: Arc<ReferenceResolutionService>,
        cache: Arc<dyn CacheStore>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            resolver,
            cache,
            event_bus,
        }
    }

    /// Resolve all five categories of one character and persist the record
    /// into the movie's cached aggregate once it is complete.
    ///
    /// Re-entrant: a character that is already complete returns immediately
    /// with zero fetches, and a character with some categories loaded from a
    /// previous partial run only resolves the missing ones.
    pub async fn resolve_character(
        &self,
        movie_id: u32,
        character: &SharedCharacter,
    ) -> AppResult<CharacterResolution> {
        let (url, already_complete) = {
            let record = character.read().unwrap();
            (record.url.clone(), record.is_complete())
        };

        if already_complete {
            return Ok(CharacterResolution {
                character_url: url,
                completed: true,
                persisted: false,
                failed_categories: Vec::new(),
            });
        }

        log::debug!("resolving character {}", url);

        // The explicit completion barrier: all five chains run concurrently
        // and the join returns only when every one has resolved or failed.
        let outcomes = tokio::join!(
            self.run_category(Category::Homeworld, character),
            self.run_category(Category::Species, character),
            self.run_category(Category::Films, character),
            self.run_category(Category::Vehicles, character),
            self.run_category(Category::Starships, character),
        );

        let failed_categories: Vec<CategoryFailure> = [
            outcomes.0, outcomes.1, outcomes.2, outcomes.3, outcomes.4,
        ]
        .into_iter()
        .flatten()
        .collect();

        let completed = character.read().unwrap().is_complete();
        let mut persisted = false;

        if completed {
            self.event_bus
                .emit(CharacterCompleted::new(movie_id, url.clone()));
            self.persist(movie_id, character)?;
            persisted = true;
        }

        Ok(CharacterResolution {
            character_url: url,
            completed,
            persisted,
            failed_categories,
        })
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// Run one category chain to completion or first failure.
    /// Returns the failure, if any; success is recorded on the shared record.
    async fn run_category(
        &self,
        category: Category,
        character: &SharedCharacter,
    ) -> Option<CategoryFailure> {
        let (url, refs) = {
            let record = character.read().unwrap();
            if record.category_loaded(category) {
                return None;
            }
            (record.url.clone(), record.category_refs(category).to_vec())
        };

        match self.resolver.resolve_category(category, &refs).await {
            Ok(values) => {
                let values_count = values.len();
                character.write().unwrap().record_category(category, values);
                self.event_bus.emit(CategoryResolved::new(
                    url,
                    category.to_string(),
                    values_count,
                ));
                None
            }
            Err(error) => {
                let reason = error.to_string();
                log::warn!("{} chain aborted for {}: {}", category, url, reason);
                self.event_bus.emit(CategoryResolutionFailed::new(
                    url,
                    category.to_string(),
                    reason.clone(),
                ));
                Some(CategoryFailure { category, reason })
            }
        }
    }

    /// Write the now-complete record into the movie's cached aggregate
    fn persist(&self, movie_id: u32, character: &SharedCharacter) -> AppResult<()> {
        let record = character.read().unwrap().clone();

        validate_character(&record).map_err(AppError::Domain)?;

        let mut aggregate = self.cache.read_movie(movie_id)?.ok_or(AppError::NotFound)?;
        let url = record.url.clone();

        aggregate.upsert_character(record);
        self.cache.upsert_movie(&aggregate)?;

        self.event_bus.emit(CharacterPersisted::new(movie_id, url));

        Ok(())
    }
}
