// src/lib.rs
// Holocron - Local-first character dossier engine
//
// Architecture:
// - Domain-centric: entities and invariants live in domains
// - Event-driven: services announce facts through the event bus
// - Explicit: no implicit behavior, no magic
// - Local-first: the cache is consulted before every network fetch

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// BOUNDARY LAYERS
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    is_resource_url,
    resource_id,
    validate_character,
    validate_film,
    validate_movie,
    // Character
    Category,
    CharacterRecord,
    // Film
    FilmSummary,
    // Movie
    MovieAggregate,
    NOT_APPLICABLE,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_logging_handlers,
    CategoryResolutionFailed,
    CategoryResolved,
    CharacterCompleted,
    CharacterPersisted,
    CharacterRosterResolved,
    DomainEvent,
    EventBus,
    FilmsIndexLoaded,
    MovieOpened,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, default_database_path, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{CacheStore, SqliteCacheStore};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Aggregation Orchestrator
    AggregationService,
    CategoryFailure,
    CharacterResolution,
    // Character Completion Tracker
    CharacterService,
    LoadPhase,
    // Reference Queue Resolver
    ReferenceResolutionService,
    SelectionOutcome,
    SharedCharacter,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
pub use config::EngineConfig;

// Re-export application submodules
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{ResourceFetcher, SwapiClient, DEFAULT_API_URL};
