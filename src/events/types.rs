// src/events/types.rs
//
// All dossier events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all dossier events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// FILMS INDEX EVENTS
// ============================================================================

/// Emitted when the films index becomes available
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmsIndexLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub films_count: usize,
    pub from_cache: bool,
}

impl FilmsIndexLoaded {
    pub fn new(films_count: usize, from_cache: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            films_count,
            from_cache,
        }
    }
}

impl DomainEvent for FilmsIndexLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FilmsIndexLoaded" }
}

// ============================================================================
// MOVIE EVENTS
// ============================================================================

/// Emitted when a movie dossier is opened (from cache or network)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieOpened {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: u32,
    pub title: String,
    pub from_cache: bool,
}

impl MovieOpened {
    pub fn new(movie_id: u32, title: String, from_cache: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
            from_cache,
        }
    }
}

impl DomainEvent for MovieOpened {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MovieOpened" }
}

/// Emitted when a movie's character reference list has been fully consumed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRosterResolved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: u32,
    pub characters_fetched: usize,
}

impl CharacterRosterResolved {
    pub fn new(movie_id: u32, characters_fetched: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            characters_fetched,
        }
    }
}

impl DomainEvent for CharacterRosterResolved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CharacterRosterResolved" }
}

// ============================================================================
// CHARACTER RESOLUTION EVENTS
// ============================================================================

/// Emitted each time one category of one character finishes resolving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResolved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub character_url: String,
    pub category: String, // "homeworld", "species", "films", "vehicles", "starships"
    pub values_count: usize,
}

impl CategoryResolved {
    pub fn new(character_url: String, category: String, values_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            character_url,
            category,
            values_count,
        }
    }
}

impl DomainEvent for CategoryResolved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CategoryResolved" }
}

/// Emitted when a category chain aborts on its first fetch failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResolutionFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub character_url: String,
    pub category: String,
    pub reason: String,
}

impl CategoryResolutionFailed {
    pub fn new(character_url: String, category: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            character_url,
            category,
            reason,
        }
    }
}

impl DomainEvent for CategoryResolutionFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CategoryResolutionFailed" }
}

/// Emitted when all five categories of a character have resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: u32,
    pub character_url: String,
}

impl CharacterCompleted {
    pub fn new(movie_id: u32, character_url: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            character_url,
        }
    }
}

impl DomainEvent for CharacterCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CharacterCompleted" }
}

/// Emitted when a completed character has been written to the cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterPersisted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: u32,
    pub character_url: String,
}

impl CharacterPersisted {
    pub fn new(movie_id: u32, character_url: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            character_url,
        }
    }
}

impl DomainEvent for CharacterPersisted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CharacterPersisted" }
}
