// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod character;
pub mod film;
pub mod movie;
pub mod reference;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Film Domain
pub use film::{validate_film, FilmSummary};

// Character Domain
pub use character::{validate_character, Category, CharacterRecord, NOT_APPLICABLE};

// Movie Domain
pub use movie::{validate_movie, MovieAggregate};

// Reference Domain
pub use reference::{is_resource_url, resource_id};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Malformed resource reference: {0}")]
    MalformedReference(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
