use std::collections::HashSet;

use super::entity::MovieAggregate;
use crate::domain::character::validate_character;
use crate::domain::{DomainError, DomainResult};

/// Validates all MovieAggregate invariants
pub fn validate_movie(aggregate: &MovieAggregate) -> DomainResult<()> {
    if aggregate.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for character in &aggregate.characters {
        if !seen.insert(character.url.as_str()) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate character in aggregate: {}",
                character.url
            )));
        }

        // Only complete records may live in a persisted aggregate
        if !character.is_complete() {
            return Err(DomainError::InvariantViolation(format!(
                "Incomplete character in aggregate: {}",
                character.url
            )));
        }

        validate_character(character)?;
    }

    Ok(())
}

/// Invariants that must hold true for the movie domain:
///
/// 1. At most one aggregate per movie id exists in the movies index
/// 2. At most one character record per address within an aggregate
/// 3. Every contained character is complete
/// 4. raw_character_refs preserves the origin API's order and never shrinks
/// 5. selected_characters is an ordered subset of the character addresses
