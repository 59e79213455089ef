use super::entity::{Category, CharacterRecord};
use crate::domain::{is_resource_url, DomainError, DomainResult};

/// Validates all CharacterRecord invariants
pub fn validate_character(record: &CharacterRecord) -> DomainResult<()> {
    if record.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Character name cannot be empty".to_string(),
        ));
    }

    if !is_resource_url(&record.url) {
        return Err(DomainError::InvariantViolation(format!(
            "Character url is not a resource address: {}",
            record.url
        )));
    }

    validate_loaded_outputs(record)?;

    Ok(())
}

/// A category marked loaded always carries at least one display value
/// (resolution substitutes the placeholder for an empty reference list)
fn validate_loaded_outputs(record: &CharacterRecord) -> DomainResult<()> {
    let outputs: [(Category, bool); 5] = [
        (Category::Homeworld, record.homeworld_name.is_some()),
        (Category::Species, !record.species_names.is_empty()),
        (Category::Films, !record.film_descriptions.is_empty()),
        (Category::Vehicles, !record.vehicle_names.is_empty()),
        (Category::Starships, !record.starship_names.is_empty()),
    ];

    for (category, has_output) in outputs {
        if record.category_loaded(category) && !has_output {
            return Err(DomainError::InvariantViolation(format!(
                "Category {} is marked loaded but has no display value",
                category
            )));
        }
    }

    Ok(())
}

/// Invariants that must hold true for the character domain:
///
/// 1. The resource address is the identity key and never changes
/// 2. Reference lists are captured once and never mutated
/// 3. A loaded category has at least one display value
/// 4. A record is complete iff all five loaded flags are true
/// 5. Only complete records are ever persisted
