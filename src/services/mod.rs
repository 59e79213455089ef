// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod aggregation_service;
pub mod character_service;
pub mod film_service;
pub mod reference_resolution_service;

#[cfg(test)]
mod aggregation_service_tests;

// Re-export all services and their types
pub use aggregation_service::{AggregationService, LoadPhase, SelectionOutcome};

pub use character_service::{
    CategoryFailure,
    CharacterResolution,
    CharacterService,
    SharedCharacter,
};

pub use reference_resolution_service::ReferenceResolutionService;
