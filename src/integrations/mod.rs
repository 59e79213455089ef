// src/integrations/mod.rs
//
// External Integrations Module

pub mod swapi;

pub use swapi::client::{ResourceFetcher, SwapiClient, DEFAULT_API_URL};
pub use swapi::resources::{FilmResource, FilmsPage, NamedResource, PersonResource};
