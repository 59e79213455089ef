// src/application/dto/mod.rs
//
// Data transfer objects for the presentation layer.
//
// RULES:
// - Read-only projections of domain state
// - Display normalization happens here, never in the domain

use serde::{Deserialize, Serialize};

use crate::domain::{CharacterRecord, FilmSummary, MovieAggregate};

/// Height in meters from the API's raw centimeter string
/// ("unknown" and friends become None)
fn height_in_meters(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().map(|cm| cm / 100.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmDto {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub episode_id: u32,
    pub episode_roman: String,
    pub release_year: i32,
}

impl From<FilmSummary> for FilmDto {
    fn from(film: FilmSummary) -> Self {
        Self {
            id: film.id,
            title: film.title,
            url: film.url,
            episode_id: film.episode_id,
            episode_roman: film.episode_roman,
            release_year: film.release_year,
        }
    }
}

/// A character with its per-category resolution state visible, so a
/// presentation layer can render partial dossiers while chains run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDto {
    pub url: String,
    pub name: String,
    pub height_m: Option<f64>,
    pub homeworld: Option<String>,
    pub species: Vec<String>,
    pub films: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    pub homeworld_loaded: bool,
    pub species_loaded: bool,
    pub films_loaded: bool,
    pub vehicles_loaded: bool,
    pub starships_loaded: bool,
    pub complete: bool,
}

impl From<CharacterRecord> for CharacterDto {
    fn from(record: CharacterRecord) -> Self {
        let complete = record.is_complete();
        Self {
            height_m: height_in_meters(&record.height),
            url: record.url,
            name: record.name,
            homeworld: record.homeworld_name,
            species: record.species_names,
            films: record.film_descriptions,
            vehicles: record.vehicle_names,
            starships: record.starship_names,
            homeworld_loaded: record.homeworld_loaded,
            species_loaded: record.species_loaded,
            films_loaded: record.films_loaded,
            vehicles_loaded: record.vehicles_loaded,
            starships_loaded: record.starships_loaded,
            complete,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub characters: Vec<CharacterDto>,
    pub selected_characters: Vec<String>,
}

impl MovieDto {
    /// Combine the persisted aggregate with the live roster snapshot
    pub fn new(aggregate: MovieAggregate, roster: Vec<CharacterRecord>) -> Self {
        Self {
            id: aggregate.id,
            title: aggregate.title,
            url: aggregate.url,
            characters: roster.into_iter().map(CharacterDto::from).collect(),
            selected_characters: aggregate.selected_characters,
        }
    }
}
