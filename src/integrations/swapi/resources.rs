// src/integrations/swapi/resources.rs
//
// Typed resource bodies served by the film archive API.
//
// Decoding happens at the fetch boundary: a body that does not match one of
// these shapes is rejected there with a decode error instead of letting
// malformed data drift into the aggregates. Fields the engine never reads
// are simply not decoded.

use serde::{Deserialize, Serialize};

/// Paginated envelope of the films collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmsPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<FilmResource>,
}

/// A single film resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmResource {
    pub title: String,
    pub episode_id: u32,
    /// ISO date, e.g. "1977-05-25"
    pub release_date: String,
    /// Character references, in the origin API's order
    pub characters: Vec<String>,
    pub url: String,
}

/// A single character resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonResource {
    pub name: String,
    /// Height in centimeters, or "unknown"
    pub height: String,
    pub homeworld: Option<String>,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    pub url: String,
}

/// Planet, species, vehicle and starship resources all expose a display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}
