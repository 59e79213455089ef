use serde::{Deserialize, Serialize};

/// Placeholder shown for a category the character simply does not have
pub const NOT_APPLICABLE: &str = "N/A";

/// One of the five resolvable attributes of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Homeworld,
    Species,
    Films,
    Vehicles,
    Starships,
}

impl Category {
    /// All five categories, in the order they are launched
    pub const ALL: [Category; 5] = [
        Category::Homeworld,
        Category::Species,
        Category::Films,
        Category::Vehicles,
        Category::Starships,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Homeworld => write!(f, "homeworld"),
            Category::Species => write!(f, "species"),
            Category::Films => write!(f, "films"),
            Category::Vehicles => write!(f, "vehicles"),
            Category::Starships => write!(f, "starships"),
        }
    }
}

/// A character of one movie, together with the resolution state of its
/// five categories.
///
/// The unresolved reference lists are captured once, when the character
/// resource is fetched, and never mutated afterwards; resolution walks them
/// with a cursor and fills the display-value lists. A record is complete
/// exactly when all five loaded flags are true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Absolute resource address - the identity key of the record
    pub url: String,

    /// Character name as served by the origin API
    pub name: String,

    /// Raw height in centimeters ("unknown" when the API has none)
    pub height: String,

    /// Unresolved homeworld reference (single-valued category)
    pub homeworld_ref: Option<String>,

    /// Unresolved references for the four list-valued categories
    pub species_refs: Vec<String>,
    pub film_refs: Vec<String>,
    pub vehicle_refs: Vec<String>,
    pub starship_refs: Vec<String>,

    /// Resolved display values
    pub homeworld_name: Option<String>,
    pub species_names: Vec<String>,
    pub film_descriptions: Vec<String>,
    pub vehicle_names: Vec<String>,
    pub starship_names: Vec<String>,

    /// Per-category completion flags
    pub homeworld_loaded: bool,
    pub species_loaded: bool,
    pub films_loaded: bool,
    pub vehicles_loaded: bool,
    pub starships_loaded: bool,
}

impl CharacterRecord {
    /// Create an unresolved record from the raw character resource data
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        url: String,
        name: String,
        height: String,
        homeworld_ref: Option<String>,
        species_refs: Vec<String>,
        film_refs: Vec<String>,
        vehicle_refs: Vec<String>,
        starship_refs: Vec<String>,
    ) -> Self {
        Self {
            url,
            name,
            height,
            homeworld_ref,
            species_refs,
            film_refs,
            vehicle_refs,
            starship_refs,
            homeworld_name: None,
            species_names: Vec::new(),
            film_descriptions: Vec::new(),
            vehicle_names: Vec::new(),
            starship_names: Vec::new(),
            homeworld_loaded: false,
            species_loaded: false,
            films_loaded: false,
            vehicles_loaded: false,
            starships_loaded: false,
        }
    }

    /// True exactly when all five categories have resolved
    pub fn is_complete(&self) -> bool {
        self.homeworld_loaded
            && self.species_loaded
            && self.films_loaded
            && self.vehicles_loaded
            && self.starships_loaded
    }

    pub fn category_loaded(&self, category: Category) -> bool {
        match category {
            Category::Homeworld => self.homeworld_loaded,
            Category::Species => self.species_loaded,
            Category::Films => self.films_loaded,
            Category::Vehicles => self.vehicles_loaded,
            Category::Starships => self.starships_loaded,
        }
    }

    /// The unresolved reference list of a category (homeworld is a
    /// zero-or-one element slice)
    pub fn category_refs(&self, category: Category) -> &[String] {
        match category {
            Category::Homeworld => self.homeworld_ref.as_slice(),
            Category::Species => &self.species_refs,
            Category::Films => &self.film_refs,
            Category::Vehicles => &self.vehicle_refs,
            Category::Starships => &self.starship_refs,
        }
    }

    /// Record the resolved display values of a category and mark it loaded.
    /// `values` is never empty: an empty reference list resolves to the
    /// placeholder value.
    pub fn record_category(&mut self, category: Category, values: Vec<String>) {
        match category {
            Category::Homeworld => {
                self.homeworld_name = values.into_iter().next();
                self.homeworld_loaded = true;
            }
            Category::Species => {
                self.species_names = values;
                self.species_loaded = true;
            }
            Category::Films => {
                self.film_descriptions = values;
                self.films_loaded = true;
            }
            Category::Vehicles => {
                self.vehicle_names = values;
                self.vehicles_loaded = true;
            }
            Category::Starships => {
                self.starship_names = values;
                self.starships_loaded = true;
            }
        }
    }
}
