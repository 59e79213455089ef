use serde::{Deserialize, Serialize};

/// A film as stored in the local films index
/// Immutable once fetched; the index is the only owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmSummary {
    /// Numeric id derived from the trailing segment of the resource address
    pub id: u32,

    /// Film title as served by the origin API
    pub title: String,

    /// Absolute resource address
    pub url: String,

    /// Saga episode number (drives index ordering and navigation)
    pub episode_id: u32,

    /// Episode number in roman format ("IV", "V", ...)
    pub episode_roman: String,

    /// Four-digit release year
    pub release_year: i32,
}

impl FilmSummary {
    pub fn new(
        id: u32,
        title: String,
        url: String,
        episode_id: u32,
        episode_roman: String,
        release_year: i32,
    ) -> Self {
        Self {
            id,
            title,
            url,
            episode_id,
            episode_roman,
            release_year,
        }
    }
}

impl std::fmt::Display for FilmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.episode_roman, self.title)
    }
}
