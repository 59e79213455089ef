use super::entity::FilmSummary;
use crate::domain::{is_resource_url, DomainError, DomainResult};

/// Validates all FilmSummary invariants
pub fn validate_film(film: &FilmSummary) -> DomainResult<()> {
    if film.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Film title cannot be empty".to_string(),
        ));
    }

    if !is_resource_url(&film.url) {
        return Err(DomainError::InvariantViolation(format!(
            "Film url is not a resource address: {}",
            film.url
        )));
    }

    if film.episode_roman.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Film roman numeral cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Invariants that must hold true for the film domain:
///
/// 1. A summary is immutable once fetched
/// 2. The numeric id matches the trailing segment of the address
/// 3. The films index holds at most one summary per id
/// 4. The index is ordered by episode id

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilmSummary {
        FilmSummary::new(
            1,
            "A New Hope".to_string(),
            "https://swapi.dev/api/films/1/".to_string(),
            4,
            "IV".to_string(),
            1977,
        )
    }

    #[test]
    fn test_valid_film() {
        assert!(validate_film(&sample()).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let mut film = sample();
        film.title = "   ".to_string();
        assert!(validate_film(&film).is_err());
    }

    #[test]
    fn test_collection_url_fails() {
        let mut film = sample();
        film.url = "https://swapi.dev/api/films/".to_string();
        assert!(validate_film(&film).is_err());
    }
}
