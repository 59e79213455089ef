// src/services/film_service.rs
//
// Film helpers: id derivation, roman numerals, dossier description
// formatting, and episode-ordered navigation over the films index.

use chrono::{Datelike, NaiveDate};

use crate::domain::{resource_id, FilmSummary};
use crate::error::{AppError, AppResult};
use crate::integrations::FilmResource;

/// Fixed roman numeral table for episodes 1-20
const ROMAN_NUMERALS: [&str; 20] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX",
];

/// Episode number in roman format; falls back to decimal above the table
pub fn roman_numeral(episode: u32) -> String {
    match episode {
        1..=20 => ROMAN_NUMERALS[(episode - 1) as usize].to_string(),
        _ => episode.to_string(),
    }
}

/// Numeric film id carried by the resource address
pub fn film_id_from_url(url: &str) -> AppResult<u32> {
    resource_id(url).map_err(AppError::Domain)
}

/// Four-digit release year from the resource's ISO release date
pub fn release_year(film: &FilmResource) -> AppResult<i32> {
    let date = NaiveDate::parse_from_str(&film.release_date, "%Y-%m-%d").map_err(|e| {
        AppError::Decode(format!(
            "Bad release_date '{}' for {}: {}",
            film.release_date, film.url, e
        ))
    })?;

    Ok(date.year())
}

/// Dossier line for a film: "(<year>) <roman> - <title, commas stripped>"
pub fn film_description(film: &FilmResource) -> AppResult<String> {
    Ok(format!(
        "({}) {} - {}",
        release_year(film)?,
        roman_numeral(film.episode_id),
        film.title.replace(',', "")
    ))
}

/// Build an index entry from a fetched film resource
pub fn build_summary(film: &FilmResource) -> AppResult<FilmSummary> {
    Ok(FilmSummary::new(
        film_id_from_url(&film.url)?,
        film.title.clone(),
        film.url.clone(),
        film.episode_id,
        roman_numeral(film.episode_id),
        release_year(film)?,
    ))
}

/// Order the films index by saga episode
pub fn sort_by_episode(films: &mut [FilmSummary]) {
    films.sort_by_key(|f| f.episode_id);
}

/// Predecessor of the active film, wrapping to the last entry at index 0
pub fn previous_film(films: &[FilmSummary], active_episode: u32) -> Option<&FilmSummary> {
    let position = films.iter().position(|f| f.episode_id == active_episode)?;
    let previous = if position == 0 {
        films.len() - 1
    } else {
        position - 1
    };
    films.get(previous)
}

/// Successor of the active film, wrapping to the first entry at the end
pub fn next_film(films: &[FilmSummary], active_episode: u32) -> Option<&FilmSummary> {
    let position = films.iter().position(|f| f.episode_id == active_episode)?;
    let next = if position == films.len() - 1 {
        0
    } else {
        position + 1
    };
    films.get(next)
}
