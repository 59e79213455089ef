// src/repositories/cache_repository.rs
//
// Durable read-through cache
//
// Two named slots: the films index and the movies index. Each slot is one
// serialized blob, read and rewritten whole - there is no incremental diff.

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::domain::{FilmSummary, MovieAggregate};
use crate::error::{AppError, AppResult};

/// Slot holding the films index
const FILMS_SLOT: &str = "films";

/// Slot holding the movies index
const MOVIES_SLOT: &str = "movies";

pub trait CacheStore: Send + Sync {
    /// The cached films index, or None on first use
    fn read_films(&self) -> AppResult<Option<Vec<FilmSummary>>>;

    /// Overwrite the films index with the given sequence
    fn write_films(&self, films: &[FilmSummary]) -> AppResult<()>;

    /// The cached aggregate for a movie id, or None if never visited
    fn read_movie(&self, id: u32) -> AppResult<Option<MovieAggregate>>;

    /// Remove any existing aggregate with the same id, append the given one,
    /// then persist the whole movies index
    fn upsert_movie(&self, aggregate: &MovieAggregate) -> AppResult<()>;
}

pub struct SqliteCacheStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteCacheStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn read_slot(&self, slot: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM cache_store WHERE slot = ?1",
                params![slot],
                |row| row.get(0),
            )
            .optional()
            .map_err(AppError::Database)?;

        Ok(body)
    }

    fn write_slot(&self, slot: &str, body: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO cache_store (slot, body, updated_at)
             VALUES (?1, ?2, datetime('now'))",
            params![slot, body],
        )?;

        Ok(())
    }

    fn read_movies_index(&self) -> AppResult<Vec<MovieAggregate>> {
        match self.read_slot(MOVIES_SLOT)? {
            Some(body) => Ok(serde_json::from_str(&body)?),
            None => Ok(Vec::new()),
        }
    }
}

impl CacheStore for SqliteCacheStore {
    fn read_films(&self) -> AppResult<Option<Vec<FilmSummary>>> {
        match self.read_slot(FILMS_SLOT)? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    fn write_films(&self, films: &[FilmSummary]) -> AppResult<()> {
        let body = serde_json::to_string(films)?;
        self.write_slot(FILMS_SLOT, &body)
    }

    fn read_movie(&self, id: u32) -> AppResult<Option<MovieAggregate>> {
        let index = self.read_movies_index()?;
        Ok(index.into_iter().find(|m| m.id == id))
    }

    fn upsert_movie(&self, aggregate: &MovieAggregate) -> AppResult<()> {
        let mut index = self.read_movies_index()?;

        // Remove-then-append keeps at most one aggregate per id
        index.retain(|m| m.id != aggregate.id);
        index.push(aggregate.clone());

        let body = serde_json::to_string(&index)?;
        self.write_slot(MOVIES_SLOT, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, get_connection, initialize_database};
    use crate::domain::character::{Category, CharacterRecord};

    fn store() -> SqliteCacheStore {
        let pool = Arc::new(create_memory_pool().unwrap());
        let conn = get_connection(&pool).unwrap();
        initialize_database(&conn).unwrap();
        drop(conn);
        SqliteCacheStore::new(pool)
    }

    fn film(id: u32, episode_id: u32) -> FilmSummary {
        FilmSummary::new(
            id,
            format!("Film {}", id),
            format!("https://swapi.dev/api/films/{}/", id),
            episode_id,
            "IV".to_string(),
            1977,
        )
    }

    fn complete_character(url: &str) -> CharacterRecord {
        let mut record = CharacterRecord::new(
            url.to_string(),
            "Someone".to_string(),
            "180".to_string(),
            None,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        for category in Category::ALL {
            record.record_category(category, vec!["N/A".to_string()]);
        }
        record
    }

    #[test]
    fn test_films_absent_on_first_use() {
        assert!(store().read_films().unwrap().is_none());
    }

    #[test]
    fn test_films_round_trip() {
        let store = store();
        let films = vec![film(1, 4), film(2, 5)];

        store.write_films(&films).unwrap();

        assert_eq!(store.read_films().unwrap().unwrap(), films);
    }

    #[test]
    fn test_write_films_is_full_overwrite() {
        let store = store();
        store.write_films(&[film(1, 4), film(2, 5)]).unwrap();
        store.write_films(&[film(3, 6)]).unwrap();

        assert_eq!(store.read_films().unwrap().unwrap(), vec![film(3, 6)]);
    }

    #[test]
    fn test_movie_round_trip() {
        let store = store();

        let mut aggregate = MovieAggregate::new(
            1,
            "A New Hope".to_string(),
            "https://swapi.dev/api/films/1/".to_string(),
            vec!["https://swapi.dev/api/people/1/".to_string()],
        );
        aggregate.upsert_character(complete_character("https://swapi.dev/api/people/1/"));
        aggregate.mark_selected("https://swapi.dev/api/people/1/");

        store.upsert_movie(&aggregate).unwrap();

        assert_eq!(store.read_movie(1).unwrap().unwrap(), aggregate);
    }

    #[test]
    fn test_movie_absent_when_never_visited() {
        assert!(store().read_movie(99).unwrap().is_none());
    }

    #[test]
    fn test_upsert_keeps_one_aggregate_per_id() {
        let store = store();

        let first = MovieAggregate::new(
            1,
            "A New Hope".to_string(),
            "https://swapi.dev/api/films/1/".to_string(),
            Vec::new(),
        );
        let mut second = first.clone();
        second.title = "A Newer Hope".to_string();

        store.upsert_movie(&first).unwrap();
        store.upsert_movie(&second).unwrap();

        let read = store.read_movie(1).unwrap().unwrap();
        assert_eq!(read.title, "A Newer Hope");

        // The other slot is untouched and the index holds a single entry
        let body = store.read_slot(MOVIES_SLOT).unwrap().unwrap();
        let index: Vec<MovieAggregate> = serde_json::from_str(&body).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_upsert_preserves_sibling_movies() {
        let store = store();

        let one = MovieAggregate::new(
            1,
            "A New Hope".to_string(),
            "https://swapi.dev/api/films/1/".to_string(),
            Vec::new(),
        );
        let two = MovieAggregate::new(
            2,
            "The Empire Strikes Back".to_string(),
            "https://swapi.dev/api/films/2/".to_string(),
            Vec::new(),
        );

        store.upsert_movie(&one).unwrap();
        store.upsert_movie(&two).unwrap();

        assert!(store.read_movie(1).unwrap().is_some());
        assert!(store.read_movie(2).unwrap().is_some());
    }
}
