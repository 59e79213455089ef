// src/services/aggregation_service.rs
//
// Aggregation Orchestrator
//
// Drives the movie-to-dossier pipeline: films index → one movie's character
// reference list → per-character category resolution → cache write-back.
// The service owns the cache handles and all session state; the
// presentation layer only ever sees read snapshots.
//
// State machine per movie navigation:
//   Idle → FilmsResolving → CharacterListResolving → PerCharacterResolving
//        → Settled
// Each arrow consults the cache before touching the network. A films-list or
// movie-resource failure aborts the navigation and returns the machine to
// Idle; per-category failures are scoped to the character service.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::{CharacterRecord, FilmSummary, MovieAggregate};
use crate::error::{AppError, AppResult};
use crate::events::{CharacterRosterResolved, EventBus, FilmsIndexLoaded, MovieOpened};
use crate::integrations::ResourceFetcher;
use crate::repositories::CacheStore;
use crate::services::character_service::{
    CharacterResolution, CharacterService, SharedCharacter,
};
use crate::services::film_service;

/// Where the orchestrator currently is in the load pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    FilmsResolving,
    CharacterListResolving,
    PerCharacterResolving,
    Settled,
}

/// Result of selecting a character for detail resolution
#[derive(Debug)]
pub enum SelectionOutcome {
    /// The character was already fully resolved; nothing was fetched
    AlreadyComplete,
    /// A resolution for this character is still in flight; the selection
    /// is a no-op
    AlreadyResolving,
    /// A resolution ran; inspect the outcome for per-category failures
    Resolved(CharacterResolution),
}

/// Transient per-movie working state. Partially-resolved characters live
/// here and only here - the cache never sees an incomplete record.
struct MovieSession {
    aggregate: MovieAggregate,
    roster: Vec<SharedCharacter>,
    in_flight: HashSet<String>,
}

struct SessionState {
    phase: LoadPhase,
    films: Vec<FilmSummary>,
    active_episode: Option<u32>,
    movie: Option<MovieSession>,
}

pub struct AggregationService {
    fetcher: Arc<dyn ResourceFetcher>,
    cache: Arc<dyn CacheStore>,
    character_service: Arc<CharacterService>,
    event_bus: Arc<EventBus>,
    films_url: String,
    state: RwLock<SessionState>,
}

impl AggregationService {
    pub fn new(
        fetcher: Arc<dyn ResourceFetcher>,
        cache: Arc<dyn CacheStore>,
        character_service: Arc<CharacterService>,
        event_bus: Arc<EventBus>,
        films_url: String,
    ) -> Self {
        Self {
            fetcher,
            cache,
            character_service,
            event_bus,
            films_url,
            state: RwLock::new(SessionState {
                phase: LoadPhase::Idle,
                films: Vec::new(),
                active_episode: None,
                movie: None,
            }),
        }
    }

    // ========================================================================
    // FILMS INDEX
    // ========================================================================

    /// Load the films index, cache first
    pub async fn load_films(&self) -> AppResult<Vec<FilmSummary>> {
        self.set_phase(LoadPhase::FilmsResolving);

        match self.resolve_films_index().await {
            Ok(films) => Ok(films),
            Err(error) => {
                log::error!("films index load failed: {}", error);
                self.set_phase(LoadPhase::Idle);
                Err(error)
            }
        }
    }

    async fn resolve_films_index(&self) -> AppResult<Vec<FilmSummary>> {
        if let Some(films) = self.cache.read_films()? {
            self.state.write().unwrap().films = films.clone();
            self.event_bus.emit(FilmsIndexLoaded::new(films.len(), true));
            return Ok(films);
        }

        let page = self.fetcher.fetch_films(&self.films_url).await?;

        let mut films = page
            .results
            .iter()
            .map(film_service::build_summary)
            .collect::<AppResult<Vec<_>>>()?;
        film_service::sort_by_episode(&mut films);

        self.cache.write_films(&films)?;
        self.state.write().unwrap().films = films.clone();
        self.event_bus.emit(FilmsIndexLoaded::new(films.len(), false));

        Ok(films)
    }

    // ========================================================================
    // MOVIE NAVIGATION
    // ========================================================================

    /// Open a movie by id and resolve its character roster.
    /// Returns a snapshot of the roster (complete or not).
    pub async fn open_movie(&self, movie_id: u32) -> AppResult<Vec<CharacterRecord>> {
        let films = {
            let state = self.state.read().unwrap();
            state.films.clone()
        };
        let films = if films.is_empty() {
            self.load_films().await?
        } else {
            films
        };

        let film = match films.iter().find(|f| f.id == movie_id) {
            Some(film) => film.clone(),
            None => {
                log::error!("movie {} is not in the films index", movie_id);
                self.set_phase(LoadPhase::Idle);
                return Err(AppError::NotFound);
            }
        };

        self.state.write().unwrap().active_episode = Some(film.episode_id);
        self.set_phase(LoadPhase::CharacterListResolving);

        match self.resolve_character_list(&film).await {
            Ok(roster) => Ok(roster),
            Err(error) => {
                log::error!("movie {} load failed: {}", movie_id, error);
                self.set_phase(LoadPhase::Idle);
                Err(error)
            }
        }
    }

    async fn resolve_character_list(&self, film: &FilmSummary) -> AppResult<Vec<CharacterRecord>> {
        match self.cache.read_movie(film.id)? {
            // Finished dossier: rebuild the roster from cache, zero fetches
            Some(aggregate) if aggregate.has_resolved_dossier() => {
                let roster: Vec<SharedCharacter> = aggregate
                    .characters
                    .iter()
                    .cloned()
                    .map(|record| Arc::new(RwLock::new(record)))
                    .collect();

                self.event_bus
                    .emit(MovieOpened::new(film.id, aggregate.title.clone(), true));
                self.install_session(aggregate, roster);
                self.set_phase(LoadPhase::Settled);

                Ok(self.roster_snapshot())
            }

            // Known movie, dossier never resolved: reuse its reference queue
            Some(aggregate) => {
                self.event_bus
                    .emit(MovieOpened::new(film.id, aggregate.title.clone(), true));
                self.resolve_roster(aggregate).await
            }

            // First visit: fetch the movie resource and capture its references
            None => {
                let resource = self.fetcher.fetch_film(&film.url).await?;
                let aggregate = MovieAggregate::new(
                    film.id,
                    resource.title.clone(),
                    resource.url.clone(),
                    resource.characters.clone(),
                );
                self.cache.upsert_movie(&aggregate)?;

                self.event_bus
                    .emit(MovieOpened::new(film.id, aggregate.title.clone(), false));
                self.resolve_roster(aggregate).await
            }
        }
    }

    /// Consume the raw reference list, one character resource at a time.
    /// Strictly sequential: the next address is not fetched until the
    /// previous record has been built.
    async fn resolve_roster(&self, aggregate: MovieAggregate) -> AppResult<Vec<CharacterRecord>> {
        self.set_phase(LoadPhase::PerCharacterResolving);

        let mut roster: Vec<SharedCharacter> =
            Vec::with_capacity(aggregate.raw_character_refs.len());

        for reference in &aggregate.raw_character_refs {
            let person = self.fetcher.fetch_person(reference).await?;
            let record = CharacterRecord::new(
                person.url,
                person.name,
                person.height,
                person.homeworld,
                person.species,
                person.films,
                person.vehicles,
                person.starships,
            );
            roster.push(Arc::new(RwLock::new(record)));
        }

        self.event_bus
            .emit(CharacterRosterResolved::new(aggregate.id, roster.len()));

        self.cache.upsert_movie(&aggregate)?;
        self.install_session(aggregate, roster);
        self.set_phase(LoadPhase::Settled);

        Ok(self.roster_snapshot())
    }

    // ========================================================================
    // CHARACTER SELECTION
    // ========================================================================

    /// Select one character of the open movie for detail resolution.
    /// Triggers the completion tracker for exactly that character; sibling
    /// characters are untouched.
    pub async fn select_character(&self, url: &str) -> AppResult<SelectionOutcome> {
        let (movie_id, shared) = {
            let mut state = self.state.write().unwrap();
            let session = state.movie.as_mut().ok_or(AppError::NotFound)?;

            if session.in_flight.contains(url) {
                return Ok(SelectionOutcome::AlreadyResolving);
            }

            let shared = session
                .roster
                .iter()
                .find(|c| c.read().unwrap().url == url)
                .cloned()
                .ok_or(AppError::NotFound)?;

            session.aggregate.mark_selected(url);
            self.cache.upsert_movie(&session.aggregate)?;

            if shared.read().unwrap().is_complete() {
                return Ok(SelectionOutcome::AlreadyComplete);
            }

            session.in_flight.insert(url.to_string());
            (session.aggregate.id, shared)
        };

        let result = self.character_service.resolve_character(movie_id, &shared).await;

        {
            let mut state = self.state.write().unwrap();
            if let Some(session) = state.movie.as_mut() {
                session.in_flight.remove(url);

                // Pick up the persisted record so the working aggregate and
                // the cache stay in step
                if let Ok(resolution) = &result {
                    if resolution.persisted {
                        if let Some(aggregate) = self.cache.read_movie(movie_id)? {
                            session.aggregate = aggregate;
                        }
                    }
                }
            }
        }

        result.map(SelectionOutcome::Resolved)
    }

    // ========================================================================
    // LOCAL NAVIGATION
    // ========================================================================

    /// Step to the predecessor of the active film, wrapping at index 0
    pub fn previous_film(&self) -> AppResult<FilmSummary> {
        self.step_film(film_service::previous_film)
    }

    /// Step to the successor of the active film, wrapping at the end
    pub fn next_film(&self) -> AppResult<FilmSummary> {
        self.step_film(film_service::next_film)
    }

    fn step_film(
        &self,
        step: fn(&[FilmSummary], u32) -> Option<&FilmSummary>,
    ) -> AppResult<FilmSummary> {
        let mut state = self.state.write().unwrap();

        let active = state.active_episode.ok_or(AppError::NotFound)?;
        let film = step(&state.films, active).cloned().ok_or(AppError::NotFound)?;

        state.active_episode = Some(film.episode_id);
        Ok(film)
    }

    // ========================================================================
    // READ SNAPSHOTS (upward interface)
    // ========================================================================

    pub fn phase(&self) -> LoadPhase {
        self.state.read().unwrap().phase
    }

    pub fn films(&self) -> Vec<FilmSummary> {
        self.state.read().unwrap().films.clone()
    }

    pub fn active_film(&self) -> Option<FilmSummary> {
        let state = self.state.read().unwrap();
        let episode = state.active_episode?;
        state.films.iter().find(|f| f.episode_id == episode).cloned()
    }

    /// The open movie's aggregate in its persisted shape
    pub fn current_movie(&self) -> Option<MovieAggregate> {
        let state = self.state.read().unwrap();
        state.movie.as_ref().map(|m| m.aggregate.clone())
    }

    /// The open movie's roster with partial categories visible as they
    /// resolve
    pub fn roster_snapshot(&self) -> Vec<CharacterRecord> {
        let state = self.state.read().unwrap();
        match &state.movie {
            Some(session) => session
                .roster
                .iter()
                .map(|c| c.read().unwrap().clone())
                .collect(),
            None => Vec::new(),
        }
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    fn install_session(&self, aggregate: MovieAggregate, roster: Vec<SharedCharacter>) {
        let mut state = self.state.write().unwrap();
        state.movie = Some(MovieSession {
            aggregate,
            roster,
            in_flight: HashSet::new(),
        });
    }

    fn set_phase(&self, phase: LoadPhase) {
        let mut state = self.state.write().unwrap();
        if state.phase != phase {
            log::debug!("load phase {:?} -> {:?}", state.phase, phase);
            state.phase = phase;
        }
    }
}
