// src/services/aggregation_service_tests.rs
//
// ORCHESTRATOR SCENARIO TESTS
//
// PURPOSE:
// - Prove the cache-first short-circuits: a revisit of a resolved dossier
//   performs zero network fetches
// - Prove the first-visit pipeline: films index → movie resource →
//   sequential roster resolution → Settled + write-back
// - Prove navigation wraps at both boundaries of the films index
//
// INVARIANTS TESTED:
// - A persisted aggregate never contains an incomplete character
// - Failures in the films-list or movie-resource fetch return the state
//   machine to Idle

#[cfg(test)]
mod orchestrator_tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use crate::db::{create_memory_pool, get_connection, initialize_database};
    use crate::domain::{Category, CharacterRecord, FilmSummary, MovieAggregate};
    use crate::error::AppError;
    use crate::events::create_event_bus;
    use crate::integrations::swapi::client::MockResourceFetcher;
    use crate::integrations::{FilmResource, FilmsPage, PersonResource};
    use crate::repositories::{CacheStore, SqliteCacheStore};
    use crate::services::aggregation_service::{AggregationService, LoadPhase, SelectionOutcome};
    use crate::services::character_service::CharacterService;
    use crate::services::reference_resolution_service::ReferenceResolutionService;

    const FILMS_URL: &str = "https://swapi.dev/api/films/";

    fn empty_cache() -> Arc<SqliteCacheStore> {
        let pool = Arc::new(create_memory_pool().unwrap());
        let conn = get_connection(&pool).unwrap();
        initialize_database(&conn).unwrap();
        drop(conn);
        Arc::new(SqliteCacheStore::new(pool))
    }

    fn service(fetcher: MockResourceFetcher, cache: Arc<SqliteCacheStore>) -> AggregationService {
        let fetcher: Arc<dyn crate::integrations::ResourceFetcher> = Arc::new(fetcher);
        let event_bus = create_event_bus();
        let resolver = Arc::new(ReferenceResolutionService::new(fetcher.clone()));
        let character_service = Arc::new(CharacterService::new(
            resolver,
            cache.clone(),
            event_bus.clone(),
        ));
        AggregationService::new(
            fetcher,
            cache,
            character_service,
            event_bus,
            FILMS_URL.to_string(),
        )
    }

    fn film_resource(id: u32, episode_id: u32, title: &str, characters: &[&str]) -> FilmResource {
        FilmResource {
            title: title.to_string(),
            episode_id,
            release_date: "1977-05-25".to_string(),
            characters: characters.iter().map(|c| c.to_string()).collect(),
            url: format!("https://swapi.dev/api/films/{}/", id),
        }
    }

    fn person_resource(id: u32, name: &str) -> PersonResource {
        PersonResource {
            name: name.to_string(),
            height: "180".to_string(),
            homeworld: Some("https://swapi.dev/api/planets/1/".to_string()),
            films: vec!["https://swapi.dev/api/films/1/".to_string()],
            species: Vec::new(),
            vehicles: Vec::new(),
            starships: Vec::new(),
            url: format!("https://swapi.dev/api/people/{}/", id),
        }
    }

    fn film_summary(id: u32, episode_id: u32) -> FilmSummary {
        FilmSummary::new(
            id,
            format!("Episode {}", episode_id),
            format!("https://swapi.dev/api/films/{}/", id),
            episode_id,
            "IV".to_string(),
            1977,
        )
    }

    fn complete_character(url: &str) -> CharacterRecord {
        let mut record = CharacterRecord::new(
            url.to_string(),
            "Cached Character".to_string(),
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

    #[tokio::test]
    async fn test_first_visit_resolves_roster_sequentially() {
        let people = ["https://swapi.dev/api/people/1/", "https://swapi.dev/api/people/2/"];

        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch_films()
            .with(eq(FILMS_URL))
            .times(1)
            .returning(move |_| {
                Ok(FilmsPage {
                    count: 1,
                    next: None,
                    previous: None,
                    results: vec![film_resource(
                        1,
                        4,
                        "A New Hope",
                        &["https://swapi.dev/api/people/1/", "https://swapi.dev/api/people/2/"],
                    )],
                })
            });
        fetcher
            .expect_fetch_film()
            .with(eq("https://swapi.dev/api/films/1/"))
            .times(1)
            .returning(|_| {
                Ok(film_resource(
                    1,
                    4,
                    "A New Hope",
                    &["https://swapi.dev/api/people/1/", "https://swapi.dev/api/people/2/"],
                ))
            });
        fetcher
            .expect_fetch_person()
            .with(eq(people[0]))
            .times(1)
            .returning(|_| Ok(person_resource(1, "Luke Skywalker")));
        fetcher
            .expect_fetch_person()
            .with(eq(people[1]))
            .times(1)
            .returning(|_| Ok(person_resource(2, "C-3PO")));

        let cache = empty_cache();
        let service = service(fetcher, cache.clone());

        let roster = service.open_movie(1).await.unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Luke Skywalker");
        assert_eq!(roster[1].name, "C-3PO");
        assert!(roster.iter().all(|c| !c.is_complete()));
        assert_eq!(service.phase(), LoadPhase::Settled);

        // Write-back: raw references captured, no incomplete character stored
        let aggregate = cache.read_movie(1).unwrap().unwrap();
        assert_eq!(aggregate.raw_character_refs.len(), 2);
        assert!(aggregate.characters.is_empty());

        // Films index cached for the next navigation
        assert!(cache.read_films().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_revisit_of_resolved_dossier_fetches_nothing() {
        // Zero expectations: any network call panics the mock
        let fetcher = MockResourceFetcher::new();

        let cache = empty_cache();
        cache.write_films(&[film_summary(1, 4)]).unwrap();

        let mut aggregate = MovieAggregate::new(
            1,
            "A New Hope".to_string(),
            "https://swapi.dev/api/films/1/".to_string(),
            vec!["https://swapi.dev/api/people/1/".to_string()],
        );
        aggregate.upsert_character(complete_character("https://swapi.dev/api/people/1/"));
        cache.upsert_movie(&aggregate).unwrap();

        let service = service(fetcher, cache);

        let roster = service.open_movie(1).await.unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Cached Character");
        assert!(roster[0].is_complete());
        assert_eq!(service.phase(), LoadPhase::Settled);
    }

    #[tokio::test]
    async fn test_selection_resolves_and_persists_one_character() {
        let mut fetcher = MockResourceFetcher::new();
        fetcher.expect_fetch_film().times(1).returning(|_| {
            Ok(film_resource(
                1,
                4,
                "A New Hope",
                &["https://swapi.dev/api/people/1/"],
            ))
        });
        fetcher
            .expect_fetch_person()
            .times(1)
            .returning(|_| Ok(person_resource(1, "Luke Skywalker")));
        // Category chains: homeworld + one film reference
        fetcher
            .expect_fetch_named()
            .with(eq("https://swapi.dev/api/planets/1/"))
            .times(1)
            .returning(|_| {
                Ok(crate::integrations::NamedResource {
                    name: "Tatooine".to_string(),
                })
            });
        fetcher
            .expect_fetch_film()
            .with(eq("https://swapi.dev/api/films/1/"))
            .times(1)
            .returning(|_| Ok(film_resource(1, 4, "A New Hope", &[])));

        let cache = empty_cache();
        cache.write_films(&[film_summary(1, 4)]).unwrap();

        let service = service(fetcher, cache.clone());
        service.open_movie(1).await.unwrap();

        let outcome = service
            .select_character("https://swapi.dev/api/people/1/")
            .await
            .unwrap();

        let resolution = match outcome {
            SelectionOutcome::Resolved(resolution) => resolution,
            other => panic!("expected a resolution, got {:?}", other),
        };
        assert!(resolution.completed);
        assert!(resolution.persisted);

        // The dossier reached the cache, selection order included
        let aggregate = cache.read_movie(1).unwrap().unwrap();
        assert_eq!(aggregate.characters.len(), 1);
        assert!(aggregate.characters[0].is_complete());
        assert_eq!(
            aggregate.selected_characters,
            vec!["https://swapi.dev/api/people/1/".to_string()]
        );

        // Re-selection is a no-op (all expectations above are times(1))
        let again = service
            .select_character("https://swapi.dev/api/people/1/")
            .await
            .unwrap();
        assert!(matches!(again, SelectionOutcome::AlreadyComplete));
    }

    #[tokio::test]
    async fn test_navigation_wraps_at_both_boundaries() {
        let fetcher = MockResourceFetcher::new();

        let cache = empty_cache();
        let films: Vec<FilmSummary> = (1..=5).map(|i| film_summary(i, i)).collect();
        cache.write_films(&films).unwrap();

        let mut aggregate = MovieAggregate::new(
            1,
            "Episode 1".to_string(),
            "https://swapi.dev/api/films/1/".to_string(),
            Vec::new(),
        );
        aggregate.upsert_character(complete_character("https://swapi.dev/api/people/1/"));
        cache.upsert_movie(&aggregate).unwrap();

        let service = service(fetcher, cache);
        service.open_movie(1).await.unwrap();

        // Predecessor of the first film is the last one
        let previous = service.previous_film().unwrap();
        assert_eq!(previous.episode_id, 5);

        // Successor of the last film is the first one
        let next = service.next_film().unwrap();
        assert_eq!(next.episode_id, 1);
    }

    #[tokio::test]
    async fn test_films_list_failure_returns_to_idle() {
        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch_films()
            .times(1)
            .returning(|_| Err(AppError::Transport("status 502".to_string())));

        let service = service(fetcher, empty_cache());

        let result = service.load_films().await;

        assert!(matches!(result, Err(AppError::Transport(_))));
        assert_eq!(service.phase(), LoadPhase::Idle);
    }

    #[tokio::test]
    async fn test_movie_resource_failure_returns_to_idle() {
        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch_film()
            .times(1)
            .returning(|_| Err(AppError::Transport("status 500".to_string())));

        let cache = empty_cache();
        cache.write_films(&[film_summary(1, 4)]).unwrap();

        let service = service(fetcher, cache.clone());

        let result = service.open_movie(1).await;

        assert!(matches!(result, Err(AppError::Transport(_))));
        assert_eq!(service.phase(), LoadPhase::Idle);
        // The dossier never materialized
        assert!(cache.read_movie(1).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_movie_id_is_not_found() {
        let fetcher = MockResourceFetcher::new();
        let cache = empty_cache();
        cache.write_films(&[film_summary(1, 4)]).unwrap();

        let service = service(fetcher, cache);

        assert!(matches!(
            service.open_movie(99).await,
            Err(AppError::NotFound)
        ));
        assert_eq!(service.phase(), LoadPhase::Idle);
    }
}
