// src/main.rs
//
// Demo binary: assemble the full character dossier for one movie id and
// print it. Repeat runs against the same id are served from the cache.

use std::sync::Arc;

use anyhow::Context;

use holocron::application::dto::CharacterDto;
use holocron::application::state::AppState;
use holocron::config::EngineConfig;
use holocron::db::{create_connection_pool, default_database_path, initialize_database};
use holocron::events::create_event_bus;
use holocron::integrations::{ResourceFetcher, SwapiClient};
use holocron::repositories::{CacheStore, SqliteCacheStore};
use holocron::services::{
    AggregationService, CharacterService, ReferenceResolutionService, SelectionOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let movie_id: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()
        .context("movie id must be numeric")?
        .unwrap_or(1);

    let config = EngineConfig::from_env();

    // 1. INFRASTRUCTURE
    let event_bus = create_event_bus();

    let db_path = match &config.database_path {
        Some(path) => path.clone(),
        None => default_database_path()?,
    };
    let pool = Arc::new(create_connection_pool(&db_path)?);
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }

    // 2. REPOSITORIES & INTEGRATIONS
    let cache: Arc<dyn CacheStore> = Arc::new(SqliteCacheStore::new(pool.clone()));

    let client = SwapiClient::new(config.api_base_url.clone(), config.http_timeout);
    let films_url = client.films_url();
    let fetcher: Arc<dyn ResourceFetcher> = Arc::new(client);

    // 3. SERVICES
    let resolver = Arc::new(ReferenceResolutionService::new(fetcher.clone()));
    let character_service = Arc::new(CharacterService::new(
        resolver,
        cache.clone(),
        event_bus.clone(),
    ));
    let aggregation_service = Arc::new(AggregationService::new(
        fetcher,
        cache,
        character_service.clone(),
        event_bus.clone(),
        films_url,
    ));

    let state = AppState {
        event_bus,
        aggregation_service,
        character_service,
    };

    // 4. ASSEMBLE THE DOSSIER
    let films = state.aggregation_service.load_films().await?;
    println!("Films index:");
    for film in &films {
        println!("  [{}] ({}) {}", film.id, film.release_year, film);
    }

    let roster = state.aggregation_service.open_movie(movie_id).await?;
    println!("\nMovie {}: {} characters", movie_id, roster.len());

    for character in &roster {
        match state.aggregation_service.select_character(&character.url).await {
            Ok(SelectionOutcome::Resolved(resolution)) if !resolution.completed => {
                eprintln!(
                    "warning: {} left incomplete ({} failed categories)",
                    character.name,
                    resolution.failed_categories.len()
                );
            }
            Ok(_) => {}
            Err(error) => {
                eprintln!("error resolving {}: {}", character.name, error);
            }
        }
    }

    for dto in state
        .aggregation_service
        .roster_snapshot()
        .into_iter()
        .map(CharacterDto::from)
    {
        println!("\n{}", dto.name);
        if let Some(height) = dto.height_m {
            println!("  height:    {:.2} m", height);
        }
        println!("  homeworld: {}", dto.homeworld.as_deref().unwrap_or("?"));
        println!("  species:   {}", dto.species.join(", "));
        println!("  films:     {}", dto.films.join("; "));
        println!("  vehicles:  {}", dto.vehicles.join(", "));
        println!("  starships: {}", dto.starships.join(", "));
        if !dto.complete {
            println!("  (dossier incomplete)");
        }
    }

    Ok(())
}
