// src/integrations/swapi/client.rs
//
// Film archive API client
//
// ARCHITECTURE:
// - Thin GET wrapper over the origin API
// - Typed decode at the boundary: transport and shape errors are separated
// - No retry, no caching of its own, no timeout beyond the client timeout
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never creates or modifies domain entities directly
// - Returns resource bodies that services map

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::integrations::swapi::resources::{FilmResource, FilmsPage, NamedResource, PersonResource};

/// Default origin API root
pub const DEFAULT_API_URL: &str = "https://swapi.dev/api/";

/// Asynchronous "fetch resource by address" capability.
///
/// One method per resource shape so the decode step is typed; homeworld,
/// species, vehicle and starship bodies share the named-resource shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch_films(&self, url: &str) -> AppResult<FilmsPage>;
    async fn fetch_film(&self, url: &str) -> AppResult<FilmResource>;
    async fn fetch_person(&self, url: &str) -> AppResult<PersonResource>;
    async fn fetch_named(&self, url: &str) -> AppResult<NamedResource>;
}

/// Film archive API client
pub struct SwapiClient {
    base_url: String,
    http_client: Client,
}

impl SwapiClient {
    /// Create a new client against the given API root
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    /// Address of the films collection endpoint
    pub fn films_url(&self) -> String {
        format!("{}films/", self.base_url)
    }

    // ========================================================================
    // INTERNAL: GET + typed decode
    // ========================================================================

    async fn get_resource<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Transport(format!(
                "GET {} returned status {}",
                url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("GET {} body read failed: {}", url, e)))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("Unexpected shape from {}: {}", url, e)))
    }
}

#[async_trait]
impl ResourceFetcher for SwapiClient {
    async fn fetch_films(&self, url: &str) -> AppResult<FilmsPage> {
        self.get_resource(url).await
    }

    async fn fetch_film(&self, url: &str) -> AppResult<FilmResource> {
        self.get_resource(url).await
    }

    async fn fetch_person(&self, url: &str) -> AppResult<PersonResource> {
        self.get_resource(url).await
    }

    async fn fetch_named(&self, url: &str) -> AppResult<NamedResource> {
        self.get_resource(url).await
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_secs(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SwapiClient::default();
        assert_eq!(client.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_films_url() {
        let client = SwapiClient::new("https://example.test/api/", Duration::from_secs(5));
        assert_eq!(client.films_url(), "https://example.test/api/films/");
    }

    // Real API coverage lives in the service tests against a mocked fetcher;
    // this client is exercised end-to-end by the demo binary.
}
