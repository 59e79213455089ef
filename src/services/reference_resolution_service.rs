// src/services/reference_resolution_service.rs
//
// Reference Queue Resolver
//
// Walks one category's reference list for one character, strictly
// sequentially: the next address is not fetched until the previous one has
// resolved, so a category never has more than one request in flight. The
// list itself is immutable; a cursor replaces the destructively-shrunk
// queue so the original reference order survives a failure.
//
// CRITICAL RULES:
// - An empty reference list resolves to the placeholder with zero fetches
// - The first fetch failure aborts the category permanently (no retry)
// - Film descriptions are sorted lexicographically once the list is consumed
// - Sibling categories and sibling characters are never affected

use std::sync::Arc;

use crate::domain::{Category, NOT_APPLICABLE};
use crate::error::AppResult;
use crate::integrations::ResourceFetcher;
use crate::services::film_service;

pub struct ReferenceResolutionService {
    fetcher: Arc<dyn ResourceFetcher>,
}

impl ReferenceResolutionService {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolve every reference of one category into its display values.
    ///
    /// Homeworld arrives as a zero-or-one element slice; species, vehicles
    /// and starships resolve to the resource's name; films resolve to the
    /// formatted dossier description.
    pub async fn resolve_category(
        &self,
        category: Category,
        refs: &[String],
    ) -> AppResult<Vec<String>> {
        if refs.is_empty() {
            // Nothing to fetch: the category is answered by the placeholder
            return Ok(vec![NOT_APPLICABLE.to_string()]);
        }

        let mut resolved = Vec::with_capacity(refs.len());

        for reference in refs {
            let value = match category {
                Category::Films => {
                    let film = self.fetcher.fetch_film(reference).await?;
                    film_service::film_description(&film)?
                }
                _ => self.fetcher.fetch_named(reference).await?.name,
            };
            resolved.push(value);
        }

        if category == Category::Films {
            // Lexicographic, not episode order
            resolved.sort();
        }

        Ok(resolved)
    }
}
