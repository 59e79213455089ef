// src/domain/reference.rs
//
// Resource references
//
// Every entity the origin API serves lives behind an absolute address whose
// trailing path segment is the entity's numeric id (the API terminates its
// addresses with a slash, so the id is the last non-empty segment).

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::{DomainError, DomainResult};

static RESOURCE_URL: OnceLock<Regex> = OnceLock::new();

fn resource_url_pattern() -> &'static Regex {
    RESOURCE_URL.get_or_init(|| {
        Regex::new(r"^https?://\S+/(\d+)/?$").expect("resource url pattern is valid")
    })
}

/// Whether the given address has the shape of a single-entity resource.
pub fn is_resource_url(url: &str) -> bool {
    resource_url_pattern().is_match(url)
}

/// Extract the numeric id carried by a resource address.
pub fn resource_id(url: &str) -> DomainResult<u32> {
    let captures = resource_url_pattern()
        .captures(url)
        .ok_or_else(|| DomainError::MalformedReference(url.to_string()))?;

    captures[1]
        .parse::<u32>()
        .map_err(|_| DomainError::MalformedReference(url.to_string()))
}
