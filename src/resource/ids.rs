//! Hypermedia URL → numeric id extraction
//!
//! Related resources are referenced by absolute URLs like
//! `https://anapioficeandfire.com/api/characters/583`. Callers almost
//! always want the trailing numeric id, so the deserializers here decode
//! those fields straight to ids. An empty string (the api's "no relation")
//! becomes `None`; URLs without a numeric tail are skipped.

use serde::{Deserialize, Deserializer};

/// Extract the trailing numeric id from a resource URL
pub(crate) fn id_from_url(url: &str) -> Option<u64> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

/// Deserialize a single resource URL into an optional id
pub(crate) fn resource_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let url = String::deserialize(deserializer)?;
    Ok(id_from_url(&url))
}

/// Deserialize an array of resource URLs into ids
pub(crate) fn resource_ids<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let urls = Vec::<String>::deserialize(deserializer)?;
    Ok(urls.iter().filter_map(|url| id_from_url(url)).collect())
}
