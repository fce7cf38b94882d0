//! Link header parsing (RFC 5988)
//!
//! The api advertises adjacent result sets through the `Link` response
//! header, e.g.:
//!
//! ```text
//! Link: <https://anapioficeandfire.com/api/books?page=2&pageSize=10>; rel="next",
//!       <https://anapioficeandfire.com/api/books?page=1&pageSize=10>; rel="first"
//! ```
//!
//! `parse_link_header` turns that value into a [`LinkMap`]. Malformed
//! segments produce a structured [`Error::LinkHeaderParse`] instead of
//! panicking on out-of-bounds slices.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// A pagination relation advertised in the `Link` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The next result set
    Next,
    /// The previous result set
    Prev,
    /// The first result set
    First,
    /// The last result set
    Last,
}

impl Relation {
    /// The wire name of this relation as it appears in `rel="..."`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::First => "first",
            Self::Last => "last",
        }
    }

    /// Parse a wire rel name; unknown rels return `None`
    pub fn from_rel(rel: &str) -> Option<Self> {
        match rel {
            "next" => Some(Self::Next),
            "prev" => Some(Self::Prev),
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            _ => None,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relation → absolute URL mapping for one response
///
/// Built fresh per response and never merged across responses. A missing
/// relation means the corresponding result set does not exist (the first
/// page has no `prev`, the last page has no `next`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    links: HashMap<Relation, String>,
}

impl LinkMap {
    /// Create an empty link map
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the URL for a relation, if the api advertised one
    pub fn get(&self, relation: Relation) -> Option<&str> {
        self.links.get(&relation).map(String::as_str)
    }

    /// Check whether a relation is present
    pub fn contains(&self, relation: Relation) -> bool {
        self.links.contains_key(&relation)
    }

    /// Insert a relation → URL entry
    pub fn insert(&mut self, relation: Relation, url: impl Into<String>) {
        self.links.insert(relation, url.into());
    }

    /// Number of advertised relations
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check whether no relations were advertised
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Parse a raw `Link` header value into a [`LinkMap`]
///
/// An empty value yields an empty map. Each comma-separated segment must
/// have the shape `<url>; rel="name"`; additional `;`-separated parameters
/// after the rel token are tolerated, and unknown rel names are skipped for
/// forward compatibility.
pub fn parse_link_header(header: &str) -> Result<LinkMap> {
    let mut links = LinkMap::new();
    if header.trim().is_empty() {
        return Ok(links);
    }

    for segment in header.split(',') {
        let segment = segment.trim();
        let mut parts = segment.split(';');

        let url_token = parts
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::link_header(segment, "empty segment"))?;
        let rel_token = parts
            .next()
            .map(str::trim)
            .ok_or_else(|| Error::link_header(segment, "missing ';' separator"))?;

        let url = url_token
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .ok_or_else(|| Error::link_header(segment, "url not enclosed in angle brackets"))?;

        let rel_value = rel_token
            .strip_prefix("rel=")
            .ok_or_else(|| Error::link_header(segment, "missing rel= parameter"))?;
        let rel = rel_value
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .ok_or_else(|| Error::link_header(segment, "rel value not quoted"))?;

        if let Some(relation) = Relation::from_rel(rel) {
            links.insert(relation, url);
        }
    }

    Ok(links)
}
