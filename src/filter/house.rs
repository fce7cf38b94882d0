//! House filter

use super::page::PageSelector;
use super::Filter;
use crate::error::Result;
use crate::pagination::QueryMap;

/// Filter for house listings
///
/// Each setter consumes the filter and returns a copy with one field
/// populated; unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseFilter {
    paging: PageSelector,
    name: Option<String>,
    region: Option<String>,
    words: Option<String>,
    has_words: Option<bool>,
    has_titles: Option<bool>,
    has_seats: Option<bool>,
    has_died_out: Option<bool>,
    has_ancestral_weapons: Option<bool>,
}

impl HouseFilter {
    /// Create a filter with default paging and no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of houses per result set
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.paging = self.paging.limit(limit);
        self
    }

    /// Request a specific page of the result set
    #[must_use]
    pub fn page(mut self, page: u64) -> Self {
        self.paging = self.paging.page(page);
        self
    }

    /// Only return houses with the given name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Only return houses from the given region
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Only return houses with the given words
    #[must_use]
    pub fn words(mut self, words: impl Into<String>) -> Self {
        self.words = Some(words.into());
        self
    }

    /// Only return houses that have words
    #[must_use]
    pub fn has_words(mut self, value: bool) -> Self {
        self.has_words = Some(value);
        self
    }

    /// Only return houses that hold titles
    #[must_use]
    pub fn has_titles(mut self, value: bool) -> Self {
        self.has_titles = Some(value);
        self
    }

    /// Only return houses that hold seats
    #[must_use]
    pub fn has_seats(mut self, value: bool) -> Self {
        self.has_seats = Some(value);
        self
    }

    /// Only return houses that have died out
    #[must_use]
    pub fn has_died_out(mut self, value: bool) -> Self {
        self.has_died_out = Some(value);
        self
    }

    /// Only return houses that own ancestral weapons
    #[must_use]
    pub fn has_ancestral_weapons(mut self, value: bool) -> Self {
        self.has_ancestral_weapons = Some(value);
        self
    }
}

impl Filter for HouseFilter {
    fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.paging.encode(&mut params);

        if let Some(name) = &self.name {
            params.push(("name".to_string(), name.clone()));
        }
        if let Some(region) = &self.region {
            params.push(("region".to_string(), region.clone()));
        }
        if let Some(words) = &self.words {
            params.push(("words".to_string(), words.clone()));
        }
        if let Some(value) = self.has_words {
            params.push(("hasWords".to_string(), value.to_string()));
        }
        if let Some(value) = self.has_titles {
            params.push(("hasTitles".to_string(), value.to_string()));
        }
        if let Some(value) = self.has_seats {
            params.push(("hasSeats".to_string(), value.to_string()));
        }
        if let Some(value) = self.has_died_out {
            params.push(("hasDiedOut".to_string(), value.to_string()));
        }
        if let Some(value) = self.has_ancestral_weapons {
            params.push(("hasAncestralWeapons".to_string(), value.to_string()));
        }

        params
    }

    fn from_query(query: &QueryMap) -> Result<Self> {
        Ok(Self {
            paging: PageSelector::from_query(query)?,
            name: query.string("name"),
            region: query.string("region"),
            words: query.string("words"),
            has_words: query.boolean("hasWords")?,
            has_titles: query.boolean("hasTitles")?,
            has_seats: query.boolean("hasSeats")?,
            has_died_out: query.boolean("hasDiedOut")?,
            has_ancestral_weapons: query.boolean("hasAncestralWeapons")?,
        })
    }
}
