//! Character filter

use super::page::PageSelector;
use super::Filter;
use crate::error::Result;
use crate::pagination::QueryMap;

/// Filter for character listings
///
/// Each setter consumes the filter and returns a copy with one field
/// populated; unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    paging: PageSelector,
    name: Option<String>,
    gender: Option<String>,
    culture: Option<String>,
    born: Option<String>,
    died: Option<String>,
    is_alive: Option<bool>,
}

impl CharacterFilter {
    /// Create a filter with default paging and no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of characters per result set
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

    /// Only return characters with the given name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Only return characters of the given gender
    /// (`Female`, `Male` or `Unknown`)
    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Only return characters of the given culture
    #[must_use]
    pub fn culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Only return characters born in the given year
    #[must_use]
    pub fn born(mut self, born: impl Into<String>) -> Self {
        self.born = Some(born.into());
        self
    }

    /// Only return characters that died in the given year
    #[must_use]
    pub fn died(mut self, died: impl Into<String>) -> Self {
        self.died = Some(died.into());
        self
    }

    /// Only return characters that are alive (or dead)
    #[must_use]
    pub fn is_alive(mut self, alive: bool) -> Self {
        self.is_alive = Some(alive);
        self
    }
}

impl Filter for CharacterFilter {
    fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.paging.encode(&mut params);

        if let Some(name) = &self.name {
            params.push(("name".to_string(), name.clone()));
        }
        if let Some(gender) = &self.gender {
            params.push(("gender".to_string(), gender.clone()));
        }
        if let Some(culture) = &self.culture {
            params.push(("culture".to_string(), culture.clone()));
        }
        if let Some(born) = &self.born {
            params.push(("born".to_string(), born.clone()));
        }
        if let Some(died) = &self.died {
            params.push(("died".to_string(), died.clone()));
        }
        if let Some(alive) = self.is_alive {
            params.push(("isAlive".to_string(), alive.to_string()));
        }

        params
    }

    fn from_query(query: &QueryMap) -> Result<Self> {
        Ok(Self {
            paging: PageSelector::from_query(query)?,
            name: query.string("name"),
            gender: query.string("gender"),
            culture: query.string("culture"),
            born: query.string("born"),
            died: query.string("died"),
            is_alive: query.boolean("isAlive")?,
        })
    }
}
