//! Book filter

use super::page::PageSelector;
use super::Filter;
use crate::error::Result;
use crate::pagination::QueryMap;
use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Filter for book listings
///
/// Each setter consumes the filter and returns a copy with one field
/// populated; unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    paging: PageSelector,
    name: Option<String>,
    from_release_date: Option<DateTime<FixedOffset>>,
    to_release_date: Option<DateTime<FixedOffset>>,
}

impl BookFilter {
    /// Create a filter with default paging and no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of books per result set
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

    /// Only return books with the given name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Only return books released after the given date
    #[must_use]
    pub fn from_release_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.from_release_date = Some(date);
        self
    }

    /// Only return books released before the given date
    #[must_use]
    pub fn to_release_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.to_release_date = Some(date);
        self
    }
}

impl Filter for BookFilter {
    fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.paging.encode(&mut params);

        if let Some(name) = &self.name {
            params.push(("name".to_string(), name.clone()));
        }
        if let Some(date) = &self.from_release_date {
            params.push((
                "fromReleaseDate".to_string(),
                date.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(date) = &self.to_release_date {
            params.push((
                "toReleaseDate".to_string(),
                date.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        params
    }

    fn from_query(query: &QueryMap) -> Result<Self> {
        Ok(Self {
            paging: PageSelector::from_query(query)?,
            name: query.string("name"),
            from_release_date: query.datetime("fromReleaseDate")?,
            to_release_date: query.datetime("toReleaseDate")?,
        })
    }
}
