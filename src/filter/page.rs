//! Shared paging fields
//!
//! Every resource filter embeds a [`PageSelector`]. The upstream protocol
//! has an inverted naming scheme on the wire: the requested result-set
//! size (`limit`) is sent under the key `page`, and an explicit page
//! override is sent under `pageSize`. Serialization and reconstruction
//! both follow that scheme so links returned by the api round-trip.

use crate::error::Result;
use crate::pagination::{QueryMap, PAGE_KEY, PAGE_SIZE_KEY};

/// Paging controls shared by all resource filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelector {
    limit: u64,
    page: Option<u64>,
}

impl Default for PageSelector {
    fn default() -> Self {
        Self {
            limit: 10,
            page: None,
        }
    }
}

impl PageSelector {
    /// Create a selector with the default limit of 10 and no page override
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with the result-set size set
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Return a copy with an explicit page override set
    #[must_use]
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// The requested result-set size
    pub fn limit_value(&self) -> u64 {
        self.limit
    }

    /// The explicit page override, if one was set
    pub fn page_value(&self) -> Option<u64> {
        self.page
    }

    /// Append the paging parameters under their wire keys
    pub(crate) fn encode(&self, params: &mut Vec<(String, String)>) {
        params.push((PAGE_KEY.to_string(), self.limit.to_string()));
        if let Some(page) = self.page {
            params.push((PAGE_SIZE_KEY.to_string(), page.to_string()));
        }
    }

    /// Rebuild the selector from a URL's query parameters
    ///
    /// URLs returned by the api always carry both wire keys, so both are
    /// required here.
    pub(crate) fn from_query(query: &QueryMap) -> Result<Self> {
        let (limit, page) = query.page_info()?;
        Ok(Self {
            limit,
            page: Some(page),
        })
    }
}
