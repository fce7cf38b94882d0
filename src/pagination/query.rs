//! Query reconstruction
//!
//! The inverse of filter serialization: given the query string of a URL the
//! api returned in its `Link` header, re-derive the paging fields and typed
//! filter values so the caller gets back a ready-to-use filter.

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use url::Url;

/// Wire key carrying the requested result-set size.
///
/// Historical naming quirk in the upstream protocol: the client-facing
/// `limit` travels under `page`, and an explicit page override travels
/// under `pageSize`. Both directions of the conversion honor this.
pub const PAGE_KEY: &str = "page";
/// Wire key carrying the explicit page override. See [`PAGE_KEY`].
pub const PAGE_SIZE_KEY: &str = "pageSize";

/// Query parameters extracted from a URL, with typed accessors
///
/// Unknown keys are carried but ignored, so new upstream parameters never
/// break reconstruction.
#[derive(Debug, Clone, Default)]
pub struct QueryMap {
    params: HashMap<String, String>,
}

impl QueryMap {
    /// Parse the query string of an absolute URL
    pub fn from_url(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)?;
        Ok(Self {
            params: url.query_pairs().into_owned().collect(),
        })
    }

    /// Build from already-serialized key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Owned string value for a key
    pub fn string(&self, key: &str) -> Option<String> {
        self.params.get(key).cloned()
    }

    /// Strict boolean value for a key
    ///
    /// Anything other than the literals `true`/`false` is an error.
    pub fn boolean(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => Err(Error::malformed_boolean(key, other)),
        }
    }

    /// RFC3339 date-time value for a key
    pub fn datetime(&self, key: &str) -> Result<Option<DateTime<FixedOffset>>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => DateTime::parse_from_rfc3339(value)
                .map(Some)
                .map_err(|_| Error::malformed_date(key, value)),
        }
    }

    /// Extract the mandatory paging parameters as `(page, page_size)`
    ///
    /// Both `page` and `pageSize` must be present and parse as non-negative
    /// integers; every URL the api returns carries them.
    pub fn page_info(&self) -> Result<(u64, u64)> {
        let page = self.get(PAGE_KEY).ok_or(Error::PaginationInfoMissing)?;
        let page_size = self
            .get(PAGE_SIZE_KEY)
            .ok_or(Error::PaginationInfoMissing)?;

        let page = page
            .parse::<u64>()
            .map_err(|_| Error::malformed_page_number(page))?;
        let page_size = page_size
            .parse::<u64>()
            .map_err(|_| Error::malformed_page_number(page_size))?;

        Ok((page, page_size))
    }
}
