//! Resource filters
//!
//! Each resource kind has its own filter vocabulary but all three share
//! the same paging behavior and the same bidirectional query conversion:
//! [`Filter::to_query_params`] serializes a filter for a GET request, and
//! [`Filter::from_query`] is its left inverse, rebuilding a filter from a
//! URL the api returned in its `Link` header.

mod book;
mod character;
mod house;
mod page;

pub use book::BookFilter;
pub use character::CharacterFilter;
pub use house::HouseFilter;
pub use page::PageSelector;

use crate::error::Result;
use crate::pagination::QueryMap;

/// Bidirectional conversion between a filter and its query parameters
pub trait Filter: Sized + Default {
    /// Serialize the filter into ordered query parameters
    ///
    /// Unset optional fields never appear in the output. Booleans render
    /// as `true`/`false`, dates as RFC3339 strings.
    fn to_query_params(&self) -> Vec<(String, String)>;

    /// Rebuild a filter of this kind from a URL's query parameters
    ///
    /// Unknown keys are ignored; malformed values for known keys are
    /// reported as errors.
    fn from_query(query: &QueryMap) -> Result<Self>;
}
