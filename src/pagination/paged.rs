//! Paged responses and navigation
//!
//! A [`Paged`] value wraps one page of decoded records together with the
//! link map extracted from the response headers. The four navigation
//! methods translate an advertised URL back into a filter for the same
//! resource kind; they perform no network I/O, the caller issues the
//! actual fetch.

use super::links::{LinkMap, Relation};
use super::query::QueryMap;
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::resource::Resource;

/// One page of results plus navigation metadata
///
/// Immutable after construction. The link map is private to the pagination
/// mechanism; callers navigate through [`next`](Self::next) and friends.
#[derive(Debug, Clone)]
pub struct Paged<T: Resource> {
    data: Vec<T>,
    links: LinkMap,
}

impl<T: Resource> Paged<T> {
    /// Wrap decoded records and the links that came with them
    pub fn new(data: Vec<T>, links: LinkMap) -> Self {
        Self { data, links }
    }

    /// The records on this page
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the page, yielding its records
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether this page holds no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether a given relation was advertised for this page
    pub fn has(&self, relation: Relation) -> bool {
        self.links.contains(relation)
    }

    /// Filter for the next result set, or [`Error::NoResultSet`] on the
    /// last page
    pub fn next(&self) -> Result<T::Filter> {
        self.filter_for(Relation::Next)
    }

    /// Filter for the previous result set, or [`Error::NoResultSet`] on
    /// the first page
    pub fn prev(&self) -> Result<T::Filter> {
        self.filter_for(Relation::Prev)
    }

    /// Filter for the first result set
    pub fn first(&self) -> Result<T::Filter> {
        self.filter_for(Relation::First)
    }

    /// Filter for the last result set
    pub fn last(&self) -> Result<T::Filter> {
        self.filter_for(Relation::Last)
    }

    fn filter_for(&self, relation: Relation) -> Result<T::Filter> {
        let url = self.links.get(relation).ok_or(Error::NoResultSet)?;
        let query = QueryMap::from_url(url)?;
        T::Filter::from_query(&query)
    }
}

impl<T: Resource> IntoIterator for Paged<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Resource> IntoIterator for &'a Paged<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
