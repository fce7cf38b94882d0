//! Domain records returned by the api
//!
//! Flat, field-for-field mappings of the three resource kinds. Related
//! resources are referenced by hypermedia URL upstream; the deserializers
//! in `ids` reduce those to numeric ids at decode time.

mod book;
mod character;
pub(crate) mod datetime;
mod house;
mod ids;

pub use book::Book;
pub use character::Character;
pub use house::House;

use crate::filter::Filter;
use serde::de::DeserializeOwned;

/// A resource kind exposed by the api
///
/// Ties a record type to its filter vocabulary and collection endpoint, so
/// listing and pagination can be written once for all three kinds.
pub trait Resource: DeserializeOwned {
    /// The filter type accepted by this resource's list endpoint
    type Filter: Filter;

    /// Path of the collection endpoint, relative to the api base URL
    const ENDPOINT: &'static str;
}

#[cfg(test)]
mod tests;
