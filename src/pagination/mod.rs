//! Pagination module
//!
//! Supports the hypermedia pagination protocol of the api: each list
//! response carries an RFC 5988 `Link` header naming the `next`, `prev`,
//! `first` and `last` result sets.
//!
//! # Overview
//!
//! [`parse_link_header`] turns the raw header into a [`LinkMap`];
//! [`QueryMap`] re-derives paging fields and filter values from any of the
//! advertised URLs; [`Paged`] ties both together so a caller can walk
//! adjacent pages without re-deriving filter state.

mod links;
mod paged;
mod query;

pub use links::{parse_link_header, LinkMap, Relation};
pub use paged::Paged;
pub use query::{QueryMap, PAGE_KEY, PAGE_SIZE_KEY};
