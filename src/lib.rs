//! # iceandfire
//!
//! A Rust client for [An API of Ice and Fire](https://anapioficeandfire.com),
//! the read-only REST API covering the books, characters and houses of the
//! Ice and Fire universe.
//!
//! ## Features
//!
//! - **Fluent filters**: immutable per-resource builders that serialize to
//!   query strings; each setter returns a new value
//! - **Hypermedia pagination**: `Link` response headers parsed into typed
//!   relations, with `next()`/`prev()`/`first()`/`last()` rebuilding a
//!   ready-to-use filter from the advertised URL
//! - **Typed records**: JSON payloads decoded into [`Book`], [`Character`]
//!   and [`House`], with hypermedia references reduced to numeric ids
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iceandfire::{HouseFilter, IceAndFireClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = IceAndFireClient::new();
//!
//!     // Filtered listing
//!     let page = client
//!         .houses(HouseFilter::new().region("The North").has_died_out(false))
//!         .await?;
//!     for house in &page {
//!         println!("{}", house.name);
//!     }
//!
//!     // Walk to the next result set without re-deriving the filter
//!     if let Ok(next) = page.next() {
//!         let second_page = client.houses(next).await?;
//!         println!("{} more houses", second_page.len());
//!     }
//!
//!     // Single resource by id
//!     let jon = client.character(583).await?;
//!     println!("{} ({})", jon.name, jon.culture);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

/// Error types for the client
pub mod error;

/// Resource filters and the query-string conversion trait
pub mod filter;

/// Link header parsing, query reconstruction and paged responses
pub mod pagination;

/// Domain records returned by the api
pub mod resource;

/// HTTP client for the api
pub mod client;

pub use client::{ClientConfig, ClientConfigBuilder, IceAndFireClient};
pub use error::{Error, Result};
pub use filter::{BookFilter, CharacterFilter, Filter, HouseFilter, PageSelector};
pub use pagination::{parse_link_header, LinkMap, Paged, QueryMap, Relation};
pub use resource::{Book, Character, House, Resource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
