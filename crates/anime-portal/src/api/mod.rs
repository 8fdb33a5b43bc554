//! Jikan API v4 access.
//!
//! `JikanClient` performs the HTTP work behind the `CatalogSource` trait;
//! `RemoteFetcher` wraps any source and turns failures into the empty or
//! error results the pages expect.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod types;

pub use client::{CatalogSource, JikanClient};
pub use error::FetchError;
pub use fetcher::RemoteFetcher;
pub use types::*;
