//! Anime Portal library: catalog pages backed by the Jikan API v4.
//!
//! This library fetches anime listings and details, binds them to view
//! models, renders them to HTML, and drives the interactive parts of the
//! site (carousel, navigation menu, back-to-top, contact form, search)
//! through an event loop.

pub mod api;
pub mod binder;
pub mod error;
pub mod events;
pub mod interactions;
pub mod pages;
pub mod query;
pub mod render;
pub mod session;

#[cfg(test)]
mod testing;

pub use api::{CatalogSource, FetchError, JikanClient, RemoteFetcher};
pub use error::PageError;
pub use events::{parse_command, Effect, EventBus, Handler, UiEvent};
pub use pages::{DetailsOutcome, HomeView, Portal};
pub use query::{extract_id, SearchQuery};
pub use session::Session;
