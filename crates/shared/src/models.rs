//! Data models for the portal.
//!
//! A `CatalogRecord` is the normalized form of one title as returned by the
//! remote catalog. Every field the remote may omit is optional here, so the
//! view layer decides what to show in its place.

use serde::{Deserialize, Serialize};

/// One media title from the remote catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u32,              // MyAnimeList ID
    pub url: Option<String>,  // External page on MyAnimeList

    pub title: Option<String>,
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub synopsis: Option<String>,

    pub media_type: Option<String>,  // TV, Movie, OVA, etc.
    pub episodes: Option<u32>,
    pub rating: Option<String>,
    pub score: Option<f64>,
    pub year: Option<i32>,
    pub status: Option<String>,

    // Names may be missing on individual entries
    pub genres: Vec<Option<String>>,
    pub studios: Vec<String>,
    pub streaming: Vec<StreamingPlatform>,

    pub trailer_embed_url: Option<String>,
}

/// A streaming service listed for a title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamingPlatform {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl CatalogRecord {
    /// Trailer URL if it is usable as an embed source
    pub fn trailer(&self) -> Option<&str> {
        self.trailer_embed_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Image for cards and slides: the large variant, else the regular one
    pub fn card_image(&self) -> Option<&str> {
        self.large_image_url
            .as_deref()
            .or(self.image_url.as_deref())
    }
}
