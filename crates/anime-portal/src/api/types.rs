//! Jikan API v4 response types.
//!
//! Every field is optional or defaulted: the catalog omits fields freely and a
//! missing nested object must never fail the whole response.

use serde::{Deserialize, Serialize};
use shared::{CatalogRecord, StreamingPlatform};

/// Envelope for endpoints returning a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Envelope for endpoints returning a single object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// One anime entry, shared by the listing and `/full` endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeEntry {
    pub mal_id: u32,
    pub url: Option<String>,
    pub images: Option<AnimeImages>,
    pub trailer: Option<Trailer>,

    pub title: Option<String>,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub aired: Option<Aired>,
    pub rating: Option<String>,
    pub score: Option<f64>,
    pub synopsis: Option<String>,
    pub year: Option<i32>,

    pub studios: Option<Vec<MalEntity>>,
    pub genres: Option<Vec<MalEntity>>,

    // Only present on `/anime/{id}/full`
    pub streaming: Option<Vec<ExternalLink>>,
}

/// Anime images
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeImages {
    pub jpg: Option<ImageSet>,
    pub webp: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSet {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

/// Trailer metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trailer {
    pub youtube_id: Option<String>,
    pub url: Option<String>,
    pub embed_url: Option<String>,
}

/// Aired dates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Aired {
    pub from: Option<String>,
    pub to: Option<String>,
    pub prop: Option<AiredProp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiredProp {
    pub from: Option<DateProp>,
    pub to: Option<DateProp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateProp {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// MAL entity (genre, studio, producer, etc.)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MalEntity {
    pub mal_id: Option<u32>,
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Streaming link on the full anime endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLink {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl AnimeEntry {
    fn aired_year(&self) -> Option<i32> {
        self.aired.as_ref()?.prop.as_ref()?.from.as_ref()?.year
    }
}

impl From<AnimeEntry> for CatalogRecord {
    fn from(entry: AnimeEntry) -> Self {
        let year = entry.year.or_else(|| entry.aired_year());
        let jpg = entry.images.and_then(|images| images.jpg).unwrap_or_default();

        CatalogRecord {
            id: entry.mal_id,
            url: entry.url,
            title: entry.title,
            image_url: jpg.image_url,
            large_image_url: jpg.large_image_url,
            synopsis: entry.synopsis,
            media_type: entry.anime_type,
            episodes: entry.episodes,
            rating: entry.rating,
            score: entry.score,
            year,
            status: entry.status,
            genres: entry
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.name)
                .collect(),
            studios: entry
                .studios
                .unwrap_or_default()
                .into_iter()
                .filter_map(|s| s.name)
                .collect(),
            streaming: entry
                .streaming
                .unwrap_or_default()
                .into_iter()
                .map(|link| StreamingPlatform {
                    name: link.name,
                    url: link.url,
                })
                .collect(),
            trailer_embed_url: entry.trailer.and_then(|t| t.embed_url),
        }
    }
}
