//! Details page binding for a single record.

use super::platforms::{bind_platforms, PlatformButton};
use super::{score_text, BindContext, Image, NOT_AVAILABLE, UNKNOWN_TITLE};
use serde::Serialize;
use shared::CatalogRecord;

const TRAILER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
const TRAILER_PLACEHOLDER: &str = "https://via.placeholder.com/100x100/333/fff?text=No+Trailer";

/// One labeled metadata value, keyed by the element it fills
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaField {
    pub element_id: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GenreTags {
    Tags { names: Vec<String> },
    Empty { message: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrailerView {
    Embed {
        src: String,
        title: &'static str,
        allow: &'static str,
    },
    Placeholder {
        image: &'static str,
        message: &'static str,
    },
}

/// Everything the details page shows for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailsView {
    pub document_title: String,
    pub title: String,
    pub poster: Image,
    pub meta: Vec<MetaField>,
    pub genres: GenreTags,
    pub synopsis: String,
    pub trailer: TrailerView,
    pub platforms: Vec<PlatformButton>,
    pub external_url: String,
}

impl DetailsView {
    pub fn bind(record: &CatalogRecord, ctx: &BindContext) -> Self {
        let title = record.title.as_deref();

        Self {
            document_title: format!("{} - {}", title.unwrap_or("Unknown Anime"), ctx.site_name),
            title: title.unwrap_or(UNKNOWN_TITLE).to_string(),
            poster: Image {
                src: record.image_url.clone().unwrap_or_default(),
                alt: format!("{} Poster", title.unwrap_or("Anime")),
            },
            meta: meta_fields(record),
            genres: genre_tags(record),
            synopsis: record
                .synopsis
                .clone()
                .unwrap_or_else(|| "Synopsis not available.".to_string()),
            trailer: trailer_view(record),
            platforms: bind_platforms(&record.streaming, ctx.max_platforms),
            external_url: record.url.clone().unwrap_or_else(|| "#".to_string()),
        }
    }

    /// Value bound to a metadata element
    pub fn meta_value(&self, element_id: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|field| field.element_id == element_id)
            .map(|field| field.value.as_str())
    }
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn meta_fields(record: &CatalogRecord) -> Vec<MetaField> {
    let field = |element_id, label, value| MetaField {
        element_id,
        label,
        value,
    };

    vec![
        field("anime-type", "Type", or_na(record.media_type.as_deref())),
        field("anime-episodes", "Episodes", or_na(record.episodes)),
        field("anime-rating", "Rating", or_na(record.rating.as_deref())),
        field(
            "anime-score",
            "Score",
            score_text(record.score)
                .map(|s| format!("⭐ {}", s))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        field(
            "anime-year",
            "Year",
            record
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
        field("anime-status", "Status", or_na(record.status.as_deref())),
        field("anime-studio", "Studio", or_na(record.studios.first())),
    ]
}

fn genre_tags(record: &CatalogRecord) -> GenreTags {
    if record.genres.is_empty() {
        return GenreTags::Empty {
            message: "No genres available",
        };
    }

    GenreTags::Tags {
        names: record
            .genres
            .iter()
            .map(|g| g.as_deref().unwrap_or("Unknown Genre").to_string())
            .collect(),
    }
}

fn trailer_view(record: &CatalogRecord) -> TrailerView {
    match record.trailer() {
        Some(src) => TrailerView::Embed {
            src: src.to_string(),
            title: "Anime Trailer",
            allow: TRAILER_ALLOW,
        },
        None => TrailerView::Placeholder {
            image: TRAILER_PLACEHOLDER,
            message: "Trailer not available",
        },
    }
}

/// Shown instead of the details when the page cannot be bound
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPanel {
    pub message: String,
    pub back_href: String,
}

impl ErrorPanel {
    pub fn new(message: impl Into<String>, ctx: &BindContext) -> Self {
        Self {
            message: message.into(),
            back_href: ctx.home_page.clone(),
        }
    }
}
