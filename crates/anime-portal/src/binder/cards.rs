//! List bindings: carousel slides, cards, the ranked list, search results.

use super::{score_text, BindContext, Image, NOT_AVAILABLE, NO_DESCRIPTION, UNKNOWN_TITLE};
use serde::Serialize;
use shared::CatalogRecord;

const SLIDE_SYNOPSIS_CHARS: usize = 100;
const CARD_SYNOPSIS_CHARS: usize = 150;

/// Carousel slide on the homepage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideView {
    pub image: String,
    pub title: String,
    pub description: String,
}

impl SlideView {
    pub fn bind(record: &CatalogRecord) -> Self {
        Self {
            image: record.card_image().unwrap_or_default().to_string(),
            title: title(record),
            description: match non_empty(record.synopsis.as_deref()) {
                Some(synopsis) => format!("{}...", prefix(synopsis, SLIDE_SYNOPSIS_CHARS)),
                None => NO_DESCRIPTION.to_string(),
            },
        }
    }
}

/// Where a card appears; decides its fallbacks and buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    LatestUpdate,
    Show,
    Movie,
    SearchResult,
}

impl CardKind {
    fn year_fallback(&self) -> &'static str {
        match self {
            CardKind::LatestUpdate => "TBA",
            _ => NOT_AVAILABLE,
        }
    }

    fn action_labels(&self) -> &'static [&'static str] {
        match self {
            CardKind::LatestUpdate | CardKind::SearchResult => &["Watch Now"],
            CardKind::Show | CardKind::Movie => &["Watch", "More Info"],
        }
    }
}

/// A control that navigates to the details view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub label: &'static str,
    pub href: String,
}

/// One record in a grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub kind: CardKind,
    pub id: u32,
    pub image: Image,
    pub title: String,
    pub year: String,
    pub genres: String,
    pub score: String,
    pub episodes: String,
    pub synopsis: String,
    pub actions: Vec<Action>,
}

impl CardView {
    pub fn bind(record: &CatalogRecord, kind: CardKind, ctx: &BindContext) -> Self {
        let title = title(record);
        let alt = match kind {
            CardKind::Show | CardKind::Movie => format!("{} Poster", title),
            _ => title.clone(),
        };
        let href = ctx.details_link(record.id);

        Self {
            kind,
            id: record.id,
            image: Image {
                src: record.card_image().unwrap_or_default().to_string(),
                alt,
            },
            year: record
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| kind.year_fallback().to_string()),
            genres: genre_summary(record),
            score: score_text(record.score).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            episodes: record
                .episodes
                .filter(|e| *e > 0)
                .map(|e| e.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            synopsis: truncate_synopsis(record.synopsis.as_deref(), CARD_SYNOPSIS_CHARS),
            actions: kind
                .action_labels()
                .iter()
                .map(|&label| Action {
                    label,
                    href: href.clone(),
                })
                .collect(),
            title,
        }
    }

    pub fn bind_all(records: &[CatalogRecord], kind: CardKind, ctx: &BindContext) -> Vec<Self> {
        records
            .iter()
            .map(|record| Self::bind(record, kind, ctx))
            .collect()
    }
}

/// Entry in the top-rated list, ranked in response order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub id: u32,
    pub title: String,
}

impl RankedEntry {
    pub fn bind_all(records: &[CatalogRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Self {
                rank: index + 1,
                id: record.id,
                title: title(record),
            })
            .collect()
    }
}

/// The search results panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultsView {
    pub cards: Vec<CardView>,
    pub empty_message: Option<&'static str>,
}

impl SearchResultsView {
    pub fn bind(records: &[CatalogRecord], ctx: &BindContext) -> Self {
        Self {
            cards: CardView::bind_all(records, CardKind::SearchResult, ctx),
            empty_message: records
                .is_empty()
                .then_some("No anime found for your search."),
        }
    }
}

fn title(record: &CatalogRecord) -> String {
    record.title.as_deref().unwrap_or(UNKNOWN_TITLE).to_string()
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Synopsis cut to `max` characters with an ellipsis, or the no-description text
pub fn truncate_synopsis(synopsis: Option<&str>, max: usize) -> String {
    match non_empty(synopsis) {
        Some(text) if text.chars().count() > max => format!("{}...", prefix(text, max)),
        Some(text) => text.to_string(),
        None => NO_DESCRIPTION.to_string(),
    }
}

fn genre_summary(record: &CatalogRecord) -> String {
    if record.genres.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    record
        .genres
        .iter()
        .map(|g| g.as_deref().unwrap_or("Unknown Genre"))
        .collect::<Vec<_>>()
        .join(", ")
}
