//! Homepage.

use crate::api::{CatalogSource, RemoteFetcher};
use crate::binder::{BindContext, CardKind, CardView, RankedEntry, SlideView};
use serde::Serialize;
use shared::config::LimitsConfig;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub slides: Vec<SlideView>,
    pub latest_updates: Vec<CardView>,
    pub top_rated: Vec<RankedEntry>,
}

/// Fetch the three homepage listings concurrently.
///
/// Each listing fills its own region, so completion order does not matter
/// and a failed listing leaves only its region empty.
pub async fn load<S: CatalogSource>(
    fetcher: &RemoteFetcher<S>,
    limits: &LimitsConfig,
    slide_count: usize,
    ctx: &BindContext,
) -> HomeView {
    let (current, upcoming, top) = tokio::join!(
        fetcher.fetch_current_season(limits.current_season),
        fetcher.fetch_upcoming_season(limits.upcoming_season),
        fetcher.fetch_top_rated(limits.top_rated),
    );

    let view = HomeView {
        slides: current.iter().take(slide_count).map(SlideView::bind).collect(),
        latest_updates: CardView::bind_all(&upcoming, CardKind::LatestUpdate, ctx),
        top_rated: RankedEntry::bind_all(&top),
    };

    info!(
        slides = view.slides.len(),
        latest_updates = view.latest_updates.len(),
        top_rated = view.top_rated.len(),
        "Rendered homepage"
    );

    view
}
