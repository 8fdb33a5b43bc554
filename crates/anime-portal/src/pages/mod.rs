//! Page controllers.
//!
//! A `Portal` ties the fetcher to the binder: each method performs the
//! requests one page needs and returns its view model.

pub mod details;
pub mod home;

pub use details::DetailsOutcome;
pub use home::HomeView;

use crate::api::{CatalogSource, RemoteFetcher};
use crate::binder::{BindContext, CardKind, CardView, SearchResultsView};
use crate::query::SearchQuery;
use shared::config::{LimitsConfig, UiConfig};
use shared::Config;
use tracing::info;

pub struct Portal<S> {
    fetcher: RemoteFetcher<S>,
    ctx: BindContext,
    limits: LimitsConfig,
    ui: UiConfig,
}

impl<S: CatalogSource> Portal<S> {
    pub fn new(fetcher: RemoteFetcher<S>, config: &Config) -> Self {
        Self {
            fetcher,
            ctx: BindContext::from_config(config),
            limits: config.limits.clone(),
            ui: config.ui.clone(),
        }
    }

    pub fn fetcher(&self) -> &RemoteFetcher<S> {
        &self.fetcher
    }

    pub fn context(&self) -> &BindContext {
        &self.ctx
    }

    /// Homepage: carousel, latest updates and the top-rated list
    pub async fn home(&self) -> HomeView {
        home::load(&self.fetcher, &self.limits, self.ui.carousel_slides, &self.ctx).await
    }

    /// Details page for a query string carrying `id`
    pub async fn details(&self, query: &str) -> DetailsOutcome {
        details::load(&self.fetcher, query, &self.ctx).await
    }

    /// Search results, or `None` when the input is blank and no request is made
    pub async fn search(&self, input: &str) -> Option<SearchResultsView> {
        let query = SearchQuery::parse(input)?;
        let records = self.search_records(&query).await;
        Some(SearchResultsView::bind(&records, &self.ctx))
    }

    /// Raw records for a search, used by the interactive session
    pub async fn search_records(&self, query: &SearchQuery) -> Vec<shared::CatalogRecord> {
        self.fetcher.fetch_by_query(query, self.limits.search).await
    }

    /// Shows grid, filled from the current season
    pub async fn shows(&self) -> Vec<CardView> {
        let records = self.fetcher.fetch_current_season(self.limits.current_season).await;
        info!(cards = records.len(), "Rendered shows grid");
        CardView::bind_all(&records, CardKind::Show, &self.ctx)
    }

    /// Movies grid, filled from the top-rated list
    pub async fn movies(&self) -> Vec<CardView> {
        let records = self.fetcher.fetch_top_rated(self.limits.top_rated).await;
        info!(cards = records.len(), "Rendered movies grid");
        CardView::bind_all(&records, CardKind::Movie, &self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record, FakeSource};

    fn portal(source: FakeSource) -> Portal<FakeSource> {
        Portal::new(RemoteFetcher::new(source), &Config::default())
    }

    #[tokio::test]
    async fn test_blank_search_makes_no_request() {
        let portal = portal(FakeSource::default());
        assert!(portal.search("").await.is_none());
        assert!(portal.search("   \t").await.is_none());
        assert_eq!(portal.fetcher().source().calls(), 0);
    }

    #[tokio::test]
    async fn test_search_uses_trimmed_text_and_limit() {
        let portal = portal(FakeSource::default().with_search(vec![record(1, "Naruto")]));
        let results = portal.search("  naruto ").await.unwrap();

        assert_eq!(results.cards.len(), 1);
        assert_eq!(portal.fetcher().source().queries(), vec!["naruto".to_string()]);
        assert_eq!(portal.fetcher().source().limits(), vec![10]);
    }

    #[tokio::test]
    async fn test_failed_search_shows_empty_message() {
        let portal = portal(FakeSource::failing());
        let results = portal.search("naruto").await.unwrap();
        assert_eq!(results.empty_message, Some("No anime found for your search."));
    }

    #[tokio::test]
    async fn test_grids_use_their_listings() {
        let source = FakeSource::default()
            .with_current((1..=8).map(|i| record(i, "Show")).collect())
            .with_top_rated((1..=10).map(|i| record(i, "Movie")).collect());
        let portal = portal(source);

        let shows = portal.shows().await;
        assert_eq!(shows.len(), 8);
        assert!(shows.iter().all(|c| c.kind == CardKind::Show));

        let movies = portal.movies().await;
        assert_eq!(movies.len(), 10);
        assert_eq!(portal.fetcher().source().limits(), vec![8, 10]);
    }
}
