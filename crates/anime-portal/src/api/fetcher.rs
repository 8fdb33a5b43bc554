//! Remote fetcher with page-level fallbacks.
//!
//! Listing operations never fail: a failed request is logged and becomes an
//! empty list. The single-record operation still reports its error so the
//! details page can show an error panel.

use super::client::CatalogSource;
use super::error::FetchError;
use crate::query::SearchQuery;
use shared::CatalogRecord;
use tracing::{debug, error};

/// Fetcher over any catalog source
pub struct RemoteFetcher<S> {
    source: S,
}

impl<S: CatalogSource> RemoteFetcher<S> {
    /// Create a new fetcher
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch one record by identifier
    pub async fn fetch_by_id(&self, id: &str) -> Result<CatalogRecord, FetchError> {
        self.source.anime_by_id(id).await.map_err(|e| {
            error!(id = id, error = %e, "Error fetching anime details");
            e
        })
    }

    /// Fetch the current season, empty on failure
    pub async fn fetch_current_season(&self, limit: u32) -> Vec<CatalogRecord> {
        or_empty("current season", self.source.current_season(limit).await)
    }

    /// Fetch the upcoming season, empty on failure
    pub async fn fetch_upcoming_season(&self, limit: u32) -> Vec<CatalogRecord> {
        or_empty("upcoming season", self.source.upcoming_season(limit).await)
    }

    /// Fetch the top-rated list, empty on failure
    pub async fn fetch_top_rated(&self, limit: u32) -> Vec<CatalogRecord> {
        or_empty("top rated", self.source.top_rated(limit).await)
    }

    /// Search by free text, empty on failure
    pub async fn fetch_by_query(&self, query: &SearchQuery, limit: u32) -> Vec<CatalogRecord> {
        or_empty("search", self.source.search(query, limit).await)
    }
}

fn or_empty(listing: &str, result: Result<Vec<CatalogRecord>, FetchError>) -> Vec<CatalogRecord> {
    match result {
        Ok(records) => {
            debug!(listing = listing, count = records.len(), "Fetched listing");
            records
        }
        Err(e) => {
            error!(listing = listing, error = %e, "Error fetching anime listing");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record, FakeSource};

    #[tokio::test]
    async fn test_listing_failure_degrades_to_empty() {
        let fetcher = RemoteFetcher::new(FakeSource::failing());

        assert!(fetcher.fetch_current_season(8).await.is_empty());
        assert!(fetcher.fetch_upcoming_season(8).await.is_empty());
        assert!(fetcher.fetch_top_rated(10).await.is_empty());

        let query = SearchQuery::parse("bebop").unwrap();
        assert!(fetcher.fetch_by_query(&query, 10).await.is_empty());
        assert_eq!(fetcher.source().calls(), 4);
    }

    #[tokio::test]
    async fn test_by_id_failure_is_reported() {
        let fetcher = RemoteFetcher::new(FakeSource::failing());
        assert!(fetcher.fetch_by_id("1").await.is_err());
    }

    #[tokio::test]
    async fn test_listing_passes_records_through() {
        let source = FakeSource::default().with_top_rated((1..=3).map(|i| record(i, "Title")).collect());
        let fetcher = RemoteFetcher::new(source);

        let records = fetcher.fetch_top_rated(3).await;
        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(fetcher.source().limits(), vec![3]);
    }
}
