//! In-memory catalog source for tests.

use crate::api::{CatalogSource, FetchError};
use crate::query::SearchQuery;
use async_trait::async_trait;
use shared::CatalogRecord;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Build a record with just an id and title
pub fn record(id: u32, title: &str) -> CatalogRecord {
    CatalogRecord {
        id,
        title: Some(title.to_string()),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct FakeSource {
    fail: bool,
    details: HashMap<String, CatalogRecord>,
    current: Vec<CatalogRecord>,
    upcoming: Vec<CatalogRecord>,
    top_rated: Vec<CatalogRecord>,
    search: Vec<CatalogRecord>,
    calls: AtomicUsize,
    limits: Mutex<Vec<u32>>,
    queries: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_details(mut self, record: CatalogRecord) -> Self {
        self.details.insert(record.id.to_string(), record);
        self
    }

    pub fn with_current(mut self, records: Vec<CatalogRecord>) -> Self {
        self.current = records;
        self
    }

    pub fn with_upcoming(mut self, records: Vec<CatalogRecord>) -> Self {
        self.upcoming = records;
        self
    }

    pub fn with_top_rated(mut self, records: Vec<CatalogRecord>) -> Self {
        self.top_rated = records;
        self
    }

    pub fn with_search(mut self, records: Vec<CatalogRecord>) -> Self {
        self.search = records;
        self
    }

    /// Number of requests made against this source
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Limits passed to listing requests, in call order
    pub fn limits(&self) -> Vec<u32> {
        self.limits.lock().unwrap().clone()
    }

    /// Search texts received, in call order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn listing(&self, records: &[CatalogRecord], limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.limits.lock().unwrap().push(limit);
        if self.fail {
            return Err(FetchError::MissingData);
        }
        Ok(records.iter().take(limit as usize).cloned().collect())
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn anime_by_id(&self, id: &str) -> Result<CatalogRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::MissingData);
        }
        self.details.get(id).cloned().ok_or(FetchError::MissingData)
    }

    async fn current_season(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        self.listing(&self.current, limit)
    }

    async fn upcoming_season(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        self.listing(&self.upcoming, limit)
    }

    async fn top_rated(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        self.listing(&self.top_rated, limit)
    }

    async fn search(&self, query: &SearchQuery, limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        self.queries.lock().unwrap().push(query.as_str().to_string());
        self.listing(&self.search, limit)
    }
}
