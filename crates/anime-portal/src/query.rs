//! Query extraction and search input handling.

use crate::error::PageError;
use std::fmt;

/// Query parameter carrying the record identifier on the details page
pub const ID_PARAM: &str = "id";

/// Extract the record identifier from a page query string.
///
/// Accepts a bare query (`id=5114`), one with the leading `?`, or a full
/// page reference (`animes.html?id=5114`). The identifier must be a numeric
/// MAL id; an absent, empty or non-numeric `id` counts as missing.
pub fn extract_id(query: &str) -> Result<String, PageError> {
    let query = match query.split_once('?') {
        Some((_, rest)) => rest,
        None if query.contains('=') => query,
        None => "",
    };
    let query = query.split('#').next().unwrap_or_default();

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == ID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
        .ok_or(PageError::MissingId)
}

/// User-supplied search text, trimmed and known to be non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim the input; whitespace-only input yields no query
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
