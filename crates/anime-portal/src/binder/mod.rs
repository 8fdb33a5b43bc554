//! View binding: pure functions from catalog records to view models.
//!
//! Nothing here touches the network or holds state. Every field the record
//! leaves out is replaced with a fixed fallback string.

pub mod cards;
pub mod details;
pub mod platforms;

pub use cards::{Action, CardKind, CardView, RankedEntry, SearchResultsView, SlideView};
pub use details::{DetailsView, ErrorPanel, GenreTags, MetaField, TrailerView};
pub use platforms::{PlatformButton, PlatformStyle};

use serde::Serialize;
use shared::Config;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available.";

/// Settings the binder needs from configuration
#[derive(Debug, Clone)]
pub struct BindContext {
    pub site_name: String,
    pub home_page: String,
    pub details_page: String,
    pub max_platforms: usize,
}

impl BindContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_name: config.site.name.clone(),
            home_page: config.site.home_page.clone(),
            details_page: config.site.details_page.clone(),
            max_platforms: config.ui.max_platforms,
        }
    }

    /// Navigation target for a record, `<details page>?id=<id>`
    pub fn details_link(&self, id: u32) -> String {
        format!("{}?id={}", self.details_page, id)
    }
}

impl Default for BindContext {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// An image element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Score as shown on cards and the details page; zero counts as absent
pub(crate) fn score_text(score: Option<f64>) -> Option<String> {
    score.filter(|s| *s != 0.0).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_link() {
        let ctx = BindContext::default();
        assert_eq!(ctx.details_link(21), "animes.html?id=21");
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(Some(9.1)).as_deref(), Some("9.1"));
        assert_eq!(score_text(Some(8.0)).as_deref(), Some("8"));
        assert_eq!(score_text(Some(0.0)), None);
        assert_eq!(score_text(None), None);
    }
}
