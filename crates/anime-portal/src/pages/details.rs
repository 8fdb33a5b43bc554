//! Details page.

use crate::api::{CatalogSource, RemoteFetcher};
use crate::binder::{BindContext, DetailsView, ErrorPanel};
use crate::error::PageError;
use crate::query::extract_id;
use serde::Serialize;
use tracing::{error, info};

const LOAD_FAILED: &str = "Failed to load anime details. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DetailsOutcome {
    Loaded(DetailsView),
    Failed(ErrorPanel),
}

/// Extract the id, fetch the record and bind it.
///
/// A missing id ends the load before any request is made.
pub async fn load<S: CatalogSource>(
    fetcher: &RemoteFetcher<S>,
    query: &str,
    ctx: &BindContext,
) -> DetailsOutcome {
    match try_load(fetcher, query, ctx).await {
        Ok(view) => {
            info!(title = %view.title, "Rendered details page");
            DetailsOutcome::Loaded(view)
        }
        Err(e) => {
            error!(error = %e, "Details page failed");
            let message = match &e {
                PageError::MissingId => e.to_string(),
                PageError::Request(_) => LOAD_FAILED.to_string(),
            };
            DetailsOutcome::Failed(ErrorPanel::new(message, ctx))
        }
    }
}

async fn try_load<S: CatalogSource>(
    fetcher: &RemoteFetcher<S>,
    query: &str,
    ctx: &BindContext,
) -> Result<DetailsView, PageError> {
    let id = extract_id(query)?;
    let record = fetcher.fetch_by_id(&id).await?;
    Ok(DetailsView::bind(&record, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record, FakeSource};

    #[tokio::test]
    async fn test_missing_id_shows_error_without_fetching() {
        let fetcher = RemoteFetcher::new(FakeSource::default());
        let outcome = load(&fetcher, "animes.html", &BindContext::default()).await;

        match outcome {
            DetailsOutcome::Failed(panel) => {
                assert_eq!(panel.message, "No anime ID provided in URL");
                assert_eq!(panel.back_href, "index.html");
            }
            other => panic!("expected error panel, got {:?}", other),
        }
        assert_eq!(fetcher.source().calls(), 0);
    }

    #[tokio::test]
    async fn test_dot_segment_id_is_never_requested() {
        let fetcher = RemoteFetcher::new(FakeSource::default());
        let outcome = load(&fetcher, "?id=..", &BindContext::default()).await;

        assert_eq!(
            outcome,
            DetailsOutcome::Failed(ErrorPanel::new(
                "No anime ID provided in URL",
                &BindContext::default()
            ))
        );
        assert_eq!(fetcher.source().calls(), 0);
    }

    #[tokio::test]
    async fn test_record_without_score_renders_na() {
        let mut rec = record(5114, "Fullmetal Alchemist: Brotherhood");
        rec.score = None;
        let fetcher = RemoteFetcher::new(FakeSource::default().with_details(rec));

        let outcome = load(&fetcher, "?id=5114", &BindContext::default()).await;
        match outcome {
            DetailsOutcome::Loaded(view) => {
                assert_eq!(view.title, "Fullmetal Alchemist: Brotherhood");
                assert_eq!(view.meta_value("anime-score"), Some("N/A"));
            }
            other => panic!("expected details, got {:?}", other),
        }
        assert_eq!(fetcher.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_request_failure_shows_generic_error() {
        let fetcher = RemoteFetcher::new(FakeSource::failing());
        let outcome = load(&fetcher, "id=1", &BindContext::default()).await;
        assert_eq!(
            outcome,
            DetailsOutcome::Failed(ErrorPanel::new(LOAD_FAILED, &BindContext::default()))
        );
    }
}
