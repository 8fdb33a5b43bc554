//! Page-level errors.

use crate::api::FetchError;
use thiserror::Error;

/// Why a page could not be bound.
///
/// Both kinds end in an error panel; neither is retried or propagated past
/// the page controller.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("No anime ID provided in URL")]
    MissingId,

    #[error(transparent)]
    Request(#[from] FetchError),
}
