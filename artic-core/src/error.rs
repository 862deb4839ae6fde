//! Error types for artwork operations

use thiserror::Error;

/// Cross-page selection errors.
///
/// Generic over the page source's own error so callers keep the
/// transport detail.
#[derive(Debug, Error)]
pub enum SelectionError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Fetching page {page} failed: {source}")]
    Fetch {
        page: u64,
        #[source]
        source: E,
    },
}

impl<E> SelectionError<E>
where
    E: std::error::Error + 'static,
{
    /// Page whose fetch aborted the selection.
    pub fn page(&self) -> u64 {
        match self {
            SelectionError::Fetch { page, .. } => *page,
        }
    }
}
