//! Cross-page row selection.
//!
//! Selecting "the first K rows" starts from the page on screen and keeps
//! fetching the following pages, one at a time, until K records have been
//! gathered or the listing runs out.

use crate::artwork::ArtworkRecord;
use crate::error::SelectionError;
use crate::page::PageWindow;
use async_trait::async_trait;

/// Anything that can produce one page of the artwork listing.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the one-based `page` holding `limit` records.
    async fn fetch_page(&self, page: u64, limit: u64) -> Result<Vec<ArtworkRecord>, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Number of rows the user asked for.
    pub count: u64,
    /// Server-reported total, used to clamp `count`.
    pub total_records: u64,
    /// Window currently on screen.
    pub window: PageWindow,
}

impl SelectionRequest {
    pub fn target(&self) -> usize {
        usize::try_from(self.count.min(self.total_records)).unwrap_or(usize::MAX)
    }
}

/// Gather the first `request.count` rows starting from the `loaded` page.
///
/// Records fetched from later pages are appended as-is; titles are not
/// de-duplicated across pages. Stops when the target is reached, when the
/// last page has been fetched, or when a page comes back empty. The result
/// is truncated to the target.
pub async fn select_across_pages<S>(
    source: &S,
    request: SelectionRequest,
    loaded: &[ArtworkRecord],
) -> Result<Vec<ArtworkRecord>, SelectionError<S::Error>>
where
    S: PageSource + ?Sized,
{
    let target = request.target();
    let rows = request.window.rows();
    let last_page = request.window.page_count(request.total_records);
    let mut page = request.window.page();
    let mut selected = loaded.to_vec();

    while selected.len() < target && page < last_page {
        page += 1;
        tracing::debug!(page, limit = rows, accumulated = selected.len(), target, "Fetching page for selection");
        let records = source
            .fetch_page(page, rows)
            .await
            .map_err(|source| SelectionError::Fetch { page, source })?;
        if records.is_empty() {
            break;
        }
        selected.extend(records);
    }

    selected.truncate(target);
    Ok(selected)
}
