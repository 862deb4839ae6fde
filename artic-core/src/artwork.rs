//! Artwork records and the listing response returned by the artworks endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// One artwork row as displayed in the table.
///
/// `title` doubles as the de-duplication key within a page and as the
/// selection key across pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_display: String,
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Year the work was started.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Year the work was finished.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl ArtworkRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            place_of_origin: None,
            artist_display: String::new(),
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    pub fn origin(&self) -> &str {
        self.place_of_origin.as_deref().unwrap_or("")
    }
}

/// Pagination block of a listing response. Only `total` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
}

/// Raw body of `GET /api/v1/artworks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkListResponse {
    pub data: Vec<ArtworkRecord>,
    pub pagination: Pagination,
}

/// A page ready for display: titles are unique within `records`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtworkPage {
    pub records: Vec<ArtworkRecord>,
    pub total_records: u64,
}

impl From<ArtworkListResponse> for ArtworkPage {
    fn from(response: ArtworkListResponse) -> Self {
        Self {
            records: dedupe_by_title(response.data),
            total_records: response.pagination.total,
        }
    }
}

/// Drop records whose title was already seen, keeping the first occurrence
/// and the input order.
pub fn dedupe_by_title(records: Vec<ArtworkRecord>) -> Vec<ArtworkRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.title.clone()))
        .collect()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
