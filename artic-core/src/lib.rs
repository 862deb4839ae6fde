//! Artic Core - Artwork listing types and pagination logic
//!
//! Data model for the artworks endpoint, per-page title de-duplication,
//! pagination arithmetic and the cross-page selection loop. Nothing in this
//! crate talks to a terminal or a network directly; fetching goes through
//! the [`PageSource`] trait.

pub mod artwork;
pub mod error;
pub mod page;
pub mod selection;

pub use artwork::{dedupe_by_title, ArtworkListResponse, ArtworkPage, ArtworkRecord, Pagination};
pub use error::SelectionError;
pub use page::{page_number, total_pages, PageWindow};
pub use selection::{select_across_pages, PageSource, SelectionRequest};
