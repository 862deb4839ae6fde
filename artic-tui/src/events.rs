//! Event types for the TUI event loop.

use artic_core::{ArtworkPage, ArtworkRecord, PageWindow};
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    /// Terminal resized; the next loop iteration redraws.
    Resize,
    PageLoaded { window: PageWindow, page: ArtworkPage },
    PageFailed { window: PageWindow, message: String },
    SelectionCompleted { requested: u64, records: Vec<ArtworkRecord> },
    SelectionFailed { requested: u64, message: String },
}
