//! Reusable widget components.

pub mod detail;
pub mod paginator;
pub mod popover;

pub use detail::DetailPanel;
pub use paginator::Paginator;
pub use popover::{centered_rect, MessageBox, NumberInput};
