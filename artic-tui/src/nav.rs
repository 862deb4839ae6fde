//! Focus handling between the two scrollable panes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Selection,
}

impl Focus {
    pub fn title(&self) -> &'static str {
        match self {
            Focus::Table => "Artworks",
            Focus::Selection => "Selected Rows",
        }
    }

    pub fn next(&self) -> Focus {
        match self {
            Focus::Table => Focus::Selection,
            Focus::Selection => Focus::Table,
        }
    }
}
