//! Mutable view state: search/sort options and pagination.

use serde::{Deserialize, Serialize};

/// Search and sort state for the current view.
///
/// Mutated by user filter/sort/column-scope actions; read by the fetch
/// step when building the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Display title of the table
    pub title: String,
    /// Columns the filter text is matched against; empty means all columns
    pub columns: Vec<String>,
    /// Current search text, stored verbatim (no debouncing)
    pub filter: String,
    /// Sort terms in `"column direction"` form, e.g. `"name asc"`
    pub order: Vec<String>,
}

/// Page, page-size, and server-reported total-count state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Current page, 1-based
    pub page: u32,
    /// Rows per page, always positive
    pub page_limit: u32,
    /// Total entry count, overwritten after each successful fetch
    pub total_items: u64,
}

impl PaginationState {
    /// Create pagination state on page 1 with the given page size.
    pub fn new(page_limit: u32) -> Self {
        Self {
            page: 1,
            page_limit,
            total_items: 0,
        }
    }

    /// Offset of the first row of the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_limit)
    }

    /// Highest valid page for a prospective page size.
    ///
    /// Uses integer floor of `total_items / limit`, raised to 1 so the
    /// `page >= 1` invariant always holds.
    pub fn max_page(&self, limit: u32) -> u32 {
        let pages = self.total_items / u64::from(limit);
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(25)
    }
}

/// Sort direction for a single order term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl std::fmt::Display for Direction {
    /// The wire form used in order terms.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Builds a single `"column direction"` order term.
pub fn order_term(name: &str, direction: Direction) -> String {
    format!("{name} {direction}")
}

/// One caller-supplied search-scope choice.
///
/// Selecting a choice replaces the active search-columns scope with a copy
/// of its `value` list.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    /// Label shown to the user
    pub label: String,
    /// Column names this choice scopes the search to; empty means all
    pub value: Vec<String>,
}

impl ColumnFilter {
    /// Create a search-scope choice.
    pub fn new(label: impl Into<String>, value: Vec<String>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Snapshot of the watched fetch-relevant fields.
///
/// The reconciliation step compares the current key against the last
/// reconciled one by value; any difference triggers a fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchKey {
    pub columns: Vec<String>,
    pub order: Vec<String>,
    pub filter: String,
    pub page: u32,
    pub page_limit: u32,
}
