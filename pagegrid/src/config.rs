//! Explicit table configuration.
//!
//! Every optional collaborator (fetcher, callbacks, view-state store) is an
//! optional field here; calling code checks for presence, never for type.

use std::fmt;
use std::sync::Arc;

use crate::cell::CellSpec;
use crate::error::TableError;
use crate::fetch::{DataFetcher, PageResult};
use crate::options::{ColumnFilter, Direction, order_term};
use crate::view_state::{MemoryStore, ViewStateStore};

/// Callback invoked after every successful fetch with the raw result.
pub type FetchedCallback = Arc<dyn Fn(&PageResult) + Send + Sync>;

/// Error-reporting channel. Absent means errors go to the log.
pub type ErrorCallback = Arc<dyn Fn(&TableError) + Send + Sync>;

/// Configuration for a [`TableCoordinator`](crate::coordinator::TableCoordinator).
///
/// # Examples
///
/// ```ignore
/// let config = TableConfig::new("Users")
///     .cells(vec![
///         CellSpec::new("id", "ID"),
///         CellSpec::new("name", "Name"),
///     ])
///     .default_order("id", Direction::Asc)
///     .default_limit(15)
///     .fetcher(api_fetcher)
///     .on_error(|err| log::error!("table: {err}"));
/// ```
pub struct TableConfig {
    /// Display title of the table
    pub title: String,
    /// Columns to display, in order
    pub cells: Vec<CellSpec>,
    /// Search-scope choices offered to the user
    pub filter_columns: Vec<ColumnFilter>,
    /// Initial sort terms
    pub default_order: Vec<String>,
    /// Initial page size
    pub default_limit: u32,
    /// Column whose values render as long-form dates
    pub date_column: Option<String>,
    pub(crate) fetcher: Option<Arc<dyn DataFetcher>>,
    pub(crate) on_fetched: Option<FetchedCallback>,
    pub(crate) on_error: Option<ErrorCallback>,
    pub(crate) store: Arc<dyn ViewStateStore>,
}

impl TableConfig {
    /// Create a configuration with the given title and the defaults:
    /// page size 25, no fetcher, in-memory view-state store.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cells: Vec::new(),
            filter_columns: Vec::new(),
            default_order: Vec::new(),
            default_limit: 25,
            date_column: None,
            fetcher: None,
            on_fetched: None,
            on_error: None,
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Set the columns to display.
    pub fn cells(mut self, cells: Vec<CellSpec>) -> Self {
        self.cells = cells;
        self
    }

    /// Set the search-scope choices.
    pub fn filter_columns(mut self, filter_columns: Vec<ColumnFilter>) -> Self {
        self.filter_columns = filter_columns;
        self
    }

    /// Set the initial sort as a single order term.
    pub fn default_order(mut self, name: &str, direction: Direction) -> Self {
        self.default_order = vec![order_term(name, direction)];
        self
    }

    /// Set the initial sort terms verbatim.
    pub fn default_order_terms(mut self, order: Vec<String>) -> Self {
        self.default_order = order;
        self
    }

    /// Set the initial page size.
    pub fn default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    /// Designate the column rendered as a long-form date.
    pub fn date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = Some(name.into());
        self
    }

    /// Set the external data fetcher.
    pub fn fetcher(mut self, fetcher: impl DataFetcher + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    /// Set the data-fetched callback.
    pub fn on_fetched(mut self, callback: impl Fn(&PageResult) + Send + Sync + 'static) -> Self {
        self.on_fetched = Some(Arc::new(callback));
        self
    }

    /// Set the error-reporting channel.
    pub fn on_error(mut self, callback: impl Fn(&TableError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Set the view-state store.
    pub fn store(mut self, store: Arc<dyn ViewStateStore>) -> Self {
        self.store = store;
        self
    }
}

impl fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("title", &self.title)
            .field("cells", &self.cells)
            .field("filter_columns", &self.filter_columns)
            .field("default_order", &self.default_order)
            .field("default_limit", &self.default_limit)
            .field("date_column", &self.date_column)
            .field("fetcher", &self.fetcher.is_some())
            .field("on_fetched", &self.on_fetched.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish_non_exhaustive()
    }
}
