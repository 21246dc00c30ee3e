//! Pagination/fetch coordination and row rendering for data-table views.
//!
//! `pagegrid` is the state layer of a paginated, searchable, sortable data
//! table. It owns the view state (filter text, sort order, search scope,
//! page and page size), derives fetch parameters from it, and drives an
//! externally supplied async fetcher with cooperative cancellation. A
//! companion stateless renderer turns fetched rows into tagged cell data
//! for whatever layout component the embedder uses.
//!
//! The crate deliberately stops at the data boundary: no layout, no
//! styling, no transport. Those stay with the embedding collaborators.

pub mod cell;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod fetch;
pub mod options;
pub mod render;
pub mod state;
pub mod value;
pub mod view_state;

pub use coordinator::TableCoordinator;

pub mod prelude {
    pub use crate::cell::{CellSize, CellSpec};
    pub use crate::config::TableConfig;
    pub use crate::coordinator::TableCoordinator;
    pub use crate::error::{FetchError, TableError};
    pub use crate::fetch::{DataFetcher, FetchRequest, PageResult};
    pub use crate::options::{
        ColumnFilter, Direction, PaginationState, TableOptions, order_term,
    };
    pub use crate::render::{
        CellText, ClickEvent, RenderedCell, RenderedRow, RenderedRows, RowRenderer, Span,
        highlight,
    };
    pub use crate::state::State;
    pub use crate::value::{CellValue, RowData};
    pub use crate::view_state::{MemoryStore, ViewState, ViewStateStore};

    pub use tokio_util::sync::CancellationToken;
}
