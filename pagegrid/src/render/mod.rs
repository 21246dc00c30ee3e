//! Row and cell rendering.
//!
//! The renderer is stateless: given rows, the search context, and the
//! ordered display spec, it computes per-cell display values and dispatches
//! per column to either a caller-supplied custom renderer (bound by column
//! name) or the default text presentation. The output is plain data for the
//! collaborating layout component; layout and styling never happen here.

mod content;

pub use content::{CellText, Span, highlight};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::cell::{CellSize, CellSpec};
use crate::config::TableConfig;
use crate::value::{CellValue, RowData};

/// Custom per-column renderer: receives the row and the computed display
/// value, returns the content to show.
pub type CellRenderFn = Arc<dyn Fn(&RowData, &CellText) -> CellText + Send + Sync>;

/// Row-click capability, invoked with the row and the click event.
pub type RowClickFn = Arc<dyn Fn(&RowData, &ClickEvent) + Send + Sync>;

/// Position of a click within the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickEvent {
    pub x: u16,
    pub y: u16,
}

/// One rendered cell, tagged for the layout collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    /// Column name
    pub name: String,
    /// Layout hint from the column spec
    pub size: CellSize,
    /// Position within the row, matching display order
    pub index: usize,
    /// Computed display value
    pub content: CellText,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Cells in display order
    pub cells: Vec<RenderedCell>,
}

/// A rendered result set. An empty fetch renders as an explicit
/// no-results state rather than an empty table.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedRows {
    /// The fetch returned no rows
    Empty,
    /// Rows in result order
    Rows(Vec<RenderedRow>),
}

/// Stateless row/cell renderer.
///
/// # Examples
///
/// ```ignore
/// let renderer = RowRenderer::new()
///     .date_column("inserted_at")
///     .custom_cell("status", |row, value| {
///         CellText::plain(format!("[{}]", value.to_plain_string()))
///     })
///     .on_row_click(|row, _event| open_detail(row));
///
/// let rendered = renderer.render_rows(&rows, "ada", &scope, &cells);
/// ```
#[derive(Default)]
pub struct RowRenderer {
    custom: HashMap<String, CellRenderFn>,
    date_column: Option<String>,
    on_row_click: Option<RowClickFn>,
}

impl RowRenderer {
    /// Create a renderer with no custom bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer adopting the table's configuration, so the
    /// designated date column only has to be named once.
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            date_column: config.date_column.clone(),
            ..Self::default()
        }
    }

    /// Bind a custom renderer to a column name.
    pub fn custom_cell(
        mut self,
        name: impl Into<String>,
        render: impl Fn(&RowData, &CellText) -> CellText + Send + Sync + 'static,
    ) -> Self {
        self.custom.insert(name.into(), Arc::new(render));
        self
    }

    /// Designate the column rendered as a long-form date.
    pub fn date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = Some(name.into());
        self
    }

    /// Set the row-click capability.
    pub fn on_row_click(
        mut self,
        callback: impl Fn(&RowData, &ClickEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_row_click = Some(Arc::new(callback));
        self
    }

    /// Render one row's cells in the order of `cells`.
    ///
    /// The filter is applied when the cell is in the search scope (an empty
    /// scope means all columns); the designated date column is reformatted
    /// from the raw timestamp; a custom renderer bound to the column name
    /// wins over the default text presentation.
    pub fn render_cells(
        &self,
        row: &RowData,
        filter: &str,
        search_columns: &[String],
        cells: &[CellSpec],
    ) -> Vec<RenderedCell> {
        cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let raw = row.get(&cell.name).cloned().unwrap_or(CellValue::Null);

                let mut content = if !filter.is_empty() && in_scope(search_columns, &cell.name) {
                    highlight(&raw.display(), filter)
                } else {
                    CellText::plain(raw.display())
                };

                if self.date_column.as_deref() == Some(cell.name.as_str())
                    && let Some(datetime) = raw.as_datetime()
                {
                    content = CellText::plain(format_long_date(&datetime));
                }

                if let Some(render) = self.custom.get(&cell.name) {
                    content = render(row, &content);
                }

                RenderedCell {
                    name: cell.name.clone(),
                    size: cell.size,
                    index,
                    content,
                }
            })
            .collect()
    }

    /// Render a result set, mapping an empty one to [`RenderedRows::Empty`].
    pub fn render_rows(
        &self,
        rows: &[RowData],
        filter: &str,
        search_columns: &[String],
        cells: &[CellSpec],
    ) -> RenderedRows {
        if rows.is_empty() {
            return RenderedRows::Empty;
        }
        RenderedRows::Rows(
            rows.iter()
                .map(|row| RenderedRow {
                    cells: self.render_cells(row, filter, search_columns, cells),
                })
                .collect(),
        )
    }

    /// Dispatch a row click. No-op when no capability was supplied.
    pub fn dispatch_row_click(&self, row: &RowData, event: ClickEvent) {
        if let Some(on_row_click) = &self.on_row_click {
            on_row_click(row, &event);
        }
    }
}

impl fmt::Debug for RowRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound: Vec<&String> = self.custom.keys().collect();
        f.debug_struct("RowRenderer")
            .field("custom", &bound)
            .field("date_column", &self.date_column)
            .field("on_row_click", &self.on_row_click.is_some())
            .finish()
    }
}

fn in_scope(search_columns: &[String], name: &str) -> bool {
    search_columns.is_empty() || search_columns.iter().any(|column| column == name)
}

/// Long-form date presentation, e.g. `"January 5, 2026"`.
pub fn format_long_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%B %-d, %Y").to_string()
}
