//! Static per-column display and sort configuration.

/// Layout hint for a column, opaque to the coordinator and renderer.
///
/// Passed through on every rendered cell for the collaborating layout
/// component to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellSize {
    /// Size to content
    #[default]
    Auto,
    /// Fixed width in terminal columns
    Fixed(u16),
    /// Weighted share of the remaining width
    Flex(u16),
}

/// Per-column display configuration.
///
/// `name` is the unique key into row data and into custom-renderer
/// bindings; `order_name` is the sort key sent to the server.
///
/// # Examples
///
/// ```ignore
/// let cells = vec![
///     CellSpec::new("id", "ID").size(CellSize::Fixed(8)),
///     CellSpec::new("name", "Name").size(CellSize::Flex(1)),
///     CellSpec::new("created_at", "Created").order_name("inserted_at"),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CellSpec {
    /// Unique key into row data and custom-renderer bindings
    pub name: String,
    /// Header label
    pub title: String,
    /// Sort key sent to the server, defaults to `name`
    pub order_name: String,
    /// Layout hint
    pub size: CellSize,
}

impl CellSpec {
    /// Create a column spec; the sort key defaults to `name`.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            order_name: name.clone(),
            name,
            title: title.into(),
            size: CellSize::Auto,
        }
    }

    /// Set the sort key sent to the server.
    pub fn order_name(mut self, order_name: impl Into<String>) -> Self {
        self.order_name = order_name.into();
        self
    }

    /// Set the layout hint.
    pub fn size(mut self, size: CellSize) -> Self {
        self.size = size;
        self
    }
}
