//! Tests for the row/cell renderer.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use pagegrid::prelude::*;

fn cells() -> Vec<CellSpec> {
    vec![
        CellSpec::new("id", "ID").size(CellSize::Fixed(8)),
        CellSpec::new("name", "Name").size(CellSize::Flex(1)),
        CellSpec::new("inserted_at", "Created"),
    ]
}

fn sample_row() -> RowData {
    RowData::new()
        .with("id", 7)
        .with("name", "Ada Lovelace")
        .with("inserted_at", Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap())
}

#[test]
fn test_cells_are_ordered_and_tagged() {
    let renderer = RowRenderer::new();
    let rendered = renderer.render_cells(&sample_row(), "", &[], &cells());

    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[0].name, "id");
    assert_eq!(rendered[0].index, 0);
    assert_eq!(rendered[0].size, CellSize::Fixed(8));
    assert_eq!(rendered[0].content.to_plain_string(), "7");
    assert_eq!(rendered[1].name, "name");
    assert_eq!(rendered[1].index, 1);
    assert_eq!(rendered[1].size, CellSize::Flex(1));
    assert_eq!(rendered[2].index, 2);
}

#[test]
fn test_missing_column_renders_empty() {
    let renderer = RowRenderer::new();
    let row = RowData::new().with("id", 1);
    let rendered = renderer.render_cells(&row, "", &[], &cells());

    assert_eq!(rendered[1].content, CellText::default());
}

#[test]
fn test_filter_highlights_in_scope_columns_only() {
    let renderer = RowRenderer::new();
    let scope = vec!["name".to_string()];
    let row = RowData::new().with("id", 7).with("name", "Ada").with(
        "inserted_at",
        "Ada's anniversary",
    );

    let rendered = renderer.render_cells(&row, "ada", &scope, &cells());

    assert!(rendered[1].content.has_highlight());
    assert!(!rendered[2].content.has_highlight(), "out of search scope");
    assert!(!rendered[0].content.has_highlight());
}

#[test]
fn test_empty_scope_searches_all_columns() {
    let renderer = RowRenderer::new();
    let row = RowData::new().with("id", "ada-1").with("name", "Ada");

    let rendered = renderer.render_cells(&row, "ada", &[], &cells());

    assert!(rendered[0].content.has_highlight());
    assert!(rendered[1].content.has_highlight());
}

#[test]
fn test_date_column_renders_long_form() {
    let renderer = RowRenderer::new().date_column("inserted_at");
    let rendered = renderer.render_cells(&sample_row(), "", &[], &cells());

    assert_eq!(rendered[2].content.to_plain_string(), "January 5, 2026");
}

#[test]
fn test_from_config_adopts_date_column() {
    let config = TableConfig::new("Users").date_column("inserted_at");
    let renderer = RowRenderer::from_config(&config);

    let rendered = renderer.render_cells(&sample_row(), "", &[], &cells());

    assert_eq!(rendered[2].content.to_plain_string(), "January 5, 2026");
}

#[test]
fn test_date_rendering_is_pure() {
    let renderer = RowRenderer::new().date_column("inserted_at");
    let row = sample_row();

    let first = renderer.render_cells(&row, "", &[], &cells());
    let second = renderer.render_cells(&row, "", &[], &cells());

    assert_eq!(first, second);
}

#[test]
fn test_non_date_value_in_date_column_keeps_text() {
    let renderer = RowRenderer::new().date_column("inserted_at");
    let row = RowData::new().with("inserted_at", "unknown");
    let rendered = renderer.render_cells(&row, "", &[], &cells());

    assert_eq!(rendered[2].content.to_plain_string(), "unknown");
}

#[test]
fn test_custom_renderer_binds_by_column_name() {
    let renderer = RowRenderer::new().custom_cell("name", |row, value| {
        let id = row.get("id").map(CellValue::display).unwrap_or_default();
        CellText::plain(format!("{} (#{})", value.to_plain_string(), id))
    });

    let rendered = renderer.render_cells(&sample_row(), "", &[], &cells());

    assert_eq!(rendered[1].content.to_plain_string(), "Ada Lovelace (#7)");
    // Columns without a binding keep the default text presentation.
    assert_eq!(rendered[0].content.to_plain_string(), "7");
}

#[test]
fn test_custom_renderer_receives_computed_value() {
    let renderer = RowRenderer::new().custom_cell("name", |_, value| {
        assert!(value.has_highlight(), "custom renderer sees the highlight");
        value.clone()
    });

    renderer.render_cells(&sample_row(), "ada", &[], &cells());
}

#[test]
fn test_empty_result_set_renders_as_no_results() {
    let renderer = RowRenderer::new();

    assert_eq!(renderer.render_rows(&[], "", &[], &cells()), RenderedRows::Empty);

    let rows = vec![sample_row()];
    match renderer.render_rows(&rows, "", &[], &cells()) {
        RenderedRows::Rows(rendered) => assert_eq!(rendered.len(), 1),
        RenderedRows::Empty => panic!("non-empty result rendered as empty"),
    }
}

#[test]
fn test_row_click_dispatches_when_bound() {
    let clicks: Arc<Mutex<Vec<(String, ClickEvent)>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&clicks);
    let renderer = RowRenderer::new().on_row_click(move |row, event| {
        let name = row.get("name").map(CellValue::display).unwrap_or_default();
        seen.lock().unwrap().push((name, *event));
    });

    renderer.dispatch_row_click(&sample_row(), ClickEvent { x: 3, y: 1 });

    let clicks = clicks.lock().unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].0, "Ada Lovelace");
    assert_eq!(clicks[0].1, ClickEvent { x: 3, y: 1 });
}

#[test]
fn test_row_click_is_noop_when_absent() {
    let renderer = RowRenderer::new();
    renderer.dispatch_row_click(&sample_row(), ClickEvent::default());
}
