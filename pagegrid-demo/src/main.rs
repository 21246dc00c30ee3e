//! Demo: a searchable, sortable, paginated user table over a simulated API.
//!
//! Drives the coordinator through a scripted set of interactions (filter
//! typed, sort clicked, page-size changed) and prints the rendered cells
//! after each turn, the way an embedding layout component would consume
//! them.

use std::fs::File;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use pagegrid::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const FIRST_NAMES: [&str; 10] = [
    "Ada", "Grace", "Edsger", "Barbara", "Donald", "Alan", "Margaret", "John", "Frances", "Tony",
];
const SURNAMES: [&str; 10] = [
    "Lovelace",
    "Hopper",
    "Dijkstra",
    "Liskov",
    "Knuth",
    "Turing",
    "Hamilton",
    "Backus",
    "Allen",
    "Hoare",
];

/// Simulated server: 200 users, filterable and sortable in memory.
struct UserApi {
    users: Vec<RowData>,
}

impl UserApi {
    fn new() -> Self {
        let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let users = (0..200usize)
            .map(|id| {
                RowData::new()
                    .with("id", id as i64)
                    .with("name", FIRST_NAMES[id % FIRST_NAMES.len()])
                    .with("surname", SURNAMES[(id / 10) % SURNAMES.len()])
                    .with("inserted_at", epoch + ChronoDuration::days(id as i64))
            })
            .collect();
        Self { users }
    }

    fn matches(user: &RowData, columns: &[String], filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let filter = filter.to_lowercase();
        let in_scope = |name: &str| columns.is_empty() || columns.iter().any(|c| c == name);
        ["id", "name", "surname", "inserted_at"]
            .into_iter()
            .filter(|name| in_scope(name))
            .filter_map(|name| user.get(name))
            .any(|value| value.display().to_lowercase().contains(&filter))
    }
}

#[async_trait]
impl DataFetcher for UserApi {
    async fn fetch(&self, request: FetchRequest) -> Result<PageResult, FetchError> {
        tokio::time::sleep(Duration::from_millis(30)).await;
        if request.cancel.is_cancelled() {
            return Err(FetchError::new("request cancelled"));
        }

        let mut matched: Vec<RowData> = self
            .users
            .iter()
            .filter(|user| Self::matches(user, &request.columns, &request.filter))
            .cloned()
            .collect();

        if let Some(term) = request.order.first() {
            let (column, direction) = term.rsplit_once(' ').unwrap_or((term.as_str(), "asc"));
            let column = column.to_string();
            matched.sort_by_key(|user| {
                user.get(&column).map(CellValue::display).unwrap_or_default()
            });
            if direction == "desc" {
                matched.reverse();
            }
        }

        let total_entries = matched.len() as u64;
        let limit = request.limit.max(1);
        let items: Vec<RowData> = matched
            .into_iter()
            .skip(request.offset as usize)
            .take(limit as usize)
            .collect();

        Ok(PageResult {
            total_entries,
            total_rows: items.len() as u64,
            total_pages: total_entries.div_ceil(u64::from(limit)) as u32,
            current_page: (request.offset / u64::from(limit)) as u32 + 1,
            limit,
            offset: request.offset,
            items,
            query: Some(format!(
                "filter={:?} order={:?}",
                request.filter, request.order
            )),
        })
    }
}

/// Re-render only when the rows actually changed since the last turn.
fn print_table(table: &TableCoordinator, renderer: &RowRenderer, heading: &str) {
    if !table.rows().take_dirty() {
        return;
    }

    let options = table.options().get();
    let pagination = table.pagination().get();
    println!(
        "\n== {heading} (page {}/{}, {} total) ==",
        pagination.page,
        pagination.total_items.div_ceil(u64::from(pagination.page_limit)).max(1),
        pagination.total_items
    );

    let rows = table.rows().get();
    match renderer.render_rows(&rows, &options.filter, &options.columns, &table.config().cells) {
        RenderedRows::Empty => println!("  (no results)"),
        RenderedRows::Rows(rendered) => {
            for row in rendered.iter().take(5) {
                let line: Vec<String> = row
                    .cells
                    .iter()
                    .map(|cell| {
                        let text = cell.content.to_plain_string();
                        if cell.content.has_highlight() {
                            format!("*{text}*")
                        } else {
                            text
                        }
                    })
                    .collect();
                println!("  {}", line.join(" | "));
            }
            if rendered.len() > 5 {
                println!("  ... {} more on this page", rendered.len() - 5);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let log_file = File::create("pagegrid-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let table = TableCoordinator::new(
        TableConfig::new("Users")
            .cells(vec![
                CellSpec::new("id", "ID").size(CellSize::Fixed(6)),
                CellSpec::new("name", "Name").size(CellSize::Flex(1)),
                CellSpec::new("surname", "Surname").size(CellSize::Flex(1)),
                CellSpec::new("inserted_at", "Joined"),
            ])
            .filter_columns(vec![
                ColumnFilter::new("All", vec![]),
                ColumnFilter::new("Name", vec!["name".to_string(), "surname".to_string()]),
            ])
            .default_order("id", Direction::Asc)
            .default_limit(15)
            .date_column("inserted_at")
            .fetcher(UserApi::new())
            .on_fetched(|result| log::debug!("fetched {} rows", result.total_rows))
            .on_error(|err| log::error!("table error: {err}")),
    );

    let renderer = RowRenderer::from_config(table.config())
        .custom_cell("id", |_, value| {
            CellText::plain(format!("#{}", value.to_plain_string()))
        })
        .on_row_click(|row, _event| {
            log::info!(
                "row clicked: {}",
                row.get("name").map(CellValue::display).unwrap_or_default()
            );
        });

    table.mount().await;
    print_table(&table, &renderer, "mounted");

    table.change_page(2);
    table.reconcile().await;
    print_table(&table, &renderer, "page 2");

    table.change_search_column(1);
    table.change_filter("ada");
    table.reconcile().await;
    print_table(&table, &renderer, "filter 'ada' on names");

    table.change_order("surname", Direction::Desc);
    table.reconcile().await;
    print_table(&table, &renderer, "sorted by surname desc");

    table.change_filter("no such user");
    table.reconcile().await;
    print_table(&table, &renderer, "filter with no matches");

    table.change_filter("");
    table.change_page_size(50);
    table.reconcile().await;
    print_table(&table, &renderer, "page size 50");

    if let Some(row) = table.rows().get().first() {
        renderer.dispatch_row_click(row, ClickEvent { x: 2, y: 1 });
    }
}
