//! Minimal coordinator loop against a simulated backend.
//!
//! Mounts a table, pages through it, filters, and re-sorts, printing the
//! request the fetcher sees for every state change.

use std::fs::File;
use std::time::Duration;

use async_trait::async_trait;
use log::LevelFilter;
use pagegrid::prelude::*;
use simplelog::{Config, WriteLogger};

const TOTAL_RECORDS: u64 = 150;

struct FakeApi;

#[async_trait]
impl DataFetcher for FakeApi {
    async fn fetch(&self, request: FetchRequest) -> Result<PageResult, FetchError> {
        // Simulate network delay
        tokio::time::sleep(Duration::from_millis(50)).await;
        println!(
            "-> fetch limit={} offset={} order={:?} filter={:?}",
            request.limit, request.offset, request.order, request.filter
        );

        let items: Vec<RowData> = (request.offset..request.offset + u64::from(request.limit))
            .filter(|&id| id < TOTAL_RECORDS)
            .map(|id| {
                RowData::new()
                    .with("id", id as i64)
                    .with("name", format!("Record {id}"))
            })
            .collect();

        Ok(PageResult {
            total_entries: TOTAL_RECORDS,
            total_rows: items.len() as u64,
            items,
            ..PageResult::default()
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("paginated.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let table = TableCoordinator::new(
        TableConfig::new("Records")
            .cells(vec![
                CellSpec::new("id", "ID"),
                CellSpec::new("name", "Name"),
            ])
            .default_order("id", Direction::Asc)
            .default_limit(20)
            .fetcher(FakeApi),
    );

    table.mount().await;
    println!("mounted: {} total records", table.pagination().get().total_items);

    table.change_page(3);
    table.reconcile().await;

    table.change_filter("Record 1");
    table.reconcile().await;

    table.change_order("name", Direction::Desc);
    table.reconcile().await;

    println!("rows on screen: {}", table.rows().get().len());
}
