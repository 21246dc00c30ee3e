//! The pagination/fetch coordinator.
//!
//! Owns table options, pagination state, the loading flag, and the
//! cancellation token for the in-flight fetch. Setters only mutate state;
//! [`reconcile`](TableCoordinator::reconcile) is the sole refetch trigger:
//! it snapshots the watched fields into a [`FetchKey`] and fetches when the
//! snapshot differs from the last reconciled one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::config::TableConfig;
use crate::error::TableError;
use crate::fetch::FetchRequest;
use crate::options::{Direction, FetchKey, PaginationState, TableOptions, order_term};
use crate::state::State;
use crate::value::RowData;
use crate::view_state::ViewState;

/// State and fetch orchestration for one table view.
///
/// # Usage
///
/// ```ignore
/// let table = TableCoordinator::new(config);
/// table.mount().await;                       // seed from query string, initial fetch
///
/// table.change_filter("ada");                // user typed
/// table.change_order("name", Direction::Asc); // user clicked a header
/// table.reconcile().await;                   // end of the event-loop turn
/// ```
pub struct TableCoordinator {
    config: TableConfig,
    options: State<TableOptions>,
    pagination: State<PaginationState>,
    selected_filter_column: State<usize>,
    loading: State<bool>,
    rows: State<Vec<RowData>>,
    cancel: Mutex<Option<CancellationToken>>,
    seq: AtomicU64,
    last_key: Mutex<Option<FetchKey>>,
}

impl TableCoordinator {
    /// Create a coordinator from its configuration.
    pub fn new(config: TableConfig) -> Self {
        let options = TableOptions {
            title: config.title.clone(),
            columns: Vec::new(),
            filter: String::new(),
            order: config.default_order.clone(),
        };
        let pagination = PaginationState::new(config.default_limit.max(1));
        Self {
            config,
            options: State::new(options),
            pagination: State::new(pagination),
            selected_filter_column: State::new(0),
            loading: State::new(false),
            rows: State::new(Vec::new()),
            cancel: Mutex::new(None),
            seq: AtomicU64::new(0),
            last_key: Mutex::new(None),
        }
    }

    /// The configuration this coordinator was built from.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Current search/sort/scope state.
    pub fn options(&self) -> &State<TableOptions> {
        &self.options
    }

    /// Current page/page-size/total state.
    pub fn pagination(&self) -> &State<PaginationState> {
        &self.pagination
    }

    /// Index of the selected search-scope choice.
    pub fn selected_filter_column(&self) -> &State<usize> {
        &self.selected_filter_column
    }

    /// Whether a fetch is in flight.
    pub fn loading(&self) -> &State<bool> {
        &self.loading
    }

    /// The most recently fetched rows.
    pub fn rows(&self) -> &State<Vec<RowData>> {
        &self.rows
    }

    // -------------------------------------------------------------------------
    // User-interaction setters. None of these fetch; reconcile() does.
    // -------------------------------------------------------------------------

    /// Change the page size, clamping the current page to the new maximum.
    ///
    /// The maximum is the integer floor of `total_items / new_limit`,
    /// raised to 1 so `page >= 1` always holds.
    pub fn change_page_size(&self, new_limit: u32) {
        if new_limit == 0 {
            warn!("ignoring page size 0");
            return;
        }
        self.pagination.update(|pagination| {
            let max_page = pagination.max_page(new_limit);
            if pagination.page > max_page {
                pagination.page = max_page;
            }
            pagination.page_limit = new_limit;
        });
    }

    /// Change the current page. Bounds are the pagination UI's concern;
    /// no validation happens here.
    pub fn change_page(&self, page: u32) {
        self.pagination.update(|pagination| pagination.page = page);
    }

    /// Change the search text, stored verbatim.
    pub fn change_filter(&self, filter: impl Into<String>) {
        let filter = filter.into();
        self.options.update(|options| options.filter = filter);
    }

    /// Select a search-scope choice by index.
    ///
    /// The active search-columns scope becomes a copy of the choice's value
    /// list, so later mutation never aliases the configuration.
    pub fn change_search_column(&self, index: usize) {
        match self.config.filter_columns.get(index) {
            Some(choice) => {
                let columns = choice.value.clone();
                self.selected_filter_column.set(index);
                self.options.update(|options| options.columns = columns);
            }
            None => warn!("search column index {index} out of range"),
        }
    }

    /// Replace the sort with a single order term and reset to page 1.
    ///
    /// Multi-column sort is not supported at this layer, and changing the
    /// sort invalidates the current page position.
    pub fn change_order(&self, name: &str, direction: Direction) {
        let term = order_term(name, direction);
        self.options.update(|options| options.order = vec![term]);
        self.pagination.update(|pagination| pagination.page = 1);
    }

    // -------------------------------------------------------------------------
    // Fetch orchestration
    // -------------------------------------------------------------------------

    /// Fetch the current page from the configured fetcher.
    ///
    /// Cancels any in-flight attempt first, so at most one attempt is ever
    /// current. Each attempt carries a sequence number; an attempt that is
    /// no longer the latest when its result arrives is discarded without
    /// touching state.
    pub async fn fetch(&self) {
        let options = self.options.get();
        let pagination = self.pagination.get();
        let offset = pagination.offset();

        let token = CancellationToken::new();
        if let Some(previous) = self.lock_cancel().replace(token.clone()) {
            previous.cancel();
        }
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        self.loading.set(true);

        let Some(fetcher) = self.config.fetcher.clone() else {
            self.report(&TableError::MissingFetcher);
            self.loading.set(false);
            return;
        };

        let request = FetchRequest {
            columns: options.columns.clone(),
            limit: pagination.page_limit,
            offset,
            order: options.order.clone(),
            filter: options.filter.clone(),
            cancel: token,
        };
        debug!(
            "fetching page {} (limit {}, offset {})",
            pagination.page, pagination.page_limit, offset
        );

        let outcome = fetcher.fetch(request).await;

        if self.seq.load(Ordering::SeqCst) != seq {
            debug!("discarding superseded fetch #{seq}");
            return;
        }

        match outcome {
            Ok(result) => {
                let total_entries = result.total_entries;
                self.pagination
                    .update(|pagination| pagination.total_items = total_entries);
                self.rows.set(result.items.clone());

                let view = ViewState {
                    filter: options.filter,
                    order: options.order,
                    columns: options.columns,
                };
                self.config.store.write(&view.encode());

                if let Some(on_fetched) = &self.config.on_fetched {
                    on_fetched(&result);
                }
            }
            Err(err) => self.report(&TableError::Fetch(err)),
        }

        self.loading.set(false);
    }

    /// Compare the watched fields against the last reconciled snapshot and
    /// fetch when anything differs. The first call always fetches.
    pub async fn reconcile(&self) {
        let key = self.fetch_key();
        let changed = {
            let mut guard = self
                .last_key
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if guard.as_ref() == Some(&key) {
                false
            } else {
                *guard = Some(key);
                true
            }
        };
        if changed {
            self.fetch().await;
        }
    }

    /// Seed filter/order/columns from the stored query string, then run the
    /// initial reconcile (which always fetches once).
    pub async fn mount(&self) {
        if let Some(query) = self.config.store.read() {
            let view = ViewState::decode(&query);
            self.options.update(|options| {
                if !view.filter.is_empty() {
                    options.filter = view.filter.clone();
                }
                if !view.order.is_empty() {
                    options.order = view.order.clone();
                }
                if !view.columns.is_empty() {
                    options.columns = view.columns.clone();
                }
            });
        }
        self.reconcile().await;
    }

    /// Cancel any in-flight fetch. Called automatically on drop.
    pub fn close(&self) {
        if let Some(token) = self.lock_cancel().take() {
            token.cancel();
        }
    }

    fn fetch_key(&self) -> FetchKey {
        let options = self.options.get();
        let pagination = self.pagination.get();
        FetchKey {
            columns: options.columns,
            order: options.order,
            filter: options.filter,
            page: pagination.page,
            page_limit: pagination.page_limit,
        }
    }

    fn lock_cancel(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.cancel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn report(&self, err: &TableError) {
        match &self.config.on_error {
            Some(on_error) => on_error(err),
            None => error!("{err}"),
        }
    }
}

impl Drop for TableCoordinator {
    fn drop(&mut self) {
        self.close();
    }
}
