//! The external fetch seam.
//!
//! The coordinator never talks to a network layer itself; it builds a
//! [`FetchRequest`] and hands it to whatever [`DataFetcher`] the caller
//! configured. Timeouts and transport concerns live behind that seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::FetchError;
use crate::value::RowData;

/// Parameters derived from the current view state for one fetch attempt.
///
/// `cancel` is the cooperative abort handle for this attempt; the
/// coordinator cancels it when a newer attempt supersedes this one or when
/// the view is dropped.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Columns the filter text applies to; empty means all
    pub columns: Vec<String>,
    /// Page size
    pub limit: u32,
    /// Offset of the first row, `(page - 1) * limit`
    pub offset: u64,
    /// Sort terms in `"column direction"` form
    pub order: Vec<String>,
    /// Search text
    pub filter: String,
    /// Cooperative abort handle for this attempt
    pub cancel: CancellationToken,
}

/// One page of results as reported by the external fetch layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageResult {
    /// Total entry count across all pages
    pub total_entries: u64,
    /// Row count in this page
    pub total_rows: u64,
    /// Total page count
    pub total_pages: u32,
    /// 1-based page this result covers
    pub current_page: u32,
    /// Page size the server applied
    pub limit: u32,
    /// Offset the server applied
    pub offset: u64,
    /// The rows themselves
    pub items: Vec<RowData>,
    /// Server-side query text, debug only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// The external data-fetch callback.
///
/// Implementations are expected to honor `request.cancel` on a best-effort
/// basis; the coordinator does not wait for actual request termination.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Fetch one page of rows for the given request.
    async fn fetch(&self, request: FetchRequest) -> Result<PageResult, FetchError>;
}
