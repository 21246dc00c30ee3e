//! Displayable cell values and row data.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single displayable value in a row.
///
/// Rows carry loosely-typed server data; the renderer only ever needs a
/// display string plus a date accessor for the designated date column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent or null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Timestamp value (RFC 3339 on the wire)
    DateTime(DateTime<Utc>),
    /// Text value
    Text(String),
}

impl CellValue {
    /// Default text presentation of the value.
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::DateTime(dt) => dt.to_rfc3339(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Get the value as a timestamp, if it is one.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row of fetched data: an unordered mapping from column name to value.
///
/// Only interpreted through its names against [`CellSpec`](crate::cell::CellSpec)
/// entries; unknown names render as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowData(HashMap<String, CellValue>);

impl RowData {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Insert a value under a column name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get the value for a column name.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.0.get(name)
    }
}
