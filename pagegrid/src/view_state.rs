//! Query-string persistence of the current view.
//!
//! The query string is externally-owned persisted state: read once at
//! mount to seed filter/order/columns, written after every successful
//! fetch so the view stays shareable.

use std::sync::RwLock;

use url::form_urlencoded;

/// The shareable portion of the view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Search text, stored under the `search` key
    pub filter: String,
    /// Sort terms, comma-joined under the `order` key
    pub order: Vec<String>,
    /// Search-scope columns, comma-joined under the `columns` key
    pub columns: Vec<String>,
}

impl ViewState {
    /// Encode into an URL query string.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("search", &self.filter)
            .append_pair("order", &self.order.join(","))
            .append_pair("columns", &self.columns.join(","))
            .finish()
    }

    /// Decode from an URL query string. Unknown keys are ignored.
    pub fn decode(query: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "search" => state.filter = value.into_owned(),
                "order" => state.order = split_list(&value),
                "columns" => state.columns = split_list(&value),
                _ => {}
            }
        }
        state
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Backend trait for view-state storage.
///
/// The query string is owned by the embedding environment (a browser
/// location, a settings file, a test buffer); implementations handle the
/// raw string, the coordinator handles encoding.
pub trait ViewStateStore: Send + Sync {
    /// Read the stored query string, if any.
    fn read(&self) -> Option<String>;

    /// Replace the stored query string.
    fn write(&self, query: &str);
}

/// In-memory store, the default when the caller supplies none.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a query string.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Some(query.into())),
        }
    }
}

impl ViewStateStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn write(&self, query: &str) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(query.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_joins_lists_with_commas() {
        let state = ViewState {
            filter: "ada".to_string(),
            order: vec!["name asc".to_string()],
            columns: vec!["name".to_string(), "surname".to_string()],
        };
        let query = state.encode();
        assert!(query.contains("search=ada"));
        assert!(query.contains("order=name+asc"));
        assert!(query.contains("columns=name%2Csurname"));
    }

    #[test]
    fn test_round_trip() {
        let state = ViewState {
            filter: "a b&c".to_string(),
            order: vec!["id desc".to_string()],
            columns: vec!["id".to_string()],
        };
        assert_eq!(ViewState::decode(&state.encode()), state);
    }

    #[test]
    fn test_decode_ignores_unknown_keys_and_empty_lists() {
        let state = ViewState::decode("search=&order=&columns=&page=3");
        assert_eq!(state, ViewState::default());
    }
}
