// Listing contract for case information.
//
// Purpose
// - Pagination, ordering and search parameters sent with every listing request.
// - Filter mode selecting which listing operation answers the request.
// - The paginated result shape handed back to callers.
//
// Invariants
// - `limit` is strictly positive once validated.
// - An empty page always reports a total of zero, whatever the backend claimed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("limit must be greater than zero")]
    ZeroLimit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    New,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOption {
    pub offset: u64,
    pub limit: u64,
    pub order: Order,
    pub search: Option<String>,
}

impl Default for QueryOption {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            order: Order::Asc,
            search: None,
        }
    }
}

impl QueryOption {
    pub fn new(offset: u64, limit: u64, order: Order, search: Option<String>) -> Self {
        Self {
            offset,
            limit,
            order,
            search,
        }
        .normalized()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self.normalized()
    }

    /// Collapses a blank search term to `None`.
    pub fn normalized(mut self) -> Self {
        self.search = self
            .search
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());
        self
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        if self.limit == 0 {
            return Err(QueryError::ZeroLimit);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_count: 0,
        }
    }

    /// Builds a page from a backend answer. The reported total is ignored for an empty page and
    /// falls back to the page length when the backend sent none.
    pub fn from_backend(records: Vec<T>, reported_total: Option<i64>) -> Self {
        if records.is_empty() {
            return Self::empty();
        }
        let total_count = reported_total
            .map(|total| total.max(0) as u64)
            .unwrap_or(records.len() as u64);
        Self {
            records,
            total_count,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            records: self.records.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}
