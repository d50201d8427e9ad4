use serde::Serialize;

use crate::types::{SearchFilters, SearchMode};
use crate::validate::ValidatedQuery;

/// Result count requested when no limit is configured.
pub const DEFAULT_LIMIT: usize = 5;

/// A validated search submission, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: ValidatedQuery,
    pub filters: SearchFilters,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(query: ValidatedQuery, filters: SearchFilters) -> Self {
        SearchRequest {
            query,
            filters,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn mode(&self) -> SearchMode {
        self.query.mode()
    }

    /// The JSON body for this submission. Text fields follow the query
    /// variant; inactive filters are omitted entirely.
    pub fn body(&self) -> SearchRequestBody {
        SearchRequestBody {
            mode: self.query.mode(),
            limit: self.limit,
            description: self.query.description().map(str::to_string),
            title: self.query.title().map(str::to_string),
            available: self.filters.available,
            max_price: self.filters.max_price,
            restaurant: self.filters.restaurant.clone(),
        }
    }
}

/// Wire shape POSTed to `/api/search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestBody {
    pub mode: SearchMode,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,
}
