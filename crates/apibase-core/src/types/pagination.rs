//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_LIMIT: i64 = 10;
/// Maximum page size.
const MAX_LIMIT: i64 = 100;

/// Query parameters for paginated queries.
///
/// Deserialized straight from the request query string; absent parameters
/// fall back to `limit=10`, `page=1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: i64,
}

impl PageQuery {
    /// Create a new page query, clamping out-of-range values.
    pub fn new(limit: i64, page: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            page: page.max(1),
        }
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_LIMIT)
    }

    /// The 1-based page number.
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// The SQL `OFFSET` value: `limit * (page - 1)`.
    pub fn offset(&self) -> i64 {
        self.limit() * (self.page() - 1)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 1,
        }
    }
}

/// Listing envelope returned by list endpoints.
///
/// Deliberately carries no total count; the repository page query does not
/// produce one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Number of items requested per page.
    pub limit: i64,
    /// Current page number (1-based).
    pub page: i64,
}

impl<T> ListResponse<T> {
    /// Wrap one page of items with the query that produced it.
    pub fn new(items: Vec<T>, query: &PageQuery) -> Self {
        Self {
            items,
            limit: query.limit(),
            page: query.page(),
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn default_page() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_zero_offset() {
        let query = PageQuery::new(10, 1);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn second_page_offsets_by_limit() {
        let query = PageQuery::new(10, 2);
        assert_eq!(query.offset(), 10);
    }

    #[test]
    fn defaults_match_handler_contract() {
        let query = PageQuery::default();
        assert_eq!(query.limit(), 10);
        assert_eq!(query.page(), 1);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let query = PageQuery::new(0, 0);
        assert_eq!(query.limit(), 1);
        assert_eq!(query.page(), 1);

        let query = PageQuery::new(1000, 3);
        assert_eq!(query.limit(), 100);
        assert_eq!(query.offset(), 200);
    }

    #[test]
    fn deserializes_with_defaults() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 10);
        assert_eq!(query.page, 1);
    }
}
