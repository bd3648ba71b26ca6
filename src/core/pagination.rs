//! List pagination: the `skip`/`limit` query contract, the `metadados`
//! envelope and the hard result ceiling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hard ceiling on documents returned by any list, filter or aggregation
/// call, applied after `skip`/`limit`. A `limit` above 100 silently
/// yields at most 100 rows.
pub const MAX_RESULTS: usize = 100;

/// `skip`/`limit` query parameters, with the defaults every list
/// endpoint shares.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub skip: u64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

impl Pagination {
    pub fn new(skip: u64, limit: i64) -> Self {
        Self { skip, limit }
    }

    /// 1-based page number, `skip / limit + 1`. A non-positive `limit`
    /// yields page 0 (no division).
    pub fn page(&self) -> u64 {
        if self.limit <= 0 {
            0
        } else {
            self.skip / self.limit as u64 + 1
        }
    }
}

pub(crate) fn default_limit() -> i64 {
    Pagination::default().limit
}

/// The `metadados` block returned next to every paginated listing.
#[derive(Debug, Serialize)]
pub struct Metadados {
    pub total: u64,
    pub skip: u64,
    pub limit: i64,
    pub page: u64,
}

impl Metadados {
    /// `total` is the full collection count, independent of `skip`/`limit`.
    pub fn new(total: u64, pagination: &Pagination) -> Self {
        Self {
            total,
            skip: pagination.skip,
            limit: pagination.limit,
            page: pagination.page(),
        }
    }
}

/// `{data, metadados}`, the list endpoint envelope.
#[derive(Debug, Serialize)]
pub struct PagedResponse {
    pub data: Vec<Value>,
    pub metadados: Metadados,
}

/// `{data}`, the envelope of filter and reporting endpoints, no
/// metadata.
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub data: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(Pagination::default().page(), 1);
    }

    #[test]
    fn page_is_one_based_integer_division() {
        assert_eq!(Pagination::new(0, 10).page(), 1);
        assert_eq!(Pagination::new(9, 10).page(), 1);
        assert_eq!(Pagination::new(10, 10).page(), 2);
        assert_eq!(Pagination::new(25, 10).page(), 3);
    }

    #[test]
    fn zero_limit_yields_page_zero() {
        assert_eq!(Pagination::new(0, 0).page(), 0);
        assert_eq!(Pagination::new(50, 0).page(), 0);
    }

    #[test]
    fn metadados_echoes_query_and_total() {
        let metadados = Metadados::new(42, &Pagination::new(20, 10));

        let value = serde_json::to_value(&metadados).unwrap();
        assert_eq!(
            value,
            json!({"total": 42, "skip": 20, "limit": 10, "page": 3})
        );
    }

    #[test]
    fn missing_params_take_defaults() {
        let pagination: Pagination = serde_json::from_value(json!({})).unwrap();
        assert_eq!(pagination.skip, 0);
        assert_eq!(pagination.limit, 10);
    }

    #[test]
    fn paged_response_serializes_both_keys() {
        let response = PagedResponse {
            data: vec![],
            metadados: Metadados::new(0, &Pagination::default()),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"data": [], "metadados": {"total": 0, "skip": 0, "limit": 10, "page": 1}})
        );
    }
}
