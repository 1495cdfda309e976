//! Pagination types for list endpoints.
//!
//! Callers must supply both `limit` and `page` as positive integers; the
//! request is rejected otherwise rather than silently falling back to a
//! default, since a guessed default produces silently-wrong pages.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Validated request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of items per page (>= 1).
    pub limit: u64,
    /// Page number (1-based).
    pub page: u64,
}

impl PageRequest {
    /// Validate raw query parameters into a page request.
    ///
    /// Both parameters are required and must be strictly positive.
    pub fn from_params(limit: Option<i64>, page: Option<i64>) -> AppResult<Self> {
        let limit = limit.ok_or_else(|| AppError::validation("Query parameter 'limit' is required"))?;
        let page = page.ok_or_else(|| AppError::validation("Query parameter 'page' is required"))?;

        if limit < 1 {
            return Err(AppError::validation(
                "Query parameter 'limit' must be a positive integer",
            ));
        }
        if page < 1 {
            return Err(AppError::validation(
                "Query parameter 'page' must be a positive integer",
            ));
        }

        Ok(Self {
            limit: limit as u64,
            page: page as u64,
        })
    }

    /// Calculate the SQL `OFFSET` value.
    ///
    /// Saturates at `i64::MAX` so the arithmetic cannot overflow and the
    /// bind-site cast to `i64` cannot wrap negative; a saturated offset is
    /// already past the end of any table and yields an empty page.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

/// Paginated response wrapper.
///
/// Serializes to the wire shape `{ totalItems, totalPages, currentPage, data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages (0 when the collection is empty).
    pub total_pages: u64,
    /// Current page number (1-based).
    pub current_page: u64,
    /// The items on this page.
    pub data: Vec<T>,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    ///
    /// `total_pages` is `ceil(total_items / limit)`; an empty collection
    /// yields zero pages. A page beyond the last yields an empty `data`
    /// with totals unchanged.
    pub fn new(data: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(request.limit);
        Self {
            total_items,
            total_pages,
            current_page: request.page,
            data,
        }
    }

    /// Map the items to another type, preserving totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_missing_params() {
        assert!(PageRequest::from_params(None, Some(1)).is_err());
        assert!(PageRequest::from_params(Some(10), None).is_err());
    }

    #[test]
    fn test_rejects_non_positive_params() {
        assert!(PageRequest::from_params(Some(0), Some(1)).is_err());
        assert!(PageRequest::from_params(Some(10), Some(0)).is_err());
        assert!(PageRequest::from_params(Some(-5), Some(1)).is_err());
        assert!(PageRequest::from_params(Some(10), Some(-1)).is_err());
    }

    #[test]
    fn test_offset_arithmetic() {
        let req = PageRequest::from_params(Some(10), Some(1)).unwrap();
        assert_eq!(req.offset(), 0);
        let req = PageRequest::from_params(Some(10), Some(3)).unwrap();
        assert_eq!(req.offset(), 20);
        let req = PageRequest::from_params(Some(7), Some(4)).unwrap();
        assert_eq!(req.offset(), 21);
    }

    #[test]
    fn test_offset_saturates_on_huge_params() {
        let req = PageRequest::from_params(Some(i64::MAX), Some(4)).unwrap();
        assert_eq!(req.offset(), i64::MAX as u64);

        let req = PageRequest::from_params(Some(i64::MAX), Some(i64::MAX)).unwrap();
        assert_eq!(req.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_total_pages_ceiling() {
        let req = PageRequest { limit: 10, page: 1 };
        let resp = PageResponse::new(vec![0u8; 10], &req, 25);
        assert_eq!(resp.total_pages, 3);
        assert_eq!(resp.total_items, 25);
        assert_eq!(resp.current_page, 1);
        assert_eq!(resp.data.len(), 10);
    }

    #[test]
    fn test_page_beyond_range_keeps_totals() {
        let req = PageRequest { limit: 10, page: 4 };
        let resp = PageResponse::new(Vec::<u8>::new(), &req, 25);
        assert_eq!(resp.total_pages, 3);
        assert_eq!(resp.total_items, 25);
        assert_eq!(resp.current_page, 4);
        assert!(resp.data.is_empty());
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let req = PageRequest { limit: 10, page: 1 };
        let resp = PageResponse::new(Vec::<u8>::new(), &req, 0);
        assert_eq!(resp.total_pages, 0);
        assert_eq!(resp.total_items, 0);
    }

    #[test]
    fn test_wire_shape() {
        let req = PageRequest { limit: 2, page: 1 };
        let resp = PageResponse::new(vec![1, 2], &req, 5);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["totalItems"], 5);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }
}
