//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Ordering of list results by id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Anything other than `asc` (case-insensitive) sorts descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

/// Raw pagination query parameters as sent by clients.
///
/// Values are kept unclamped here; [`PageRequest::from`] normalizes them.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, 1-indexed (values below 1 are treated as 1)
    pub page: Option<i64>,
    /// Items per page, 1..=100 (anything else falls back to 20)
    pub page_size: Option<i64>,
    /// `asc` or `desc` (default)
    pub sort: Option<String>,
}

/// Normalized page request handed to services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
    pub sort: SortDirection,
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>, sort: SortDirection) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u64,
            _ => DEFAULT_PAGE_NUMBER,
        };
        let page_size = match page_size {
            Some(s) if s >= 1 && s as u64 <= MAX_PAGE_SIZE => s as u64,
            _ => DEFAULT_PAGE_SIZE,
        };

        Self {
            page,
            page_size,
            sort,
        }
    }

    /// Zero-based page index, as expected by SeaORM paginators
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, SortDirection::default())
    }
}

impl From<&PaginationParams> for PageRequest {
    fn from(params: &PaginationParams) -> Self {
        Self::new(
            params.page,
            params.page_size,
            SortDirection::parse(params.sort.as_deref()),
        )
    }
}

/// Paginated result wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.page_size);

        Self {
            data,
            meta: PaginationMeta {
                page: request.page,
                page_size: request.page_size,
                total,
                total_pages,
            },
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_below_one_is_first_page() {
        assert_eq!(PageRequest::new(Some(0), None, SortDirection::Desc).page, 1);
        assert_eq!(PageRequest::new(Some(-4), None, SortDirection::Desc).page, 1);
    }

    #[test]
    fn test_out_of_range_page_size_uses_default() {
        assert_eq!(PageRequest::new(None, Some(0), SortDirection::Desc).page_size, 20);
        assert_eq!(PageRequest::new(None, Some(500), SortDirection::Desc).page_size, 20);
        assert_eq!(PageRequest::new(None, Some(100), SortDirection::Desc).page_size, 100);
        assert_eq!(PageRequest::new(None, Some(1), SortDirection::Desc).page_size, 1);
    }

    #[test]
    fn test_sort_defaults_to_desc() {
        assert_eq!(SortDirection::parse(None), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("ASC")), SortDirection::Asc);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Paginated::new(vec![1, 2], PageRequest::new(Some(1), Some(2), SortDirection::Asc), 5);
        assert_eq!(page.meta.total_pages, 3);

        let empty: Paginated<i32> = Paginated::new(vec![], PageRequest::default(), 0);
        assert_eq!(empty.meta.total_pages, 0);
    }
}
