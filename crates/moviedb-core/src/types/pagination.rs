//! Pagination types for paged queries.

use serde::{Deserialize, Serialize};

use super::sorting::SortField;

/// A resolved, zero-based page request.
///
/// Values are already normalised; the service layer's page resolver is the
/// only place raw caller input is clamped and defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based).
    pub page: u64,
    /// Number of items per page (at least 1).
    pub size: u64,
    /// Primary ordering. Stores break ties by id ascending.
    pub sort: SortField,
}

impl PageRequest {
    /// Create a new page request. A zero size is raised to 1.
    pub fn new(page: u64, size: u64, sort: SortField) -> Self {
        Self {
            page,
            size: size.max(1),
            sort,
        }
    }

    /// Number of records to skip.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Maximum number of records on the page.
    pub fn limit(&self) -> u64 {
        self.size
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Current page number (0-based).
    pub page: u64,
    /// Requested page size.
    pub size: u64,
    /// Total number of matching items across all pages.
    pub total_elements: u64,
    /// Total number of pages (0 when nothing matched).
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(content: Vec<T>, page: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
            has_next: page.saturating_add(1) < total_pages,
            has_previous: page > 0,
        }
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Transform the page content while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> PageResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PageResponse {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let request = PageRequest::new(3, 25, SortField::natural());
        assert_eq!(request.offset(), 75);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn test_zero_size_is_raised() {
        let request = PageRequest::new(0, 0, SortField::natural());
        assert_eq!(request.size, 1);
    }

    #[test]
    fn test_offset_saturates() {
        let request = PageRequest::new(u64::MAX, 10, SortField::natural());
        assert_eq!(request.offset(), u64::MAX);
    }

    #[test]
    fn test_total_pages() {
        let page: PageResponse<u8> = PageResponse::new(vec![1, 2], 0, 2, 5);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(!page.has_previous);

        let last: PageResponse<u8> = PageResponse::new(vec![5], 2, 2, 5);
        assert!(!last.has_next);
        assert!(last.has_previous);

        let none: PageResponse<u8> = PageResponse::new(Vec::new(), 0, 10, 0);
        assert_eq!(none.total_pages, 0);
        assert!(!none.has_next);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = PageResponse::new(vec![1, 2, 3], 1, 3, 9).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20, 30]);
        assert_eq!(page.total_elements, 9);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 1);
    }
}
