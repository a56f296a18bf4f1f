use serde::Serialize;

/// Page size used by list screens unless a caller overrides it.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page request applied to repository list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Requested page, 1-based.
    pub page: usize,
    /// Number of records per page.
    pub per_page: usize,
}

/// One page of records together with the totals describing the full set.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wrap a page of records, deriving `total_pages` from `total`.
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = total.div_ceil(per_page.max(1));
        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_of_total_over_per_page() {
        let page = Paginated::new(vec![1, 2, 3], 1, 10, 27);
        assert_eq!(page.total_pages, 3);

        let page = Paginated::new(vec![1], 3, 10, 30);
        assert_eq!(page.total_pages, 3);

        let page = Paginated::new(Vec::<i32>::new(), 1, 10, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn zero_per_page_does_not_divide_by_zero() {
        let page = Paginated::new(Vec::<i32>::new(), 1, 0, 5);
        assert_eq!(page.total_pages, 5);
    }
}
