// One handler per use case, grouped by domain
pub mod manufacture;
pub mod orders;
pub mod users;

use crate::config;

/// Resolve optional paging parameters into a LIMIT/OFFSET pair, clamped to
/// the configured page-size ceiling. Page numbers are 1-based.
pub(crate) fn paging(page: Option<i64>, page_size: Option<i64>) -> (i64, i64) {
    let api = &config::config().api;

    let page = page.unwrap_or(1).max(1);
    let limit = page_size
        .unwrap_or(api.default_page_size)
        .clamp(1, api.max_page_size);
    // Saturate rather than overflow on absurd page numbers
    let offset = (page - 1).saturating_mul(limit);

    (limit, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_defaults_and_clamps() {
        let api = &config::config().api;

        let (limit, offset) = paging(None, None);
        assert_eq!(limit, api.default_page_size);
        assert_eq!(offset, 0);

        let (limit, _) = paging(Some(1), Some(i64::MAX));
        assert_eq!(limit, api.max_page_size);

        let (limit, offset) = paging(Some(0), Some(0));
        assert_eq!(limit, 1);
        assert_eq!(offset, 0);

        let (limit, offset) = paging(Some(3), Some(10));
        assert_eq!(limit, 10);
        assert_eq!(offset, 20);
    }

    #[test]
    fn paging_saturates_on_huge_page_numbers() {
        let (limit, offset) = paging(Some(i64::MAX), Some(25));
        assert_eq!(limit, 25);
        assert_eq!(offset, i64::MAX);

        let (_, offset) = paging(Some(i64::MAX - 1), None);
        assert!(offset > 0);
    }
}
