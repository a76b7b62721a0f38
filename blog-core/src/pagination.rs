use url::Url;

use crate::model::Page;

/// The API never transmits its page size, so totals are computed from a
/// guess: the length of the page just received, or this when it was empty.
pub const DEFAULT_PAGE_SIZE: usize = 6;

impl<T> Page<T> {
    /// Page-size approximation for total-page math; see [`DEFAULT_PAGE_SIZE`].
    pub fn page_size_guess(&self) -> usize {
        if self.results.is_empty() {
            DEFAULT_PAGE_SIZE
        } else {
            self.results.len()
        }
    }
}

/// `ceil(count / page_size)`, clamped to at least one page.
pub fn total_pages(count: u64, page_size: usize) -> u32 {
    let size = page_size.max(1) as u64;
    count.max(1).div_ceil(size).max(1) as u32
}

/// Up to 10 consecutive page numbers with the current page near the middle,
/// clamped so the window never leaves `[1, total]`.
pub fn page_window(page: u32, total: u32) -> Vec<u32> {
    let show = total.min(10);
    let start = (i64::from(page) - 2)
        .min(i64::from(total) - i64::from(show) + 1)
        .max(1) as u32;
    (start..start + show).collect()
}

/// Reads the page number out of an API-provided next/previous URL. A URL
/// without a `page` parameter is the first page; a URL that does not parse,
/// or a non-positive page, yields `None` (the affordance stays disabled).
pub fn page_from_url(raw: &str) -> Option<u32> {
    let url = Url::parse(raw).ok()?;
    match url.query_pairs().find(|(key, _)| key == "page") {
        None => Some(1),
        Some((_, value)) => value.parse().ok().filter(|page| *page >= 1),
    }
}

/// Everything the pagination controls need for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
    pub window: Vec<u32>,
    pub previous: Option<u32>,
    pub next: Option<u32>,
}

impl Pagination {
    pub fn compute<T>(page: &Page<T>, current: u32, page_size: usize) -> Self {
        let total = total_pages(page.count, page_size);
        Self {
            current,
            total,
            window: page_window(current, total),
            previous: page.previous.as_deref().and_then(page_from_url),
            next: page.next.as_deref().and_then(page_from_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn window_is_ten_wide_and_contains_the_current_page() {
        let total = total_pages(100, 6);
        assert_eq!(total, 17);
        let window = page_window(5, total);
        assert_eq!(window, (3..=12).collect::<Vec<u32>>());
        assert!(window.contains(&5));
        assert!(window.iter().all(|page| (1..=total).contains(page)));
    }

    #[test]
    fn zero_count_clamps_to_one_page() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn window_clamps_at_both_ends() {
        assert_eq!(page_window(17, 17), (8..=17).collect::<Vec<u32>>());
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 40), (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn page_from_url_reads_the_page_param() {
        assert_eq!(page_from_url("http://api.example.com/posts/?page=3"), Some(3));
    }

    #[test]
    fn page_from_url_without_param_is_the_first_page() {
        assert_eq!(page_from_url("http://api.example.com/posts/"), Some(1));
    }

    #[test]
    fn page_from_url_rejects_garbage() {
        assert_eq!(page_from_url("not a url"), None);
        assert_eq!(page_from_url("http://api.example.com/posts/?page=x"), None);
        assert_eq!(page_from_url("http://api.example.com/posts/?page=0"), None);
    }

    #[test]
    fn compute_pulls_neighbours_from_api_urls() {
        let page: Page<Value> = Page {
            results: vec![],
            count: 100,
            next: Some("http://api.example.com/posts/?page=6".into()),
            previous: Some("http://api.example.com/posts/".into()),
        };
        let pagination = Pagination::compute(&page, 5, 6);
        assert_eq!(pagination.total, 17);
        assert_eq!(pagination.next, Some(6));
        assert_eq!(pagination.previous, Some(1));
    }

    #[test]
    fn empty_page_disables_both_neighbours() {
        let page = Page::from_value(json!({
            "results": [],
            "count": 0,
            "next": null,
            "previous": null,
        }));
        assert_eq!(page.page_size_guess(), DEFAULT_PAGE_SIZE);
        let pagination = Pagination::compute(&page, 1, page.page_size_guess());
        assert_eq!(pagination.total, 1);
        assert_eq!(pagination.window, vec![1]);
        assert!(pagination.previous.is_none());
        assert!(pagination.next.is_none());
    }
}
