//! Windowed page-link computation for the filter result footer.

/// One rendered element of the page-link strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number
    Page(u32),
    /// An ellipsis standing in for a run of pages
    Gap,
}

/// Compute the page-link strip: an anchor to page 1 when the window has
/// drifted away from it (with an ellipsis only when there is an actual
/// gap), a window of up to five pages centered on the current one and
/// clamped to `[1, total_pages]`, and the mirrored anchor to the last
/// page.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut items = Vec::new();

    if current_page > 3 {
        items.push(PageItem::Page(1));
        if current_page > 4 {
            items.push(PageItem::Gap);
        }
    }

    let total = i64::from(total_pages);
    let current = i64::from(current_page);
    let start = (current - 2).min(total - 4).max(1);
    let end = (start + 4).min(total);
    for page in start..=end {
        items.push(PageItem::Page(page as u32));
    }

    if current + 2 < total {
        if current + 3 < total {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(total_pages));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Gap, Page};
    use super::*;

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Gap, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(1),
                Gap,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Gap,
                Page(10)
            ]
        );
    }

    #[test]
    fn near_the_front_there_is_no_gap() {
        // Page 4's window already touches page 1: anchor but no ellipsis.
        assert_eq!(
            page_window(4, 10),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Gap,
                Page(10)
            ]
        );
    }

    #[test]
    fn near_the_back_there_is_no_gap() {
        assert_eq!(
            page_window(7, 10),
            vec![
                Page(1),
                Gap,
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn few_pages_render_without_anchors() {
        assert_eq!(page_window(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(2, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn no_results_means_no_links() {
        assert!(page_window(1, 0).is_empty());
    }
}
