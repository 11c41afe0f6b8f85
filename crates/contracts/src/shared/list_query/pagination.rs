/// Number of page buttons shown around the current page
pub const DEFAULT_WINDOW_SIZE: u32 = 3;

/// One control in the page strip between "Previous" and "Next"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, current: bool },
    Ellipsis,
}

/// Page-number strip: a contiguous window around the current page, plus
/// the first and last page as anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationWindow {
    pub items: Vec<PageItem>,
    pub current_page: u32,
    pub total_pages: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationWindow {
    pub fn compute(current_page: u32, total_pages: u32, window_size: u32) -> Self {
        let total = total_pages.max(1);
        let current = current_page.clamp(1, total);
        let window = window_size.clamp(1, total);

        let mut start = current.saturating_sub(window.min(2) - 1).max(1);
        let end = start.saturating_add(window - 1).min(total);
        if end - start < window - 1 {
            start = end.saturating_sub(window - 1).max(1);
        }

        let mut items = Vec::with_capacity(window as usize + 4);
        if start > 1 {
            items.push(PageItem::Page {
                number: 1,
                current: false,
            });
            if start > 2 {
                items.push(PageItem::Ellipsis);
            }
        }
        for number in start..=end {
            items.push(PageItem::Page {
                number,
                current: number == current,
            });
        }
        if end < total {
            if end < total - 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page {
                number: total,
                current: false,
            });
        }

        Self {
            items,
            current_page: current,
            total_pages: total,
            previous_enabled: current > 1,
            next_enabled: current < total,
        }
    }

    /// Page numbers in display order, anchors included
    pub fn pages(&self) -> Vec<u32> {
        self.items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    pub fn ellipsis_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, PageItem::Ellipsis))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page_shows_both_anchors() {
        let window = PaginationWindow::compute(5, 10, 3);
        assert_eq!(
            window.items,
            vec![
                PageItem::Page { number: 1, current: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 4, current: false },
                PageItem::Page { number: 5, current: true },
                PageItem::Page { number: 6, current: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 10, current: false },
            ]
        );
        assert!(window.previous_enabled);
        assert!(window.next_enabled);
    }

    #[test]
    fn test_first_page_disables_previous() {
        let window = PaginationWindow::compute(1, 10, 3);
        assert_eq!(window.pages(), vec![1, 2, 3, 10]);
        assert_eq!(window.ellipsis_count(), 1);
        assert!(!window.previous_enabled);
        assert!(window.next_enabled);
    }

    #[test]
    fn test_last_page_shifts_window_back() {
        let window = PaginationWindow::compute(10, 10, 3);
        assert_eq!(window.pages(), vec![1, 8, 9, 10]);
        assert!(window.previous_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn test_adjacent_anchor_has_no_ellipsis() {
        let window = PaginationWindow::compute(3, 5, 3);
        assert_eq!(window.pages(), vec![1, 2, 3, 4, 5]);
        assert_eq!(window.ellipsis_count(), 0);
    }

    #[test]
    fn test_single_page() {
        let window = PaginationWindow::compute(1, 1, 3);
        assert_eq!(window.pages(), vec![1]);
        assert!(!window.previous_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn test_zero_total_and_out_of_range_current() {
        assert_eq!(PaginationWindow::compute(4, 0, 3).pages(), vec![1]);
        let window = PaginationWindow::compute(99, 4, 3);
        assert_eq!(window.current_page, 4);
        assert_eq!(window.pages(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_window_invariants_hold_everywhere() {
        for window_size in 1..=5 {
            for total in 1..=12 {
                for current in 1..=total {
                    let window = PaginationWindow::compute(current, total, window_size);
                    let pages = window.pages();
                    assert!(pages.contains(&current), "{current}/{total} w{window_size}");
                    assert!(pages.iter().all(|p| *p >= 1 && *p <= total));
                    assert!(pages.len() as u32 <= window_size + 2);
                    assert!(pages.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }

    #[test]
    fn test_oversized_window_is_bounded_by_total() {
        let window = PaginationWindow::compute(5, 10, u32::MAX);
        assert_eq!(window.pages(), (1..=10).collect::<Vec<_>>());
        assert_eq!(window.ellipsis_count(), 0);
        assert!(window.items.capacity() < 64);

        let window = PaginationWindow::compute(u32::MAX, u32::MAX, 3);
        assert_eq!(window.pages(), vec![1, u32::MAX - 2, u32::MAX - 1, u32::MAX]);
    }
}
