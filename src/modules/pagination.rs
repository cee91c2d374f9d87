/// One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Current page position over a fixed page count. The page count comes from
/// config and is intentionally decoupled from the filtered record count; see
/// DESIGN.md for why the demo constants are preserved.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(total_pages: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages.max(1),
        }
    }

    /// Clamped at page 1; a no-op on the first page.
    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Clamped at the last page; a no-op there.
    pub fn next(&mut self) {
        self.current_page = usize::min(self.current_page + 1, self.total_pages);
    }

    pub fn jump(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    pub fn at_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn at_last(&self) -> bool {
        self.current_page == self.total_pages
    }

    pub fn labels(&self) -> Vec<PageLabel> {
        visible_page_labels(self.current_page, self.total_pages)
    }
}

/// Collapses the page strip into a window of five visible page slots,
/// inserting ellipsis markers around the gaps.
pub fn visible_page_labels(current_page: usize, total_pages: usize) -> Vec<PageLabel> {
    let mut labels = Vec::new();
    if total_pages <= 5 {
        for page in 1..=total_pages {
            labels.push(PageLabel::Page(page));
        }
    } else if current_page <= 3 {
        labels.extend([
            PageLabel::Page(1),
            PageLabel::Page(2),
            PageLabel::Page(3),
            PageLabel::Ellipsis,
            PageLabel::Page(total_pages),
        ]);
    } else if current_page >= total_pages - 2 {
        labels.extend([
            PageLabel::Page(1),
            PageLabel::Ellipsis,
            PageLabel::Page(total_pages - 2),
            PageLabel::Page(total_pages - 1),
            PageLabel::Page(total_pages),
        ]);
    } else {
        labels.extend([
            PageLabel::Page(1),
            PageLabel::Ellipsis,
            PageLabel::Page(current_page - 1),
            PageLabel::Page(current_page),
            PageLabel::Page(current_page + 1),
            PageLabel::Ellipsis,
            PageLabel::Page(total_pages),
        ]);
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(labels: &[PageLabel]) -> Vec<usize> {
        labels
            .iter()
            .filter_map(|l| match l {
                PageLabel::Page(p) => Some(*p),
                PageLabel::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn small_page_counts_emit_the_full_strip() {
        assert_eq!(
            visible_page_labels(2, 4),
            vec![
                PageLabel::Page(1),
                PageLabel::Page(2),
                PageLabel::Page(3),
                PageLabel::Page(4),
            ]
        );
        assert_eq!(visible_page_labels(1, 1), vec![PageLabel::Page(1)]);
    }

    #[test]
    fn leading_window_collapses_the_tail() {
        assert_eq!(
            visible_page_labels(1, 9),
            vec![
                PageLabel::Page(1),
                PageLabel::Page(2),
                PageLabel::Page(3),
                PageLabel::Ellipsis,
                PageLabel::Page(9),
            ]
        );
    }

    #[test]
    fn middle_window_collapses_both_sides() {
        assert_eq!(
            visible_page_labels(5, 9),
            vec![
                PageLabel::Page(1),
                PageLabel::Ellipsis,
                PageLabel::Page(4),
                PageLabel::Page(5),
                PageLabel::Page(6),
                PageLabel::Ellipsis,
                PageLabel::Page(9),
            ]
        );
    }

    #[test]
    fn trailing_window_collapses_the_head() {
        assert_eq!(
            visible_page_labels(9, 9),
            vec![
                PageLabel::Page(1),
                PageLabel::Ellipsis,
                PageLabel::Page(7),
                PageLabel::Page(8),
                PageLabel::Page(9),
            ]
        );
    }

    #[test]
    fn first_and_last_pages_are_always_visible_without_duplicates() {
        for total in 6..=12 {
            for current in 1..=total {
                let labels = visible_page_labels(current, total);
                let ps = pages(&labels);
                assert!(ps.contains(&1), "page 1 missing at {current}/{total}");
                assert!(ps.contains(&total), "page {total} missing at {current}/{total}");
                let mut dedup = ps.clone();
                dedup.sort_unstable();
                dedup.dedup();
                assert_eq!(ps.len(), dedup.len(), "duplicate page at {current}/{total}");
            }
        }
    }

    #[test]
    fn prev_and_next_clamp_at_the_boundaries() {
        let mut p = Pagination::new(9);
        p.prev();
        assert_eq!(p.current_page, 1);
        assert!(p.at_first());

        p.jump(9);
        p.next();
        assert_eq!(p.current_page, 9);
        assert!(p.at_last());
    }

    #[test]
    fn jump_clamps_into_range() {
        let mut p = Pagination::new(9);
        p.jump(40);
        assert_eq!(p.current_page, 9);
        p.jump(0);
        assert_eq!(p.current_page, 1);
        p.jump(5);
        assert_eq!(p.current_page, 5);
    }
}
