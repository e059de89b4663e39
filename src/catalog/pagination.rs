//! Fixed-size page slicing.

use crate::config::PageSize;

/// Number of pages needed for `total` items.
#[must_use]
pub const fn total_pages(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

/// The items of 1-based page `page`.
///
/// Page `0` and pages past the end are empty; the caller clamps.
///
/// # Example
///
/// ```rust
/// use catalog_ops::PageSize;
/// use catalog_ops::catalog::paginate;
///
/// let items: Vec<u32> = (1..=7).collect();
/// let size = PageSize::new(3).unwrap();
///
/// assert_eq!(paginate(&items, 3, size), &[7]);
/// assert!(paginate(&items, 4, size).is_empty());
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(size)) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Position of the current page within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current 1-based page.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Items across all pages.
    pub total_items: usize,
    /// Number of pages.
    pub total_pages: usize,
}

impl PageInfo {
    /// Describes page `page` of `total_items` items.
    #[must_use]
    pub const fn new(page: usize, page_size: PageSize, total_items: usize) -> Self {
        Self {
            page,
            page_size: page_size.get(),
            total_items,
            total_pages: total_pages(total_items, page_size),
        }
    }

    /// Returns `true` if a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns `true` if an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// 1-based index of the first item shown, `0` when the page is empty.
    #[must_use]
    pub const fn first_item(&self) -> usize {
        if self.page == 0 || self.page > self.total_pages {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last item shown, `0` when the page is empty.
    #[must_use]
    pub const fn last_item(&self) -> usize {
        if self.first_item() == 0 {
            0
        } else {
            let end = self.page * self.page_size;
            if end < self.total_items {
                end
            } else {
                self.total_items
            }
        }
    }

    /// `page` clamped into `1..=total_pages` (`1` when there are no items).
    #[must_use]
    pub const fn clamped_page(&self) -> usize {
        if self.total_pages == 0 || self.page == 0 {
            1
        } else if self.page > self.total_pages {
            self.total_pages
        } else {
            self.page
        }
    }
}
