//! Pagination view model.
//!
//! Pages are derived from the catalog on every call and never stored, so a
//! page can be shown whether or not details for its members have loaded.

use std::fmt;

/// One page of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub has_more: bool,
    pub range_label: String,
}

/// Slice page `page_index` (1-based) out of `catalog`.
///
/// A page index of zero is treated as the first page. A page past the end
/// is empty and reports `Showing 0-0 of {len}`.
pub fn get_page<T>(catalog: &[T], page_index: usize, page_size: usize) -> Page<'_, T> {
    let page_index = page_index.max(1);
    let page_size = page_size.max(1);
    let len = catalog.len();

    let start = (page_index - 1).saturating_mul(page_size).min(len);
    let end = page_index.saturating_mul(page_size).min(len);
    let items = &catalog[start..end];

    Page {
        items,
        has_more: page_index.saturating_mul(page_size) < len,
        range_label: range_label(start, items.len(), len),
    }
}

fn range_label(start: usize, shown: usize, total: usize) -> String {
    if shown == 0 {
        return format!("Showing 0-0 of {}", total);
    }
    format!("Showing {}-{} of {}", start + 1, start + shown, total)
}

/// Number of pages needed for `len` items; an empty catalog has none.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Current position in a paginated listing.
///
/// Advancing is the only mutation; search and type filter state live with
/// whoever owns the cursor and are never reset by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_index: usize,
    page_size: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    /// Start at `page_index` instead of the first page.
    pub fn at(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index: page_index.max(1),
            ..Self::new(page_size)
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page<'a, T>(&self, catalog: &'a [T]) -> Page<'a, T> {
        get_page(catalog, self.page_index, self.page_size)
    }

    /// Move to the next page. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.page_index += 1;
        self.page_index
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} ({} per page)", self.page_index, self.page_size)
    }
}
