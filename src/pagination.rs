//! Windowed pagination index: maps (current page, total pages) to the page
//! numbers and truncation markers a page picker displays.

use serde::{Deserialize, Serialize};

/// One entry in a pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEntry {
    /// A navigable page number
    Page(u32),
    /// A truncation marker standing in for elided pages
    Ellipsis,
}

/// The display sequence for a page picker, plus previous/next enablement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationWindow {
    pub entries: Vec<PageEntry>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Maximum number of pages shown without truncation.
const MAX_VISIBLE_PAGES: u32 = 5;

/// Compute the pagination window for `current_page` out of `total_pages`.
///
/// Pure and total over positive inputs with `current_page <= total_pages`.
/// With five or fewer pages every number is emitted; otherwise the first and
/// last pages always appear, a neighborhood of one page around the current
/// page appears, and each gap is collapsed to a single ellipsis.
pub fn window(current_page: u32, total_pages: u32) -> PaginationWindow {
    let mut entries = Vec::new();

    if total_pages <= MAX_VISIBLE_PAGES {
        for page in 1..=total_pages {
            entries.push(PageEntry::Page(page));
        }
    } else {
        entries.push(PageEntry::Page(1));

        if current_page > 3 {
            entries.push(PageEntry::Ellipsis);
        }

        let low = current_page.saturating_sub(1).max(2);
        let high = (current_page + 1).min(total_pages - 1);
        for page in low..=high {
            entries.push(PageEntry::Page(page));
        }

        if current_page < total_pages - 2 {
            entries.push(PageEntry::Ellipsis);
        }

        entries.push(PageEntry::Page(total_pages));
    }

    PaginationWindow {
        entries,
        prev_enabled: current_page > 1,
        next_enabled: current_page < total_pages,
    }
}
