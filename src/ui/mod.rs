//! Terminal rendering for result pages and the page picker.
//!
//! This is the thin presentation boundary over the pipeline: it consumes
//! [`SearchPage`] and [`PaginationWindow`] and nothing else.

use std::io;

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::terminal_size;

use crate::models::SearchPage;
use crate::pagination::{PageEntry, PaginationWindow};

/// Default width when the terminal size cannot be determined.
const DEFAULT_WIDTH: usize = 100;

fn term_width() -> usize {
    terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Truncate text to fit within `max_width` display columns, appending an
/// ellipsis when truncation occurred. Unicode-aware.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let widths: Vec<(char, usize)> = text
        .chars()
        .map(|c| (c, unicode_width::UnicodeWidthChar::width(c).unwrap_or(1)))
        .collect();
    let total: usize = widths.iter().map(|(_, w)| *w).sum();

    if total <= max_width {
        return text.to_string();
    }

    let mut used = 0;
    let mut end = 0;
    for (i, (_, w)) in widths.iter().enumerate() {
        if used + w > max_width.saturating_sub(3) {
            break;
        }
        used += w;
        end = i + 1;
    }

    if end == 0 {
        return "...".to_string();
    }

    let prefix: String = widths[..end].iter().map(|(c, _)| *c).collect();
    format!("{}...", prefix)
}

/// Print a result page as a table, with a summary line above and the page
/// picker below.
pub fn print_page(page: &SearchPage) {
    let color = io::stdout().is_terminal();

    if color {
        println!("{}", format!("Found {} users", page.total_count).bold());
    } else {
        println!("Found {} users", page.total_count);
    }

    let bio_width = (term_width() / 3).max(20);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "User",
            "Bio",
            "Location",
            "Company",
            "Followers",
            "Language",
        ]);

    for profile in &page.items {
        table.add_row(vec![
            Cell::new(format!("{}\n@{}", profile.display_name(), profile.login)),
            Cell::new(truncate_with_ellipsis(
                profile.bio.as_deref().unwrap_or(""),
                bio_width,
            )),
            Cell::new(profile.location.as_deref().unwrap_or("")),
            Cell::new(profile.company.as_deref().unwrap_or("")),
            Cell::new(profile.followers),
            Cell::new(profile.dominant_language.as_deref().unwrap_or("")),
        ]);
    }

    println!("{}", table);
}

/// Render the page picker line, e.g. `« 1 … 9 [10] 11 … 20 »`.
///
/// The current page is bracketed; the previous/next arrows only appear when
/// enabled.
pub fn render_pager(window: &PaginationWindow, current_page: u32) -> String {
    let mut parts: Vec<String> = Vec::new();

    if window.prev_enabled {
        parts.push("«".to_string());
    }

    for entry in &window.entries {
        match entry {
            PageEntry::Page(n) if *n == current_page => parts.push(format!("[{}]", n)),
            PageEntry::Page(n) => parts.push(n.to_string()),
            PageEntry::Ellipsis => parts.push("…".to_string()),
        }
    }

    if window.next_enabled {
        parts.push("»".to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::window;

    #[test]
    fn test_truncate_short_text_is_unchanged() {
        assert_eq!(truncate_with_ellipsis("Hi", 8), "Hi");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_pager_middle_page() {
        let w = window(10, 20);
        assert_eq!(render_pager(&w, 10), "« 1 … 9 [10] 11 … 20 »");
    }

    #[test]
    fn test_pager_first_page_hides_prev() {
        let w = window(1, 20);
        assert_eq!(render_pager(&w, 1), "[1] 2 … 20 »");
    }

    #[test]
    fn test_pager_last_page_hides_next() {
        let w = window(20, 20);
        assert_eq!(render_pager(&w, 20), "« 1 … 19 [20]");
    }
}
