//! Plain-text rendering for `--print` and non-terminal output.

use crate::board::engine::ListView;
use crate::board::views::layout::{pagination_line, post_row, preview_footer};

/// One page of posts as text, one post per line followed by its metadata
pub fn format_page(view: &ListView<'_>) -> String {
    let mut out = format!(
        "Posts  {} of {}  (page {} of {})\n",
        view.filtered_len, view.total_len, view.current_page, view.page_count
    );
    if view.items.is_empty() {
        out.push_str("No posts on this page\n");
    }
    for post in &view.items {
        out.push_str(&format!("{}\n      {}\n", post_row(post), preview_footer(post)));
    }
    // Printed output is not cut to a terminal, so every page is listed
    out.push_str(&pagination_line(view, usize::MAX));
    out.push('\n');
    out
}
