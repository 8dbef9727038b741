//! # Screen Layout
//!
//! Turns state into the styled lines of one frame. Layout knows nothing
//! about the terminal beyond its size; the renderer decides how a
//! [`LineStyle`] looks.

use crate::board::engine::ListView;
use crate::board::events::InputMode;
use crate::board::models::{InteractionLog, Post};
use crate::board::state::{BoardState, DetailState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Body lines shown in the list preview
const PREVIEW_BODY_LINES: usize = 4;
/// Interaction log entries shown under the list
const LOG_TAIL_LINES: usize = 3;

const LIST_HELP: &str =
    "q quit  / search  j/k move  h/l page  1-9/g/G jump  Enter view  d delete";
const SEARCH_HELP: &str = "type to filter  Backspace delete  Ctrl+U clear  Enter/Esc done";
const DETAIL_HELP: &str = "Esc/b back  j/k scroll";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Title,
    Dim,
    Highlight,
}

/// One row of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub style: LineStyle,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Normal)
    }

    pub fn blank() -> Self {
        Self::normal("")
    }
}

/// All lines for the current screen, at most `height` of them
pub fn screen_lines(
    state: &BoardState,
    log: &InteractionLog,
    (width, height): (u16, u16),
) -> Vec<StyledLine> {
    let width = usize::from(width);
    let height = usize::from(height);
    let mut lines = match state.detail() {
        Some(detail) => detail_screen(detail, width, height),
        None => list_screen(state, log, width, height),
    };
    for line in &mut lines {
        line.text = truncate(&line.text, width);
    }
    lines
}

fn list_screen(
    state: &BoardState,
    log: &InteractionLog,
    width: usize,
    height: usize,
) -> Vec<StyledLine> {
    let view = state.list_view();
    let mut lines = Vec::new();

    let title = if state.is_loading_posts() {
        "Posts  Loading posts...".to_string()
    } else {
        format!("Posts  {} of {}", view.filtered_len, view.total_len)
    };
    lines.push(StyledLine::new(title, LineStyle::Title));
    lines.push(search_line(state));
    lines.push(StyledLine::blank());

    if view.items.is_empty() && !state.is_loading_posts() {
        lines.push(StyledLine::new("No posts on this page", LineStyle::Dim));
    }
    for (row, post) in view.items.iter().enumerate() {
        let style = if row == state.cursor_row() && state.input_mode() == InputMode::Browse {
            LineStyle::Highlight
        } else {
            LineStyle::Normal
        };
        lines.push(StyledLine::new(post_row(post), style));
    }

    lines.push(StyledLine::blank());
    lines.push(StyledLine::normal(pagination_line(&view, width)));

    if let Some(post) = state.highlighted_post() {
        lines.push(StyledLine::blank());
        lines.push(StyledLine::new(post.title.clone(), LineStyle::Title));
        lines.extend(
            wrap_text(&post.body, width)
                .into_iter()
                .take(PREVIEW_BODY_LINES)
                .map(StyledLine::normal),
        );
        lines.push(StyledLine::new(preview_footer(post), LineStyle::Dim));
    }

    let tail = log.tail(LOG_TAIL_LINES);
    if !tail.is_empty() {
        lines.push(StyledLine::blank());
        lines.extend(
            tail.iter()
                .map(|entry| StyledLine::new(entry.to_string(), LineStyle::Dim)),
        );
    }

    let help = match state.input_mode() {
        InputMode::Browse => LIST_HELP,
        InputMode::Search => SEARCH_HELP,
    };
    fit_with_footer(lines, StyledLine::new(help, LineStyle::Dim), height)
}

fn search_line(state: &BoardState) -> StyledLine {
    match state.input_mode() {
        InputMode::Search => {
            StyledLine::new(format!("Search: {}_", state.search_term()), LineStyle::Highlight)
        }
        InputMode::Browse if state.search_term().is_empty() => {
            StyledLine::new("Search: (press / to filter)", LineStyle::Dim)
        }
        InputMode::Browse => StyledLine::normal(format!("Search: {}", state.search_term())),
    }
}

/// `id  user  title` row used by both renderers
pub fn post_row(post: &Post) -> String {
    format!("{:>4}  {:>3}  {}", post.id, post.user_id, post.title)
}

/// `Pages: 1 [2] 3`, with the active page bracketed
///
/// When the full line is wider than `width`, only the first page, the last
/// page and a window around the active page are listed, with `...` for the
/// gaps.
pub fn pagination_line(view: &ListView<'_>, width: usize) -> String {
    if view.page_count == 0 {
        return "Pages: none".to_string();
    }
    let suffix = if view.is_past_end() {
        format!("  (page {} is empty)", view.current_page)
    } else {
        String::new()
    };
    let anchor = view.current_page.clamp(1, view.page_count);
    let mut radius = view.page_count;
    loop {
        let line = format!("Pages: {}{}", page_labels(view, anchor, radius), suffix);
        if radius == 0 || line.width() <= width {
            return line;
        }
        radius -= 1;
    }
}

fn page_labels(view: &ListView<'_>, anchor: usize, radius: usize) -> String {
    let mut labels = Vec::new();
    let mut previous = 0;
    for page in 1..=view.page_count {
        let shown = page == 1 || page == view.page_count || page.abs_diff(anchor) <= radius;
        if !shown {
            continue;
        }
        if page > previous + 1 {
            labels.push("...".to_string());
        }
        labels.push(if page == view.current_page {
            format!("[{page}]")
        } else {
            page.to_string()
        });
        previous = page;
    }
    labels.join(" ")
}

pub fn preview_footer(post: &Post) -> String {
    format!(
        "User ID: {} | Post ID: {} | Word Count: {}",
        post.user_id,
        post.id,
        post.word_count()
    )
}

fn detail_screen(detail: &DetailState, width: usize, height: usize) -> Vec<StyledLine> {
    let mut lines = detail_content(detail, width);
    let scroll = detail.scroll().min(scroll_room(lines.len(), height));
    let footer = StyledLine::new(DETAIL_HELP, LineStyle::Dim);
    fit_with_footer(lines.split_off(scroll), footer, height)
}

/// Furthest the detail view can scroll before its last line leaves the
/// bottom of a `(width, height)` terminal
pub fn max_detail_scroll(detail: &DetailState, (width, height): (u16, u16)) -> usize {
    let lines = detail_content(detail, usize::from(width));
    scroll_room(lines.len(), usize::from(height))
}

/// Content lines beyond what fits above the footer
fn scroll_room(content_len: usize, height: usize) -> usize {
    content_len.saturating_sub(height.saturating_sub(1))
}

/// Detail lines before scrolling and the footer
fn detail_content(detail: &DetailState, width: usize) -> Vec<StyledLine> {
    let Some(post) = detail.post() else {
        return vec![StyledLine::new("Loading...", LineStyle::Dim)];
    };

    let mut lines = vec![
        StyledLine::new(format!("Post {}: {}", post.id, post.title), LineStyle::Title),
        StyledLine::new(format!("User ID: {}", post.user_id), LineStyle::Dim),
        StyledLine::blank(),
    ];
    lines.extend(wrap_text(&post.body, width).into_iter().map(StyledLine::normal));
    lines.push(StyledLine::blank());
    lines.push(StyledLine::new("Comments", LineStyle::Title));

    match detail.comments() {
        None => lines.push(StyledLine::new("Loading comments...", LineStyle::Dim)),
        Some([]) => lines.push(StyledLine::new("No comments", LineStyle::Dim)),
        Some(comments) => {
            for comment in comments {
                let text = format!("{} - {}", comment.name, comment.body);
                lines.extend(wrap_text(&text, width).into_iter().map(StyledLine::normal));
            }
        }
    }
    lines
}

/// Keep as many content lines as fit above `footer`
fn fit_with_footer(
    mut lines: Vec<StyledLine>,
    footer: StyledLine,
    height: usize,
) -> Vec<StyledLine> {
    if height == 0 {
        return Vec::new();
    }
    lines.truncate(height - 1);
    lines.push(footer);
    lines
}

/// Cut `text` to at most `width` display columns
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out
}

/// Greedy word wrap to `width` display columns
///
/// Existing line breaks are kept. Words wider than `width` are cut.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word = truncate(word, width);
            if current.is_empty() {
                current = word;
            } else if current.width() + 1 + word.width() <= width {
                current.push(' ');
                current.push_str(&word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word;
            }
        }
        lines.push(current);
    }
    lines
}
