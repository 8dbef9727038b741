//! # Board State
//!
//! The whole application state as one record, and the single `update`
//! function that moves it forward. `update` is pure: it never performs I/O.
//! Anything with a side effect (fetching, recording an interaction,
//! quitting) is returned as an [`Effect`] for the controller to run.
//!
//! ```text
//!   key press ──▶ Command ──┐
//!                           ├──▶ Message ──▶ update(state) ──▶ (state', effects)
//!   fetch task ─────────────┘                                        │
//!        ▲                                                           │
//!        └────────────── controller runs effects ◀───────────────────┘
//! ```

use crate::board::engine::{self, ListView};
use crate::board::events::{Direction, InputMode, Message, Screen};
use crate::board::models::{Comment, Post, PostId};
use crate::board::views::layout;
use std::num::NonZeroUsize;

/// Terminal size assumed until the controller reports the real one
const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full post collection
    FetchPosts,
    /// Fetch one post, then its comments, for the detail view `ticket`
    FetchDetail { post_id: PostId, ticket: u64 },
    /// Append a message to the interaction log
    RecordInteraction(String),
    /// Stop the event loop
    Quit,
}

/// State of an open detail view
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    post_id: PostId,
    ticket: u64,
    post: Option<Post>,
    comments: Option<Vec<Comment>>,
    scroll: usize,
}

impl DetailState {
    fn loading(post_id: PostId, ticket: u64) -> Self {
        Self {
            post_id,
            ticket,
            post: None,
            comments: None,
            scroll: 0,
        }
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Generation number; completions for other tickets are dropped
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// `None` while the post request is outstanding (or failed)
    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    /// `None` while the comments request is outstanding (or failed)
    pub fn comments(&self) -> Option<&[Comment]> {
        self.comments.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.post.is_none()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn clamp_scroll(&mut self, viewport: (u16, u16)) {
        self.scroll = self.scroll.min(layout::max_detail_scroll(self, viewport));
    }
}

/// Everything the application knows at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    posts: Vec<Post>,
    posts_loading: bool,
    search_term: String,
    current_page: usize,
    input_mode: InputMode,
    cursor_row: usize,
    detail: Option<DetailState>,
    items_per_page: NonZeroUsize,
    next_ticket: u64,
    viewport: (u16, u16),
}

impl BoardState {
    /// Empty state on page 1 with nothing selected
    pub fn new(items_per_page: NonZeroUsize) -> Self {
        Self {
            posts: Vec::new(),
            posts_loading: false,
            search_term: String::new(),
            current_page: 1,
            input_mode: InputMode::Browse,
            cursor_row: 0,
            detail: None,
            items_per_page,
            next_ticket: 1,
            viewport: DEFAULT_VIEWPORT,
        }
    }

    /// Startup state plus the effects that load the post list
    pub fn init(items_per_page: NonZeroUsize) -> (Self, Vec<Effect>) {
        let mut state = Self::new(items_per_page);
        state.posts_loading = true;
        let effects = vec![
            Effect::RecordInteraction("Loading the post list".to_string()),
            Effect::FetchPosts,
        ];
        (state, effects)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading_posts(&self) -> bool {
        self.posts_loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn items_per_page(&self) -> NonZeroUsize {
        self.items_per_page
    }

    /// Terminal size the detail scroll is bounded against
    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    /// Post shown in the detail view; `None` means the list is shown
    pub fn selected_post_id(&self) -> Option<PostId> {
        self.detail.as_ref().map(DetailState::post_id)
    }

    pub fn screen(&self) -> Screen {
        if self.detail.is_some() {
            Screen::Detail
        } else {
            Screen::List
        }
    }

    /// Derived list view for the current search term and page
    pub fn list_view(&self) -> ListView<'_> {
        ListView::derive(
            &self.posts,
            &self.search_term,
            self.items_per_page,
            self.current_page,
        )
    }

    /// Post under the highlight on the current page
    pub fn highlighted_post(&self) -> Option<&Post> {
        self.list_view().items.get(self.cursor_row).copied()
    }

    fn clamp_cursor(&mut self) {
        let len = self.list_view().items.len();
        self.cursor_row = self.cursor_row.min(len.saturating_sub(1));
    }

    fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.cursor_row = 0;
    }
}

/// Apply one message, returning the next state and the effects to run
pub fn update(mut state: BoardState, message: Message) -> (BoardState, Vec<Effect>) {
    let mut effects = Vec::new();

    match message {
        Message::PostsLoaded(posts) => {
            tracing::debug!("Post list loaded with {} entries", posts.len());
            state.posts = engine::dedup_by_id(posts);
            state.posts_loading = false;
            state.clamp_cursor();
        }
        Message::PostsLoadFailed => {
            state.posts_loading = false;
        }
        Message::SearchModeEntered => {
            if state.screen() == Screen::List {
                state.input_mode = InputMode::Search;
            }
        }
        Message::SearchModeExited => {
            state.input_mode = InputMode::Browse;
        }
        // The page is left alone on purpose when the term changes; a page
        // past the end renders empty until the user picks another one.
        Message::SearchInput(ch) => {
            state.search_term.push(ch);
            state.cursor_row = 0;
        }
        Message::SearchBackspace => {
            if state.search_term.pop().is_some() {
                state.cursor_row = 0;
            }
        }
        Message::SearchCleared => {
            state.search_term.clear();
            state.cursor_row = 0;
        }
        Message::PageSelected(page) => {
            let page_count = state.list_view().page_count;
            if (1..=page_count).contains(&page) {
                state.set_page(page);
            } else {
                tracing::debug!("Ignoring page {} outside 1..={}", page, page_count);
            }
        }
        Message::NextPage => {
            let page_count = state.list_view().page_count;
            if state.current_page < page_count {
                let page = state.current_page + 1;
                state.set_page(page);
            }
        }
        Message::PreviousPage => {
            let page_count = state.list_view().page_count;
            if state.current_page > 1 && page_count > 0 {
                let page = (state.current_page - 1).min(page_count);
                state.set_page(page);
            }
        }
        Message::CursorMoved(direction) => {
            let len = state.list_view().items.len();
            match direction {
                Direction::Up => state.cursor_row = state.cursor_row.saturating_sub(1),
                Direction::Down => {
                    if state.cursor_row + 1 < len {
                        state.cursor_row += 1;
                    }
                }
            }
        }
        Message::ViewPost { post_id } => {
            let ticket = state.next_ticket;
            state.next_ticket += 1;
            state.detail = Some(DetailState::loading(post_id, ticket));
            state.input_mode = InputMode::Browse;
            effects.push(Effect::RecordInteraction(format!(
                "Viewing details of post {post_id}"
            )));
            effects.push(Effect::FetchDetail { post_id, ticket });
        }
        Message::DeletePost { post_id } => {
            state.posts = engine::remove(std::mem::take(&mut state.posts), post_id);
            if state.selected_post_id() == Some(post_id) {
                state.detail = None;
            }
            state.clamp_cursor();
            effects.push(Effect::RecordInteraction(format!(
                "Deleting post with ID: {post_id}"
            )));
        }
        Message::GoBack => {
            state.detail = None;
        }
        Message::PostLoaded { ticket, post } => match state.detail.as_mut() {
            Some(detail) if detail.ticket == ticket => detail.post = Some(post),
            _ => tracing::debug!("Dropping post {} for closed view {}", post.id, ticket),
        },
        Message::CommentsLoaded { ticket, comments } => match state.detail.as_mut() {
            Some(detail) if detail.ticket == ticket => detail.comments = Some(comments),
            _ => tracing::debug!("Dropping comments for closed view {}", ticket),
        },
        Message::DetailScrolled(direction) => {
            if let Some(detail) = state.detail.as_mut() {
                detail.scroll = match direction {
                    Direction::Up => detail.scroll.saturating_sub(1),
                    Direction::Down => detail.scroll + 1,
                };
                detail.clamp_scroll(state.viewport);
            }
        }
        Message::ViewportResized { width, height } => {
            state.viewport = (width, height);
            if let Some(detail) = state.detail.as_mut() {
                detail.clamp_scroll(state.viewport);
            }
        }
        Message::QuitRequested => {
            effects.push(Effect::Quit);
        }
    }

    (state, effects)
}
