//! # Messages
//!
//! State-transition events. Commands produce them from key presses and the
//! fetch tasks produce them when a request completes. Every message goes
//! through `state::update`.

use super::types::Direction;
use crate::board::models::{Comment, Post, PostId};

/// Events that drive `BoardState` transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Initial post list arrived
    PostsLoaded(Vec<Post>),

    /// Initial post list could not be fetched or parsed
    PostsLoadFailed,

    /// Start editing the search term
    SearchModeEntered,

    /// Stop editing the search term (the term is kept)
    SearchModeExited,

    /// Append a character to the search term
    SearchInput(char),

    /// Remove the last character of the search term
    SearchBackspace,

    /// Empty the search term
    SearchCleared,

    /// Jump to a page (1-based)
    PageSelected(usize),

    NextPage,

    PreviousPage,

    /// Move the highlighted row on the current page
    CursorMoved(Direction),

    /// Open the detail view of a post
    ViewPost { post_id: PostId },

    /// Remove a post from the session's collection
    DeletePost { post_id: PostId },

    /// Close the detail view
    GoBack,

    /// Post of the detail view arrived
    PostLoaded { ticket: u64, post: Post },

    /// Comments of the detail view arrived
    CommentsLoaded { ticket: u64, comments: Vec<Comment> },

    /// Scroll the detail view
    DetailScrolled(Direction),

    /// Terminal size changed (also sent once at startup)
    ViewportResized { width: u16, height: u16 },

    /// Leave the application
    QuitRequested,
}
