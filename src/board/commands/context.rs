//! # Command Context
//!
//! Read-only snapshot of the board that commands consult to decide whether
//! a key press applies to them.

use crate::board::events::{InputMode, Screen};
use crate::board::models::PostId;
use crate::board::state::BoardState;

/// Read-only snapshot of board state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub highlighted_post_id: Option<PostId>,
    pub page_count: usize,
}

impl BoardSnapshot {
    /// Create snapshot from current board state
    pub fn from_state(state: &BoardState) -> Self {
        let view = state.list_view();
        Self {
            screen: state.screen(),
            input_mode: state.input_mode(),
            highlighted_post_id: state.highlighted_post().map(|post| post.id),
            page_count: view.page_count,
        }
    }

    /// List screen with keys bound to navigation
    pub fn is_browsing_list(&self) -> bool {
        self.screen == Screen::List && self.input_mode == InputMode::Browse
    }

    /// List screen with keys bound to the search term
    pub fn is_searching(&self) -> bool {
        self.screen == Screen::List && self.input_mode == InputMode::Search
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: BoardSnapshot,
}

impl CommandContext {
    pub fn new(state: BoardSnapshot) -> Self {
        Self { state }
    }

    /// Context built straight from board state
    pub fn from_state(state: &BoardState) -> Self {
        Self::new(BoardSnapshot::from_state(state))
    }
}
