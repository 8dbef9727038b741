//! # Shared Event Types
//!
//! Small enums shared by commands, state and views.

/// Top-level screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Searchable, paginated post list
    List,
    /// One post with its comments
    Detail,
}

/// How key presses on the list screen are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate, page, view and delete
    #[default]
    Browse,
    /// Keys edit the search term
    Search,
}

/// Vertical movement of the highlight or the detail scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}
