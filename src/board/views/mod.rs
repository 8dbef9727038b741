//! # View Layer
//!
//! `layout` builds frames from state, `terminal_renderer` draws them with
//! crossterm and `plain` prints a page for non-interactive runs.

pub mod layout;
pub mod plain;
pub mod terminal_renderer;

pub use layout::{screen_lines, LineStyle, StyledLine};
pub use plain::format_page;
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
