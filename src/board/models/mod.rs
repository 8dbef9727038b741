//! # Models
//!
//! Plain data: what the API returns and what the user has done.

pub mod interaction_log;
pub mod post;

pub use interaction_log::{InteractionLog, LogEntry};
pub use post::{Comment, Post, PostId};
