//! # Events Module
//!
//! Messages that drive state transitions and the small enums they share.

pub mod messages;
pub mod types;

pub use messages::Message;
pub use types::{Direction, InputMode, Screen};
