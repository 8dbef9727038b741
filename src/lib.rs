//! # Postboard - Terminal Browser for Posts and Comments
//!
//! Browse, search, page through and delete posts served by a JSON API,
//! open a post to read its comments, and keep a log of what was done
//! during the session.
//!
//! ## Architecture
//!
//! The application state is one record moved forward by a pure `update`
//! function. Everything with a side effect is described as an effect and
//! performed by the controller:
//!
//! ```text
//! ┌─────────────┐   Message   ┌──────────────┐   Effect    ┌────────────┐
//! │  Commands   │────────────▶│ update(state)│────────────▶│ Controller │
//! │ Fetch tasks │             │              │             │            │
//! └─────────────┘             └──────────────┘             └────────────┘
//!        ▲                                                       │
//!        └───────────── spawn fetch / log / render ◀─────────────┘
//! ```

pub mod board;
pub mod cmd_args;
pub mod config;

// Re-export main types for easy access
pub use board::*;
