//! # Services Layer
//!
//! Access to the remote posts API. Services own the HTTP client and the
//! background tasks; they never touch board state directly.

pub mod loader;
pub mod posts_api;

pub use loader::{load_detail, load_posts, FetchRunner};
pub use posts_api::PostsClient;
