//! # Post and Comment Models
//!
//! Wire types returned by the posts API. Field names follow the API's
//! camelCase JSON; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Identifier of a post
pub type PostId = u64;

/// A blog-style post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Number of space-separated pieces in the body
    ///
    /// Newlines do not separate words here, so "a\nb c" counts as 2.
    pub fn word_count(&self) -> usize {
        self.body.split(' ').count()
    }

    /// Whether title or body contains `needle_lowercase`, ignoring case
    ///
    /// The needle must already be lowercased by the caller.
    pub fn matches_lowercase(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty()
            || self.title.to_lowercase().contains(needle_lowercase)
            || self.body.to_lowercase().contains(needle_lowercase)
    }
}

/// A reply attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: PostId,
    pub name: String,
    pub body: String,
}
