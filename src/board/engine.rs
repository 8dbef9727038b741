//! # List-View Engine
//!
//! Pure functions that derive the visible page of posts from the full
//! collection, the search term and the current page. Nothing here touches
//! the terminal or the network.

use crate::board::models::{Post, PostId};
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Posts whose title or body contains `search_term`, ignoring case
///
/// Order is preserved. An empty term keeps every post.
pub fn filter<'a>(posts: &'a [Post], search_term: &str) -> Vec<&'a Post> {
    let needle = search_term.to_lowercase();
    posts
        .iter()
        .filter(|post| post.matches_lowercase(&needle))
        .collect()
}

/// The half-open slice `[(page-1)*size, page*size)` clipped to `items`
///
/// Pages are numbered from 1. Page 0 and pages past the end are empty.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page_number: usize) -> &[T] {
    let Some(first_page_offset) = page_number.checked_sub(1) else {
        return &[];
    };
    let size = page_size.get();
    let first = first_page_offset.saturating_mul(size).min(items.len());
    let last = page_number.saturating_mul(size).min(items.len());
    &items[first..last]
}

/// `ceil(len / page_size)`; 0 for an empty sequence
pub fn page_count<T>(items: &[T], page_size: NonZeroUsize) -> usize {
    items.len().div_ceil(page_size.get())
}

/// `posts` without the first entry whose id is `post_id`
///
/// Returns the collection unchanged when nothing matches.
pub fn remove(mut posts: Vec<Post>, post_id: PostId) -> Vec<Post> {
    if let Some(index) = posts.iter().position(|post| post.id == post_id) {
        posts.remove(index);
    }
    posts
}

/// Drop posts whose id was already seen, keeping the first
pub fn dedup_by_id(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::with_capacity(posts.len());
    let before = posts.len();
    let unique: Vec<Post> = posts.into_iter().filter(|p| seen.insert(p.id)).collect();
    if unique.len() != before {
        tracing::warn!(
            "Dropped {} posts with duplicate ids from the collection",
            before - unique.len()
        );
    }
    unique
}

/// Derived view state for one render of the list screen
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    /// Posts on the active page
    pub items: Vec<&'a Post>,
    /// Number of posts matching the search term
    pub filtered_len: usize,
    /// Number of posts in the collection
    pub total_len: usize,
    pub page_count: usize,
    pub current_page: usize,
}

impl<'a> ListView<'a> {
    pub fn derive(
        posts: &'a [Post],
        search_term: &str,
        page_size: NonZeroUsize,
        current_page: usize,
    ) -> Self {
        let filtered = filter(posts, search_term);
        let items = paginate(&filtered, page_size, current_page).to_vec();
        Self {
            page_count: page_count(&filtered, page_size),
            filtered_len: filtered.len(),
            total_len: posts.len(),
            items,
            current_page,
        }
    }

    /// Whether the active page lies past the last page
    pub fn is_past_end(&self) -> bool {
        self.current_page > self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn make_posts(count: u64) -> Vec<Post> {
        (1..=count)
            .map(|id| Post {
                id,
                user_id: (id - 1) / 10 + 1,
                title: format!("title {id}"),
                body: format!("body of post {id}"),
            })
            .collect()
    }

    fn ids(posts: &[&Post]) -> Vec<PostId> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn filter_with_empty_term_should_keep_everything() {
        let posts = make_posts(5);
        assert_eq!(ids(&filter(&posts, "")), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filter_should_match_title_or_body_ignoring_case() {
        let mut posts = make_posts(6);
        posts[1].title = "LOREM in the title".to_string();
        posts[3].body = "the body says Lorem".to_string();
        posts[5].title = "lOrEm".to_string();

        assert_eq!(ids(&filter(&posts, "lorem")), vec![2, 4, 6]);
        assert_eq!(ids(&filter(&posts, "LOREM")), vec![2, 4, 6]);
    }

    #[test]
    fn filter_should_return_empty_when_nothing_matches() {
        let posts = make_posts(3);
        assert!(filter(&posts, "zzz").is_empty());
    }

    #[test]
    fn page_count_should_round_up() {
        let posts = make_posts(25);
        assert_eq!(page_count(&posts, page_size(10)), 3);
        assert_eq!(page_count(&posts[..20], page_size(10)), 2);
        assert_eq!(page_count(&posts[..1], page_size(10)), 1);
    }

    #[test]
    fn page_count_should_be_zero_for_empty_sequence() {
        let posts: Vec<Post> = Vec::new();
        assert_eq!(page_count(&posts, page_size(10)), 0);
    }

    #[test]
    fn paginate_should_slice_pages() {
        let posts = make_posts(25);

        assert_eq!(paginate(&posts, page_size(10), 1).len(), 10);
        assert_eq!(paginate(&posts, page_size(10), 2)[0].id, 11);
        let last = paginate(&posts, page_size(10), 3);
        assert_eq!(last.len(), 5);
        assert_eq!(last[4].id, 25);
    }

    #[test]
    fn paginate_past_the_end_should_be_empty() {
        let posts = make_posts(25);
        assert!(paginate(&posts, page_size(10), 4).is_empty());
        assert!(paginate(&posts, page_size(10), usize::MAX).is_empty());
    }

    #[test]
    fn paginate_page_zero_should_be_empty() {
        let posts = make_posts(5);
        assert!(paginate(&posts, page_size(10), 0).is_empty());
    }

    #[test]
    fn pages_should_concatenate_back_to_the_sequence() {
        for len in [0u64, 1, 7, 10, 11, 29, 30] {
            let posts = make_posts(len);
            for size in [1, 3, 10, 50] {
                let size = page_size(size);
                let pages = page_count(&posts, size);
                let mut rebuilt = Vec::new();
                for n in 1..=pages {
                    let page = paginate(&posts, size, n);
                    assert!(page.len() <= size.get());
                    rebuilt.extend_from_slice(page);
                }
                assert_eq!(rebuilt, posts, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn remove_should_drop_matching_post() {
        let posts = make_posts(4);
        let remaining = remove(posts, 2);
        let remaining_ids: Vec<PostId> = remaining.iter().map(|p| p.id).collect();
        assert_eq!(remaining_ids, vec![1, 3, 4]);
    }

    #[test]
    fn remove_without_match_should_return_collection_unchanged() {
        let posts = make_posts(4);
        assert_eq!(remove(posts.clone(), 99), posts);
    }

    #[test]
    fn removed_post_should_never_be_exposed_again() {
        let posts = remove(make_posts(25), 7);
        for term in ["", "7", "title"] {
            let filtered = filter(&posts, term);
            for n in 1..=page_count(&filtered, page_size(10)) {
                assert!(paginate(&filtered, page_size(10), n)
                    .iter()
                    .all(|p| p.id != 7));
            }
        }
    }

    #[test]
    fn dedup_by_id_should_keep_first_occurrence() {
        let mut posts = make_posts(3);
        let mut duplicate = posts[0].clone();
        duplicate.title = "duplicate".to_string();
        posts.push(duplicate);

        let unique = dedup_by_id(posts);
        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0].title, "title 1");
    }

    #[test]
    fn list_view_should_derive_page_state() {
        let posts = make_posts(25);
        let view = ListView::derive(&posts, "", page_size(10), 3);

        assert_eq!(view.page_count, 3);
        assert_eq!(view.items.len(), 5);
        assert_eq!(view.filtered_len, 25);
        assert_eq!(view.total_len, 25);
        assert!(!view.is_past_end());
    }

    #[test]
    fn list_view_should_keep_page_past_end_after_filtering() {
        let posts = make_posts(25);
        // only "post 1", "post 10".."post 19" match "post 1"
        let view = ListView::derive(&posts, "post 1", page_size(10), 3);

        assert_eq!(view.filtered_len, 11);
        assert_eq!(view.page_count, 2);
        assert!(view.items.is_empty());
        assert!(view.is_past_end());
    }
}
