//! Step definitions for the detail screen

use crate::common::world::PostsWorld;
use cucumber::{given, then};
use postboard::events::Screen;

#[given(regex = r"^post (\d+) has (\d+) comments$")]
async fn given_comments(world: &mut PostsWorld, post_id: u64, count: u64) {
    world.make_comments(post_id, count);
}

#[given(regex = r"^fetching post (\d+) fails$")]
async fn given_post_fails(world: &mut PostsWorld, post_id: u64) {
    world.failing_posts.insert(post_id);
}

#[then(regex = r"^the detail view shows post (\d+)$")]
async fn then_detail_shows(world: &mut PostsWorld, post_id: u64) {
    let detail = world.app().state().detail().expect("detail view should be open");
    assert_eq!(detail.post().map(|p| p.id), Some(post_id));
}

#[then(regex = r"^the detail view shows (\d+) comments$")]
async fn then_detail_comments(world: &mut PostsWorld, count: usize) {
    let detail = world.app().state().detail().expect("detail view should be open");
    assert_eq!(detail.comments().map(<[_]>::len), Some(count));
}

#[then("the detail view is still loading")]
async fn then_detail_loading(world: &mut PostsWorld) {
    let detail = world.app().state().detail().expect("detail view should be open");
    assert!(detail.is_loading());
    assert_eq!(world.screen_text().first().map(String::as_str), Some("Loading..."));
}

#[then(regex = r"^post (\d+) was requested$")]
async fn then_post_requested(world: &mut PostsWorld, post_id: u64) {
    let paths = world.requested_paths().await;
    assert!(paths.contains(&format!("/posts/{post_id}")), "requests: {paths:?}");
}

#[then("no comments were requested")]
async fn then_no_comments_requested(world: &mut PostsWorld) {
    let paths = world.requested_paths().await;
    assert!(
        paths.iter().all(|p| !p.ends_with("/comments")),
        "requests: {paths:?}"
    );
}

#[then("the list is shown")]
async fn then_list_shown(world: &mut PostsWorld) {
    assert_eq!(world.app().state().screen(), Screen::List);
}
