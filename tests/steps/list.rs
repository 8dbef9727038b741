//! Step definitions for the list screen:
//! - starting against a mocked API
//! - search, pagination and deletion
//! - the interaction log

use crate::common::world::PostsWorld;
use cucumber::{given, then, when};
use serde_json::Value;

// === API SETUP ===

#[given(regex = r"^the API serves (\d+) posts$")]
async fn given_api_serves_posts(world: &mut PostsWorld, count: u64) {
    world.make_posts(count);
}

#[given(regex = r#"^3 of them mention "(.+)"$"#)]
async fn given_three_mention(world: &mut PostsWorld, word: String) {
    let len = world.posts.len();
    assert!(len >= 3, "need at least 3 posts, have {len}");
    for index in [1, len / 2, len - 1] {
        let title = format!("{word} in post {}", index + 1);
        world.posts[index]["title"] = Value::String(title);
    }
}

#[given(regex = r"^the page size is (\d+)$")]
async fn given_page_size(world: &mut PostsWorld, size: usize) {
    world.items_per_page = size;
}

// === ACTIONS ===

#[when("the application starts")]
async fn when_application_starts(world: &mut PostsWorld) {
    world.start_application().await;
}

#[when(regex = r#"^I press "(.+)"$"#)]
async fn when_press(world: &mut PostsWorld, key: String) {
    world.press_key(&key).await;
}

#[when(regex = r#"^I search for "(.*)"$"#)]
async fn when_search(world: &mut PostsWorld, term: String) {
    world.search_for(&term).await;
}

// === LIST ASSERTIONS ===

#[then(regex = r"^there (?:is|are) (\d+) pages?$")]
async fn then_page_count(world: &mut PostsWorld, count: usize) {
    assert_eq!(world.app().state().list_view().page_count, count);
}

#[then(regex = r"^page (\d+) shows (\d+) posts$")]
async fn then_page_shows(world: &mut PostsWorld, page: usize, count: usize) {
    let view = world.app().state().list_view();
    assert_eq!(view.current_page, page);
    assert_eq!(view.items.len(), count);
}

#[then(regex = r"^the current page is (\d+)$")]
async fn then_current_page(world: &mut PostsWorld, page: usize) {
    assert_eq!(world.app().state().current_page(), page);
}

#[then(regex = r"^(\d+) posts match$")]
async fn then_posts_match(world: &mut PostsWorld, count: usize) {
    assert_eq!(world.app().state().list_view().filtered_len, count);
}

#[then(regex = r"^post (\d+) is gone$")]
async fn then_post_gone(world: &mut PostsWorld, post_id: u64) {
    assert!(world.app().state().posts().iter().all(|p| p.id != post_id));
}

#[then(regex = r#"^the screen shows "(.+)"$"#)]
async fn then_screen_shows(world: &mut PostsWorld, text: String) {
    let screen = world.screen_text();
    assert!(
        screen.iter().any(|line| line.contains(&text)),
        "{text:?} not found in:\n{}",
        screen.join("\n")
    );
}

#[then(regex = r#"^the interaction log ends with "(.+)"$"#)]
async fn then_log_ends_with(world: &mut PostsWorld, message: String) {
    let logs = world.app().interaction_log().logs();
    let last = logs.last().expect("interaction log should not be empty");
    assert!(
        last.ends_with(&format!(" - {message}")),
        "last entry was {last:?}"
    );
}

#[then("the application has quit")]
async fn then_quit(world: &mut PostsWorld) {
    assert!(world.app().should_quit());
}
