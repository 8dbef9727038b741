use cucumber::World;
use postboard::{
    config::Settings,
    io::{MockEventStream, MockRenderStream},
    views::screen_lines,
    AppController, InteractionLog, PostId,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reqwest::Url;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How long to wait for another fetch result before treating the app as idle
const SETTLE_TIMEOUT: Duration = Duration::from_millis(200);

/// Terminal size used for screen assertions
const SCREEN_SIZE: (u16, u16) = (100, 60);

pub type TestController = AppController<MockEventStream, MockRenderStream>;

/// A posts API served by wiremock and a controller driven by key presses
#[derive(World)]
#[world(init = Self::new)]
pub struct PostsWorld {
    /// Posts the API returns, as JSON
    pub posts: Vec<Value>,

    /// Comments per post id
    pub comments: HashMap<PostId, Vec<Value>>,

    /// Posts whose single-post request answers with a server error
    pub failing_posts: HashSet<PostId>,

    pub items_per_page: usize,

    pub server: Option<MockServer>,

    pub app: Option<TestController>,
}

impl std::fmt::Debug for PostsWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsWorld")
            .field("posts", &self.posts.len())
            .field("failing_posts", &self.failing_posts)
            .field("items_per_page", &self.items_per_page)
            .field("server", &self.server.as_ref().map(MockServer::uri))
            .field("app", &self.app.is_some())
            .finish()
    }
}

impl PostsWorld {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            comments: HashMap::new(),
            failing_posts: HashSet::new(),
            items_per_page: 10,
            server: None,
            app: None,
        }
    }

    pub fn make_posts(&mut self, count: u64) {
        self.posts = (1..=count)
            .map(|id| {
                json!({
                    "userId": (id - 1) / 10 + 1,
                    "id": id,
                    "title": format!("post number {id}"),
                    "body": format!("body text of post {id}"),
                })
            })
            .collect();
    }

    pub fn make_comments(&mut self, post_id: PostId, count: u64) {
        let comments = (1..=count)
            .map(|id| {
                json!({
                    "postId": post_id,
                    "id": id,
                    "name": format!("commenter {id}"),
                    "body": format!("comment {id} on post {post_id}"),
                })
            })
            .collect();
        self.comments.insert(post_id, comments);
    }

    /// Mount the API on a fresh mock server and start the controller
    pub async fn start_application(&mut self) {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(self.posts.clone())))
            .mount(&server)
            .await;

        for post in &self.posts {
            let Some(id) = post["id"].as_u64() else {
                continue;
            };
            let post_response = if self.failing_posts.contains(&id) {
                ResponseTemplate::new(500)
            } else {
                ResponseTemplate::new(200).set_body_json(post.clone())
            };
            Mock::given(method("GET"))
                .and(path(format!("/posts/{id}")))
                .respond_with(post_response)
                .mount(&server)
                .await;

            let comments = self.comments.get(&id).cloned().unwrap_or_default();
            Mock::given(method("GET"))
                .and(path(format!("/posts/{id}/comments")))
                .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(comments)))
                .mount(&server)
                .await;
        }

        let settings = Settings {
            base_url: Url::parse(&server.uri()).expect("mock server URI should parse"),
            items_per_page: NonZeroUsize::new(self.items_per_page)
                .expect("page size should be positive"),
            request_timeout: Duration::from_secs(5),
        };
        let mut app = AppController::with_io_streams(
            &settings,
            InteractionLog::new(),
            MockEventStream::empty(),
            MockRenderStream::with_size(SCREEN_SIZE),
        )
        .expect("controller should start");

        app.start();
        self.server = Some(server);
        self.app = Some(app);
        self.settle().await;
    }

    pub fn app(&self) -> &TestController {
        self.app.as_ref().expect("application should be started")
    }

    /// Dispatch fetch results until none arrive for a while
    pub async fn settle(&mut self) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        while let Ok(true) = tokio::time::timeout(SETTLE_TIMEOUT, app.await_fetch_result()).await {}
    }

    /// Press a named key ("Enter", "Esc", "Ctrl+U", ...) or a character
    pub async fn press_key(&mut self, name: &str) {
        if let Some(rest) = name.strip_prefix("Ctrl+") {
            let ch = rest.chars().next().expect("Ctrl+ needs a key").to_ascii_lowercase();
            self.send_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
                .await;
            return;
        }
        let code = match name {
            "Enter" => KeyCode::Enter,
            "Esc" => KeyCode::Esc,
            "Backspace" => KeyCode::Backspace,
            "Delete" => KeyCode::Delete,
            "Up" => KeyCode::Up,
            "Down" => KeyCode::Down,
            "Left" => KeyCode::Left,
            "Right" => KeyCode::Right,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyCode::Char(ch),
                    _ => panic!("Unknown key name: {other}"),
                }
            }
        };
        self.send_key(KeyEvent::new(code, KeyModifiers::NONE)).await;
    }

    pub async fn send_key(&mut self, key_event: KeyEvent) {
        self.app
            .as_mut()
            .expect("application should be started")
            .process_key_event(key_event)
            .expect("key should be processed");
        self.settle().await;
    }

    /// Enter search mode, type `term` and leave search mode
    pub async fn search_for(&mut self, term: &str) {
        self.press_key("/").await;
        for ch in term.chars() {
            self.press_key(&ch.to_string()).await;
        }
        self.press_key("Enter").await;
    }

    /// The current frame as plain lines
    pub fn screen_text(&self) -> Vec<String> {
        let app = self.app();
        screen_lines(app.state(), app.interaction_log(), SCREEN_SIZE)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    /// Paths the mock server has been asked for, in order
    pub async fn requested_paths(&self) -> Vec<String> {
        let Some(server) = &self.server else {
            return Vec::new();
        };
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}

impl Default for PostsWorld {
    fn default() -> Self {
        Self::new()
    }
}
