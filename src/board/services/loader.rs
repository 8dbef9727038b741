//! # Fetch Loader
//!
//! Runs API requests as tokio tasks and reports completions as [`Message`]s
//! over a channel drained by the controller's event loop.
//!
//! Failures are logged with `tracing` and otherwise swallowed: a failed list
//! load reports `PostsLoadFailed`, a failed detail load reports nothing, so
//! the detail view keeps showing its loading state.

use crate::board::events::Message;
use crate::board::models::PostId;
use crate::board::services::posts_api::PostsClient;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Capacity of the completion channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 32;

/// Spawns fetch tasks that report back through a message channel
#[derive(Debug, Clone)]
pub struct FetchRunner {
    client: PostsClient,
    sender: mpsc::Sender<Message>,
}

impl FetchRunner {
    /// Create a runner and the receiving end of its completion channel
    pub fn new(client: PostsClient) -> (Self, mpsc::Receiver<Message>) {
        let (sender, receiver) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        (Self { client, sender }, receiver)
    }

    /// Load the post list in the background
    pub fn spawn_posts_load(&self) -> JoinHandle<()> {
        let client = self.client.clone();
        let sender = self.sender.clone();
        tokio::spawn(async move { load_posts(&client, &sender).await })
    }

    /// Load a post and then its comments in the background
    pub fn spawn_detail_load(&self, post_id: PostId, ticket: u64) -> JoinHandle<()> {
        let client = self.client.clone();
        let sender = self.sender.clone();
        tokio::spawn(async move { load_detail(&client, post_id, ticket, &sender).await })
    }
}

/// Fetch the post list and report the outcome
pub async fn load_posts(client: &PostsClient, sender: &mpsc::Sender<Message>) {
    let message = match client.fetch_posts().await {
        Ok(posts) => Message::PostsLoaded(posts),
        Err(error) => {
            log_fetch_error("Error fetching posts", &error);
            Message::PostsLoadFailed
        }
    };

    // Receiver is gone once the controller has quit
    if sender.send(message).await.is_err() {
        tracing::debug!("Post list result dropped: event loop has stopped");
    }
}

/// Fetch a post, then its comments, reporting each as it arrives
///
/// The comments request is never sent when the post request fails.
pub async fn load_detail(
    client: &PostsClient,
    post_id: PostId,
    ticket: u64,
    sender: &mpsc::Sender<Message>,
) {
    let post = match client.fetch_post(post_id).await {
        Ok(post) => post,
        Err(error) => {
            log_fetch_error("Error fetching post and comments", &error);
            return;
        }
    };

    if sender
        .send(Message::PostLoaded { ticket, post })
        .await
        .is_err()
    {
        tracing::debug!("Post {} dropped: event loop has stopped", post_id);
        return;
    }

    match client.fetch_comments(post_id).await {
        Ok(comments) => {
            if sender
                .send(Message::CommentsLoaded { ticket, comments })
                .await
                .is_err()
            {
                tracing::debug!("Comments of post {} dropped: event loop has stopped", post_id);
            }
        }
        Err(error) => log_fetch_error("Error fetching post and comments", &error),
    }
}

/// Write the full error chain to the diagnostic log
fn log_fetch_error(context: &str, error: &anyhow::Error) {
    let mut error_message = format!("{error}");
    for cause in error.chain().skip(1) {
        error_message.push_str(&format!("\n  Caused by: {cause}"));
    }
    tracing::error!("{context}: {error_message}");
}
