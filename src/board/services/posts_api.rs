//! # Posts API Client
//!
//! Read-only client for the three JSON endpoints the board uses:
//!
//! - `GET /posts`
//! - `GET /posts/{id}`
//! - `GET /posts/{id}/comments`
//!
//! Connection failures, non-2xx statuses and undecodable bodies all surface
//! as errors; callers decide what to do with them.

use crate::board::models::{Comment, Post, PostId};
use anyhow::{Context, Result};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PostsClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        tracing::debug!("Posts client created for {}", base_url);

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the full post collection in API order
    pub async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.get_json("posts").await
    }

    /// Fetch one post
    pub async fn fetch_post(&self, post_id: PostId) -> Result<Post> {
        self.get_json(&format!("posts/{post_id}")).await
    }

    /// Fetch the comments of one post
    pub async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        self.get_json(&format!("posts/{post_id}/comments")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("Invalid request path '{path}'"))?;

        tracing::debug!("GET {}", url);
        let start_time = std::time::Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?
            .error_for_status()
            .with_context(|| format!("GET {url} returned an error status"))?;

        let value = response
            .json::<T>()
            .await
            .with_context(|| format!("GET {url} returned an unexpected body"))?;

        tracing::debug!("GET {} completed in {}ms", url, start_time.elapsed().as_millis());
        Ok(value)
    }
}

/// `Url::join` replaces the last path segment unless the base ends in '/'
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PostsClient {
        let url = Url::parse(&server.uri()).unwrap();
        PostsClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn base_url_should_gain_trailing_slash() {
        let url = Url::parse("http://example.com/api").unwrap();
        let client = PostsClient::new(url, Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url().as_str(), "http://example.com/api/");
    }

    #[tokio::test]
    async fn fetch_posts_should_decode_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"userId": 1, "id": 1, "title": "first", "body": "one"},
                {"userId": 1, "id": 2, "title": "second", "body": "two"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client_for(&server).fetch_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "second");
    }

    #[tokio::test]
    async fn fetch_post_and_comments_should_use_post_paths() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"userId": 1, "id": 7, "title": "seven", "body": "body"}
            )))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts/7/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"postId": 7, "id": 31, "name": "reader", "email": "r@example.com", "body": "nice"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let post = client.fetch_post(7).await.unwrap();
        let comments = client.fetch_comments(7).await.unwrap();

        assert_eq!(post.title, "seven");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].post_id, 7);
    }

    #[tokio::test]
    async fn error_status_should_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/3"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_post(3).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn malformed_body_should_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let error = client_for(&server).fetch_posts().await.unwrap_err();
        assert!(error.to_string().contains("unexpected body"));
    }
}
