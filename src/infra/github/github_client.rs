use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Response, StatusCode};

use crate::core::moderation::{ModerationClient, ModerationError};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Minimal GitHub REST API client. It exposes only the two calls enforcement needs.
pub struct GithubApiClient {
    client: Client,
    base_url: String,
}

impl GithubApiClient {
    pub fn new(token: &str, base_url: Option<&str>) -> Result<Self, ModerationError> {
        Self::from_builder(Client::builder(), token, base_url)
    }

    fn from_builder(
        builder: ClientBuilder,
        token: &str,
        base_url: Option<&str>,
    ) -> Result<Self, ModerationError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "User-Agent",
            HeaderValue::from_static(concat!("comment-guard/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ModerationError::Config(e.to_string()))?,
        );

        let client = builder
            .default_headers(headers)
            .build()
            .map_err(|e| ModerationError::Api(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn comment_url(&self, owner: &str, repo: &str, comment_id: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/comments/{}",
            self.base_url, owner, repo, comment_id
        )
    }

    fn block_url(&self, org: &str, username: &str) -> String {
        format!("{}/orgs/{}/blocks/{}", self.base_url, org, username)
    }
}

/// Map a response status to success or an API error carrying GitHub's message.
fn check_status(status: StatusCode, what: &str, body: &str) -> Result<(), ModerationError> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::FORBIDDEN {
        return Err(ModerationError::Api(format!(
            "GitHub API rate limit hit or token missing permission ({}): {}",
            what, body
        )));
    }
    Err(ModerationError::Api(format!(
        "GitHub returned {} for {}: {}",
        status, what, body
    )))
}

async fn ensure_success(resp: Response, what: &str) -> Result<(), ModerationError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    check_status(status, what, body.trim())
}

#[async_trait]
impl ModerationClient for GithubApiClient {
    async fn delete_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<(), ModerationError> {
        let url = self.comment_url(owner, repo, comment_id);
        tracing::debug!(%url, "DELETE issue comment");

        let resp = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| ModerationError::Api(e.to_string()))?;

        // Already gone counts as deleted, but a token that cannot see the repo also gets 404
        if resp.status() == StatusCode::NOT_FOUND {
            tracing::warn!(
                comment_id,
                repo = %format!("{}/{}", owner, repo),
                "Comment not found; already deleted or token cannot see the repository"
            );
            return Ok(());
        }

        ensure_success(resp, "delete comment").await
    }

    async fn block_user(&self, org: &str, username: &str) -> Result<(), ModerationError> {
        let url = self.block_url(org, username);
        tracing::debug!(%url, "PUT org block");

        let resp = self
            .client
            .put(url)
            .header("Content-Length", "0")
            .send()
            .await
            .map_err(|e| ModerationError::Api(e.to_string()))?;

        ensure_success(resp, "block user").await
    }
}
