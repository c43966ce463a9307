use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::core::moderation::{CommentEvent, ModerationError, ModerationTarget};

/// The parts of an `issue_comment` webhook payload this job reads.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueCommentPayload {
    pub action: String,
    pub comment: ApiComment,
    pub repository: ApiRepository,
    #[serde(default)]
    pub organization: Option<ApiAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
    pub user: ApiUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub login: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRepository {
    pub name: String,
    pub owner: ApiAccount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAccount {
    pub login: String,
}

impl IssueCommentPayload {
    pub fn to_comment_event(&self) -> CommentEvent {
        CommentEvent {
            comment_id: self.comment.id,
            author: self.comment.user.login.clone(),
            body: self.comment.body.clone().unwrap_or_default(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.repository.owner.login
    }

    pub fn repo(&self) -> &str {
        &self.repository.name
    }

    /// Organization login, or the repository owner for user-owned repos.
    pub fn org(&self) -> &str {
        self.organization
            .as_ref()
            .map(|o| o.login.as_str())
            .unwrap_or_else(|| self.owner())
    }

    pub fn is_bot_author(&self) -> bool {
        self.comment.user.kind.as_deref() == Some("Bot")
    }

    /// Delete/block addressing, with an optional org override.
    pub fn target(&self, org_override: Option<&str>) -> ModerationTarget {
        ModerationTarget {
            owner: self.owner().to_string(),
            repo: self.repo().to_string(),
            org: org_override.unwrap_or_else(|| self.org()).to_string(),
        }
    }
}

/// Read the webhook payload the CI runner wrote to disk.
pub async fn load_event_payload(
    path: impl AsRef<Path>,
) -> Result<IssueCommentPayload, ModerationError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .await
        .map_err(|e| ModerationError::Payload(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&text).map_err(|e| ModerationError::Payload(e.to_string()))
}
