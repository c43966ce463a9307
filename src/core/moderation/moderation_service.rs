// Comment moderation service - core business logic.
//
// This service handles:
// - Matching a comment body against the trigger phrases
// - Deleting the comment and blocking its author on a match
//
// NO HTTP or CI dependencies here - just pure domain logic.

use super::moderation_models::{CommentEvent, ModerationOutcome, ModerationTarget, TriggerPolicy};
use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ModerationError {
    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Event payload error: {0}")]
    Payload(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ============================================================================
// CLIENT TRAIT (PORT)
// ============================================================================

/// The two remote operations enforcement needs from the hosting platform.
#[async_trait]
pub trait ModerationClient: Send + Sync {
    async fn delete_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<(), ModerationError>;

    async fn block_user(&self, org: &str, username: &str) -> Result<(), ModerationError>;
}

// ============================================================================
// POLICY
// ============================================================================

/// First phrase (in list order) that occurs in the body, if any.
///
/// Case-sensitive literal substring search, no normalization.
pub fn matched_phrase<'a, S: AsRef<str>>(
    comment: &CommentEvent,
    trigger_phrases: &'a [S],
) -> Option<&'a str> {
    trigger_phrases
        .iter()
        .map(|phrase| phrase.as_ref())
        .find(|phrase| comment.body.contains(*phrase))
}

/// Whether the comment violates the policy.
pub fn evaluate<S: AsRef<str>>(comment: &CommentEvent, trigger_phrases: &[S]) -> bool {
    matched_phrase(comment, trigger_phrases).is_some()
}

// ============================================================================
// CORE SERVICE
// ============================================================================

/// Decides on a single comment and applies the delete + block actions.
pub struct CommentModerator<C: ModerationClient> {
    client: C,
    policy: TriggerPolicy,
    target: ModerationTarget,
    dry_run: bool,
}

impl<C: ModerationClient> CommentModerator<C> {
    pub fn new(client: C, policy: TriggerPolicy, target: ModerationTarget) -> Self {
        Self {
            client,
            policy,
            target,
            dry_run: false,
        }
    }

    /// Report matches without calling the platform.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn target(&self) -> &ModerationTarget {
        &self.target
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn evaluate(&self, comment: &CommentEvent) -> bool {
        evaluate(comment, self.policy.phrases())
    }

    pub fn matched_phrase(&self, comment: &CommentEvent) -> Option<&str> {
        matched_phrase(comment, self.policy.phrases())
    }

    /// Delete the comment, then block its author, if the policy matches.
    ///
    /// The calls are sequential and not compensated: a failed delete skips the
    /// block, a failed block leaves the comment deleted. Either error is returned.
    pub async fn enforce(
        &self,
        comment: &CommentEvent,
    ) -> Result<ModerationOutcome, ModerationError> {
        if !self.evaluate(comment) {
            tracing::debug!(comment_id = comment.comment_id, "Comment is clean");
            return Ok(ModerationOutcome::Clean);
        }
        let phrase = self
            .matched_phrase(comment)
            .unwrap_or_default()
            .to_string();

        tracing::warn!(
            comment_id = comment.comment_id,
            author = %comment.author,
            phrase = %phrase,
            "Comment matched trigger phrase"
        );

        if self.dry_run {
            return Ok(ModerationOutcome::DryRun {
                comment_id: comment.comment_id,
                author: comment.author.clone(),
                phrase,
            });
        }

        self.client
            .delete_comment(&self.target.owner, &self.target.repo, comment.comment_id)
            .await?;
        tracing::info!(
            comment_id = comment.comment_id,
            repo = %format!("{}/{}", self.target.owner, self.target.repo),
            "Deleted comment"
        );

        self.client
            .block_user(&self.target.org, &comment.author)
            .await?;
        tracing::info!(author = %comment.author, org = %self.target.org, "Blocked user");

        Ok(ModerationOutcome::Enforced {
            comment_id: comment.comment_id,
            author: comment.author.clone(),
            phrase,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
