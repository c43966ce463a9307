// CI-specific comment handling - translates the webhook payload into core types.
//
// This layer is THIN: pre-filter the event, hand the comment to the
// moderator, report what happened.

use crate::actions::settings::Settings;
use crate::core::moderation::{CommentModerator, ModerationClient, ModerationError, ModerationOutcome};
use crate::infra::github::event_file::IssueCommentPayload;

pub const ISSUE_COMMENT_EVENT: &str = "issue_comment";

/// Why an event was not looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedEvent(String),
    /// Edits and deletions are ignored
    NotCreated(String),
    BotAuthor(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnsupportedEvent(name) => write!(f, "unsupported event '{}'", name),
            SkipReason::NotCreated(action) => write!(f, "comment action '{}'", action),
            SkipReason::BotAuthor(login) => write!(f, "bot author {}", login),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    Skipped(SkipReason),
    Moderated(ModerationOutcome),
}

/// Check why this event should be ignored, if at all.
fn skip_reason(settings: &Settings, payload: &IssueCommentPayload) -> Option<SkipReason> {
    if settings.event_name != ISSUE_COMMENT_EVENT {
        return Some(SkipReason::UnsupportedEvent(settings.event_name.clone()));
    }
    if payload.action != "created" {
        return Some(SkipReason::NotCreated(payload.action.clone()));
    }
    if payload.is_bot_author() && !settings.include_bots {
        return Some(SkipReason::BotAuthor(payload.comment.user.login.clone()));
    }
    None
}

/// Moderate the comment carried by an `issue_comment` payload.
pub async fn handle_comment_event<C: ModerationClient>(
    settings: &Settings,
    payload: &IssueCommentPayload,
    moderator: &CommentModerator<C>,
) -> Result<HandlerOutcome, ModerationError> {
    if let Some(reason) = skip_reason(settings, payload) {
        tracing::info!(comment_id = payload.comment.id, %reason, "Skipping event");
        return Ok(HandlerOutcome::Skipped(reason));
    }

    let comment = payload.to_comment_event();
    let outcome = moderator.enforce(&comment).await?;

    tracing::info!(
        comment_id = comment.comment_id,
        author = %comment.author,
        matched = outcome.is_match(),
        %outcome,
        "Moderation finished"
    );

    Ok(HandlerOutcome::Moderated(outcome))
}
