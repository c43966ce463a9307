// Moderation domain models - data structures for the comment policy.
//
// These are pure domain types with no HTTP or CI dependencies.
// The actions layer builds them from the webhook payload.

/// Phrases that mark a comment as spam when no override is configured.
pub const DEFAULT_TRIGGER_PHRASES: [&str; 3] = ["www.mediafire.com", "Download", "changeme"];

/// A newly posted issue comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEvent {
    pub comment_id: u64,
    /// Login of the user who posted the comment
    pub author: String,
    pub body: String,
}

/// Ordered list of literal substrings that trigger enforcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerPolicy {
    phrases: Vec<String>,
}

impl TriggerPolicy {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Default for TriggerPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_PHRASES)
    }
}

/// Where the delete and block calls are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationTarget {
    pub owner: String,
    pub repo: String,
    /// Organization whose block list receives the author
    pub org: String,
}

/// What `enforce` ended up doing with a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationOutcome {
    /// No trigger phrase matched, nothing was called
    Clean,
    /// Comment deleted and author blocked
    Enforced {
        comment_id: u64,
        author: String,
        phrase: String,
    },
    /// Matched, but remote calls were suppressed
    DryRun {
        comment_id: u64,
        author: String,
        phrase: String,
    },
}

impl ModerationOutcome {
    pub fn is_match(&self) -> bool {
        !matches!(self, ModerationOutcome::Clean)
    }
}

impl std::fmt::Display for ModerationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationOutcome::Clean => write!(f, "clean"),
            ModerationOutcome::Enforced {
                comment_id,
                author,
                phrase,
            } => write!(
                f,
                "deleted comment {} and blocked {} (matched {:?})",
                comment_id, author, phrase
            ),
            ModerationOutcome::DryRun {
                comment_id,
                author,
                phrase,
            } => write!(
                f,
                "dry run: would delete comment {} and block {} (matched {:?})",
                comment_id, author, phrase
            ),
        }
    }
}
