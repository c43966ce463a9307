// Runtime configuration, read from the environment the CI runner provides.

use std::path::PathBuf;

use crate::core::moderation::{ModerationError, TriggerPolicy};

/// Everything the job needs to know before it looks at the payload.
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: String,
    pub event_path: PathBuf,
    pub event_name: String,
    pub api_url: Option<String>,
    /// Block in this org instead of the one the payload names
    pub block_org: Option<String>,
    pub policy: TriggerPolicy,
    pub dry_run: bool,
    pub include_bots: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ModerationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ModerationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| {
                    ModerationError::Config(format!("Missing {} environment variable", key))
                })
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let flag = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<bool>().ok())
                .unwrap_or(false)
        };

        let policy = optional("MODERATION_TRIGGER_PHRASES")
            .map(|raw| parse_phrases(&raw))
            .filter(|phrases| !phrases.is_empty())
            .map(TriggerPolicy::new)
            .unwrap_or_default();

        Ok(Self {
            token: required("GITHUB_TOKEN")?,
            event_path: PathBuf::from(required("GITHUB_EVENT_PATH")?),
            event_name: optional("GITHUB_EVENT_NAME")
                .unwrap_or_else(|| "issue_comment".to_string()),
            api_url: optional("GITHUB_API_URL"),
            block_org: optional("MODERATION_BLOCK_ORG"),
            policy,
            dry_run: flag("MODERATION_DRY_RUN"),
            include_bots: flag("MODERATION_INCLUDE_BOTS"),
        })
    }
}

/// One phrase per line. Lines are kept verbatim apart from a trailing `\r`.
fn parse_phrases(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moderation::DEFAULT_TRIGGER_PHRASES;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const BASE: [(&str, &str); 2] = [
        ("GITHUB_TOKEN", "ghp_test"),
        ("GITHUB_EVENT_PATH", "/tmp/event.json"),
    ];

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&BASE)).unwrap();

        assert_eq!(settings.token, "ghp_test");
        assert_eq!(settings.event_path, PathBuf::from("/tmp/event.json"));
        assert_eq!(settings.event_name, "issue_comment");
        assert_eq!(settings.api_url, None);
        assert_eq!(settings.block_org, None);
        assert_eq!(settings.policy.phrases(), DEFAULT_TRIGGER_PHRASES);
        assert!(!settings.dry_run);
        assert!(!settings.include_bots);
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let result = Settings::from_lookup(lookup_from(&[("GITHUB_EVENT_PATH", "/tmp/e.json")]));
        match result {
            Err(ModerationError::Config(msg)) => assert!(msg.contains("GITHUB_TOKEN")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_event_path_is_config_error() {
        let result = Settings::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "ghp_test"),
            ("GITHUB_EVENT_PATH", "  "),
        ]));
        assert!(matches!(result, Err(ModerationError::Config(_))));
    }

    #[test]
    fn test_phrase_override() {
        let mut pairs = BASE.to_vec();
        pairs.push(("MODERATION_TRIGGER_PHRASES", "free robux\r\n\n  \ncrypto giveaway\n"));
        let settings = Settings::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(settings.policy.phrases(), ["free robux", "crypto giveaway"]);
    }

    #[test]
    fn test_blank_phrase_override_keeps_defaults() {
        let mut pairs = BASE.to_vec();
        pairs.push(("MODERATION_TRIGGER_PHRASES", "\n \n"));
        let settings = Settings::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(settings.policy, TriggerPolicy::default());
    }

    #[test]
    fn test_flags_and_overrides() {
        let mut pairs = BASE.to_vec();
        pairs.extend([
            ("MODERATION_DRY_RUN", "true"),
            ("MODERATION_INCLUDE_BOTS", "yes"),
            ("MODERATION_BLOCK_ORG", "acme"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
            ("GITHUB_EVENT_NAME", "pull_request"),
        ]);
        let settings = Settings::from_lookup(lookup_from(&pairs)).unwrap();

        assert!(settings.dry_run);
        // Unparseable bools fall back to false
        assert!(!settings.include_bots);
        assert_eq!(settings.block_org.as_deref(), Some("acme"));
        assert_eq!(settings.api_url.as_deref(), Some("https://ghe.example.com/api/v3"));
        assert_eq!(settings.event_name, "pull_request");
    }
}
