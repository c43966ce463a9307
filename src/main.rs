// This is the entry point of the comment moderation job.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (GitHub API, payload file)
// - `actions/` = CI runner adapter (settings, event handling)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Read the triggering event and moderate it
// 4. Turn any failure into a non-zero exit so the job fails

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "actions/actions_layer.rs"]
mod actions;
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::actions::comment_handler::handle_comment_event;
use crate::actions::settings::Settings;
use crate::core::moderation::CommentModerator;
use crate::infra::github::event_file::load_event_payload;
use crate::infra::github::github_client::GithubApiClient;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let settings = Settings::from_env().context("Failed to load settings")?;

    let payload = load_event_payload(&settings.event_path)
        .await
        .context("Failed to read event payload")?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let client = GithubApiClient::new(&settings.token, settings.api_url.as_deref())
        .context("Failed to create GitHub API client")?;
    let target = payload.target(settings.block_org.as_deref());
    let moderator = CommentModerator::new(client, settings.policy.clone(), target)
        .with_dry_run(settings.dry_run);

    tracing::debug!(
        owner = %moderator.target().owner,
        repo = %moderator.target().repo,
        org = %moderator.target().org,
        phrases = settings.policy.phrases().len(),
        dry_run = settings.dry_run,
        "Moderator ready"
    );

    // The handler logs the skip reason or moderation outcome
    handle_comment_event(&settings, &payload, &moderator)
        .await
        .context("Failed to moderate comment")?;

    Ok(())
}
