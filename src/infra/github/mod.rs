// GitHub infra layer.
// - `github_client.rs` talks to the GitHub HTTP API.
// - `event_file.rs` reads the webhook payload the CI runner writes to disk.

#[path = "github_client.rs"]
pub mod github_client;

#[path = "event_file.rs"]
pub mod event_file;
