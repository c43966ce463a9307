// The core module contains all business logic.
// No HTTP or CI types live here.

#[path = "moderation/mod.rs"]
pub mod moderation;
