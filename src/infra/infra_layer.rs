// The infra module contains implementations of core traits.
// Each integration goes in its own submodule.

#[path = "github/mod.rs"]
pub mod github;
