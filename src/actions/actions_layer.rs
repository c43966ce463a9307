// Actions layer - the CI runner adapter (settings + event handling).

#[path = "settings.rs"]
pub mod settings;

#[path = "comment_handler.rs"]
pub mod comment_handler;
