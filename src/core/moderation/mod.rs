// Core moderation module - contains the comment policy and its enforcement.

pub mod moderation_models;
pub mod moderation_service;

pub use moderation_models::*;
pub use moderation_service::*;
