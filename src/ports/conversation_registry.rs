//! Conversation Registry Port - per-identifier intake progress.
//!
//! Holds at most one [`ConversationState`] per conversation identifier.
//! The registry only stores and hands back state; callers that read,
//! modify and write back an entry must serialize those steps per key.

use async_trait::async_trait;

use crate::domain::intake::ConversationState;

/// Errors from registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ConversationRegistry: Send + Sync {
    /// Current state for `conversation_id`, or `None` if unknown.
    async fn get(&self, conversation_id: &str) -> Result<Option<ConversationState>, RegistryError>;

    /// Stores `state`, replacing any previous entry.
    async fn put(&self, conversation_id: &str, state: ConversationState) -> Result<(), RegistryError>;

    /// Removes the entry, returning it if one existed.
    async fn remove(&self, conversation_id: &str) -> Result<Option<ConversationState>, RegistryError>;

    /// Number of conversations in progress.
    async fn len(&self) -> Result<usize, RegistryError>;

    /// Drops every entry, returning how many were removed.
    async fn clear(&self) -> Result<usize, RegistryError>;
}
