//! In-Memory Conversation Registry Adapter
//!
//! Process-wide table of conversations in progress. Empty at start-up and
//! lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::intake::ConversationState;
use crate::ports::{ConversationRegistry, RegistryError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRegistry {
    conversations: Arc<RwLock<HashMap<String, ConversationState>>>,
}

impl InMemoryConversationRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRegistry for InMemoryConversationRegistry {
    async fn get(&self, conversation_id: &str) -> Result<Option<ConversationState>, RegistryError> {
        Ok(self.conversations.read().await.get(conversation_id).cloned())
    }

    async fn put(&self, conversation_id: &str, state: ConversationState) -> Result<(), RegistryError> {
        self.conversations
            .write()
            .await
            .insert(conversation_id.to_string(), state);
        Ok(())
    }

    async fn remove(&self, conversation_id: &str) -> Result<Option<ConversationState>, RegistryError> {
        Ok(self.conversations.write().await.remove(conversation_id))
    }

    async fn len(&self) -> Result<usize, RegistryError> {
        Ok(self.conversations.read().await.len())
    }

    async fn clear(&self) -> Result<usize, RegistryError> {
        let mut conversations = self.conversations.write().await;
        let cleared = conversations.len();
        conversations.clear();
        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn answered(count: usize) -> ConversationState {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = ConversationState::new();
        for answer in ["party", "Leeds", "tomorrow", "noon", "900", "30"].into_iter().take(count) {
            state.answer(answer, today).unwrap();
        }
        state
    }

    #[tokio::test]
    async fn unknown_identifier_has_no_state() {
        let registry = InMemoryConversationRegistry::new();
        assert_eq!(registry.get("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_replaces_previous_entry() {
        let registry = InMemoryConversationRegistry::new();
        registry.put("a", answered(2)).await.unwrap();
        registry.put("a", ConversationState::new()).await.unwrap();

        assert_eq!(registry.get("a").await.unwrap(), Some(ConversationState::new()));
        assert_eq!(registry.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn remove_returns_the_entry_once() {
        let registry = InMemoryConversationRegistry::new();
        registry.put("a", answered(3)).await.unwrap();

        assert_eq!(registry.remove("a").await.unwrap(), Some(answered(3)));
        assert_eq!(registry.remove("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn identifiers_are_independent() {
        let registry = InMemoryConversationRegistry::new();
        registry.put("a", answered(1)).await.unwrap();
        registry.put("b", answered(4)).await.unwrap();

        assert_eq!(registry.get("a").await.unwrap().map(|s| s.cursor()), Some(1));
        assert_eq!(registry.get("b").await.unwrap().map(|s| s.cursor()), Some(4));
    }

    #[tokio::test]
    async fn clear_reports_count() {
        let registry = InMemoryConversationRegistry::new();
        registry.put("a", answered(0)).await.unwrap();
        registry.put("b", answered(0)).await.unwrap();

        assert_eq!(registry.clear().await.unwrap(), 2);
        assert_eq!(registry.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn clones_share_the_table() {
        let registry = InMemoryConversationRegistry::new();
        let handle = registry.clone();
        handle.put("shared", answered(1)).await.unwrap();
        assert!(registry.get("shared").await.unwrap().is_some());
    }
}
