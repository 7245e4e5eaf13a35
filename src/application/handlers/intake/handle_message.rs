//! HandleMessage command handler - one step of an intake conversation.
//!
//! Resolves the conversation, applies the answer to the pending field and
//! either re-asks, asks the next question, or hands the finished record
//! off for persistence and enrichment.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use super::{KeyedLocks, VenueEnricher};
use crate::domain::enrichment::EnrichedVenue;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::intake::{
    is_start_command, ConversationState, Field, IntakeRecord, StepOutcome, START_INSTRUCTION,
    VENUES_FOUND,
};
use crate::ports::{Clock, ConversationRegistry, IntakeRecordSink, RegistryError};

/// Command carrying one user message.
#[derive(Debug, Clone)]
pub struct HandleMessageCommand {
    /// Conversation to address; blank or absent means the shared default.
    pub conversation_id: Option<String>,
    pub message: String,
}

impl HandleMessageCommand {
    pub fn new(conversation_id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            conversation_id,
            message: message.into(),
        }
    }
}

/// What kind of reply the caller receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    /// A prompt for the next answer (or the start instruction).
    Question,
    /// The answer was rejected; the message re-asks the same field.
    Error,
    /// The intake is finished; `venues` is populated.
    Venues,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntakeReply {
    pub kind: ReplyKind,
    pub message: String,
    pub venues: Option<Vec<EnrichedVenue>>,
    pub timestamp: Timestamp,
}

/// Failures that are not part of the conversation itself.
#[derive(Debug, Error)]
pub enum HandleMessageError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid conversation state: {0}")]
    InvalidState(#[from] ValidationError),
}

pub struct IntakeOrchestrator {
    registry: Arc<dyn ConversationRegistry>,
    records: Arc<dyn IntakeRecordSink>,
    enricher: Arc<VenueEnricher>,
    clock: Arc<dyn Clock>,
    locks: KeyedLocks,
    default_conversation_id: String,
}

impl IntakeOrchestrator {
    pub fn new(
        registry: Arc<dyn ConversationRegistry>,
        records: Arc<dyn IntakeRecordSink>,
        enricher: Arc<VenueEnricher>,
        clock: Arc<dyn Clock>,
        default_conversation_id: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            records,
            enricher,
            clock,
            locks: KeyedLocks::new(),
            default_conversation_id: default_conversation_id.into(),
        }
    }

    /// Identifier used when a command names none.
    pub fn default_conversation_id(&self) -> &str {
        &self.default_conversation_id
    }

    pub async fn handle(&self, cmd: HandleMessageCommand) -> Result<IntakeReply, HandleMessageError> {
        let conversation_id = cmd
            .conversation_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| self.default_conversation_id.clone());

        let guard = self.locks.lock(&conversation_id).await;

        if is_start_command(&cmd.message) {
            let restarted = self.registry.get(&conversation_id).await?.is_some();
            self.registry
                .put(&conversation_id, ConversationState::new())
                .await?;
            tracing::debug!(%conversation_id, restarted, "conversation started");
            return Ok(self.reply(ReplyKind::Question, Field::EventType.prompt()));
        }

        let Some(mut state) = self.registry.get(&conversation_id).await? else {
            tracing::debug!(%conversation_id, "message for unknown conversation");
            return Ok(self.reply(ReplyKind::Question, START_INSTRUCTION));
        };

        match state.answer(&cmd.message, self.clock.today())? {
            StepOutcome::Rejected { field, reason } => {
                tracing::debug!(%conversation_id, %field, "answer rejected");
                Ok(self.reply(ReplyKind::Error, format!("{}{}", reason, field.prompt())))
            }
            StepOutcome::Advanced { accepted, next } => {
                self.registry.put(&conversation_id, state).await?;
                tracing::debug!(%conversation_id, field = %accepted, "answer accepted");
                Ok(self.reply(ReplyKind::Question, next.prompt()))
            }
            StepOutcome::Completed(record) => {
                self.registry.remove(&conversation_id).await?;
                drop(guard);
                Ok(self.hand_off(&conversation_id, record).await)
            }
        }
    }

    /// Persists and enriches a finished record. Never fails.
    async fn hand_off(&self, conversation_id: &str, record: IntakeRecord) -> IntakeReply {
        let handoff_id = Uuid::new_v4();

        if let Err(err) = self.records.append(&record).await {
            tracing::error!(%handoff_id, error = %err, "failed to persist intake record");
        }

        let venues = self.enricher.enrich(&record, handoff_id).await;
        tracing::info!(
            %handoff_id,
            conversation_id,
            venue_count = venues.len(),
            "intake handed off"
        );

        IntakeReply {
            venues: Some(venues),
            ..self.reply(ReplyKind::Venues, VENUES_FOUND)
        }
    }

    fn reply(&self, kind: ReplyKind, message: impl Into<String>) -> IntakeReply {
        IntakeReply {
            kind,
            message: message.into(),
            venues: None,
            timestamp: Timestamp::from_datetime(self.clock.now()),
        }
    }
}
