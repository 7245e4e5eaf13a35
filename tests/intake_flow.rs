//! Integration tests for the intake conversation lifecycle.
//!
//! These drive the orchestrator through its public API with in-memory
//! registry and sink adapters plus hand-written collaborator mocks.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use event_intake::adapters::ai::MockVenueGenerator;
use event_intake::adapters::clock::FixedClock;
use event_intake::adapters::conditions::RandomConditionsProvider;
use event_intake::adapters::registry::InMemoryConversationRegistry;
use event_intake::adapters::storage::{InMemoryRecordSink, JsonLinesRecordLog};
use event_intake::application::handlers::{
    HandleMessageCommand, IntakeOrchestrator, IntakeReply, ReplyKind, VenueEnricher,
};
use event_intake::domain::enrichment::{TrafficSummary, Venue};
use event_intake::domain::intake::{Field, START_INSTRUCTION};
use event_intake::ports::{
    ConversationRegistry, IntakeRecordSink, TrafficError, TrafficProvider, VenueError,
    VenueGenerator,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const ANSWERS: [&str; 6] = ["Conference", "Boston", "tomorrow", "2:30 PM", "$1,200", "80"];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Traffic mock that fails for destinations containing a marker and
/// records every destination it was asked about.
struct SelectiveTraffic {
    fail_marker: &'static str,
    destinations: Mutex<Vec<String>>,
}

impl SelectiveTraffic {
    fn failing_on(fail_marker: &'static str) -> Self {
        Self {
            fail_marker,
            destinations: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TrafficProvider for SelectiveTraffic {
    async fn lookup(
        &self,
        _city: &str,
        destination: &str,
        _date: NaiveDate,
    ) -> Result<TrafficSummary, TrafficError> {
        self.destinations.lock().unwrap().push(destination.to_string());
        if destination.contains(self.fail_marker) {
            Err(TrafficError::Network("connection reset".into()))
        } else {
            Ok(TrafficSummary::default())
        }
    }
}

struct Harness {
    orchestrator: IntakeOrchestrator,
    registry: InMemoryConversationRegistry,
}

impl Harness {
    fn build(
        generator: Arc<dyn VenueGenerator>,
        traffic: Arc<dyn TrafficProvider>,
        records: Arc<dyn IntakeRecordSink>,
    ) -> Self {
        let registry = InMemoryConversationRegistry::new();
        let enricher = VenueEnricher::new(
            generator,
            traffic,
            Arc::new(RandomConditionsProvider::with_seed(42)),
        );
        let orchestrator = IntakeOrchestrator::new(
            Arc::new(registry.clone()),
            records,
            Arc::new(enricher),
            Arc::new(FixedClock::on(today())),
            "default_user",
        );
        Self {
            orchestrator,
            registry,
        }
    }

    fn standard() -> Self {
        Self::build(
            Arc::new(MockVenueGenerator::new()),
            Arc::new(SelectiveTraffic::failing_on("\u{0}")),
            Arc::new(InMemoryRecordSink::new()),
        )
    }

    async fn send(&self, id: &str, message: &str) -> IntakeReply {
        self.orchestrator
            .handle(HandleMessageCommand::new(Some(id.to_string()), message))
            .await
            .unwrap()
    }

    async fn cursor(&self, id: &str) -> Option<usize> {
        self.registry
            .get(id)
            .await
            .unwrap()
            .map(|state| state.cursor())
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn full_sequence_yields_seven_replies_and_removes_entry() {
    let harness = Harness::standard();

    let mut replies = vec![harness.send("alice", "start").await];
    for answer in ANSWERS {
        replies.push(harness.send("alice", answer).await);
    }

    assert_eq!(replies.len(), 7);
    for (reply, field) in replies.iter().zip(Field::ALL) {
        assert_eq!(reply.kind, ReplyKind::Question);
        assert_eq!(reply.message, field.prompt());
    }
    let last = replies.last().unwrap();
    assert_eq!(last.kind, ReplyKind::Venues);
    assert!(!last.venues.as_ref().unwrap().is_empty());
    assert_eq!(harness.cursor("alice").await, None);
}

#[tokio::test]
async fn message_after_completion_asks_to_start_again() {
    let harness = Harness::standard();
    harness.send("alice", "start").await;
    for answer in ANSWERS {
        harness.send("alice", answer).await;
    }

    let reply = harness.send("alice", "Wedding").await;

    assert_eq!(reply.kind, ReplyKind::Question);
    assert_eq!(reply.message, START_INSTRUCTION);
    assert_eq!(harness.cursor("alice").await, None);
}

#[tokio::test]
async fn repeated_rejections_behave_like_a_single_valid_answer() {
    let retried = Harness::standard();
    retried.send("a", "start").await;
    retried.send("a", "Gala").await;
    for _ in 0..4 {
        let reply = retried.send("a", "x").await;
        assert_eq!(reply.kind, ReplyKind::Error);
        assert!(reply.message.ends_with(Field::Location.prompt()));
    }
    retried.send("a", "Chicago").await;

    let direct = Harness::standard();
    direct.send("a", "start").await;
    direct.send("a", "Gala").await;
    direct.send("a", "Chicago").await;

    assert_eq!(
        retried.registry.get("a").await.unwrap(),
        direct.registry.get("a").await.unwrap()
    );
}

#[tokio::test]
async fn start_mid_sequence_discards_answers() {
    let harness = Harness::standard();
    harness.send("bob", "start").await;
    harness.send("bob", "Birthday").await;
    harness.send("bob", "Denver").await;
    assert_eq!(harness.cursor("bob").await, Some(2));

    let reply = harness.send("bob", "START").await;

    assert_eq!(reply.message, Field::EventType.prompt());
    let state = harness.registry.get("bob").await.unwrap().unwrap();
    assert_eq!(state.cursor(), 0);
    assert_eq!(state.values().count(), 0);
}

#[tokio::test]
async fn past_date_is_rejected_without_advancing() {
    let harness = Harness::standard();
    harness.send("c", "start").await;
    harness.send("c", "Wedding").await;
    harness.send("c", "Austin").await;

    let reply = harness.send("c", "01/06/2020").await;

    assert_eq!(reply.kind, ReplyKind::Error);
    assert!(reply.message.ends_with(Field::Date.prompt()));
    assert_eq!(harness.cursor("c").await, Some(2));
}

// =============================================================================
// Enrichment degradation
// =============================================================================

#[tokio::test]
async fn traffic_failure_for_one_venue_does_not_affect_others() {
    let generator = MockVenueGenerator::new().with_venues(vec![
        Venue::new("Good Hall", "1 Main St", "100", vec![], "test"),
        Venue::new("Bad Hall", "FAIL 2 Side St", "200", vec![], "test"),
        Venue::new("Fine Loft", "3 High St", "150", vec![], "test"),
    ]);
    let traffic = Arc::new(SelectiveTraffic::failing_on("FAIL"));
    let harness = Harness::build(
        Arc::new(generator),
        traffic.clone(),
        Arc::new(InMemoryRecordSink::new()),
    );

    harness.send("d", "start").await;
    let mut last = None;
    for answer in ANSWERS {
        last = Some(harness.send("d", answer).await);
    }
    let reply = last.unwrap();

    assert_eq!(reply.kind, ReplyKind::Venues);
    let venues = reply.venues.unwrap();
    assert_eq!(venues.len(), 3);
    for venue in &venues {
        assert!(venue.weather_data.is_some());
        assert!(venue.safety_data.is_some());
        assert!(venue.accessibility_score.is_some());
        if venue.venue.name == "Bad Hall" {
            assert!(venue.traffic.is_none());
        } else {
            assert!(venue.traffic.is_some(), "{} lost its traffic", venue.venue.name);
        }
    }
    assert_eq!(traffic.destinations.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn generator_failure_still_completes_with_sentinel() {
    let generator =
        MockVenueGenerator::new().with_error(VenueError::unavailable("upstream is down"));
    let traffic = Arc::new(SelectiveTraffic::failing_on("\u{0}"));
    let harness = Harness::build(
        Arc::new(generator),
        traffic.clone(),
        Arc::new(InMemoryRecordSink::new()),
    );

    harness.send("e", "start").await;
    let mut last = None;
    for answer in ANSWERS {
        last = Some(harness.send("e", answer).await);
    }
    let reply = last.unwrap();

    assert_eq!(reply.kind, ReplyKind::Venues);
    let venues = reply.venues.unwrap();
    assert_eq!(venues.len(), 1);
    assert!(venues[0].venue.is_unavailable());
    assert!(!venues[0].is_enriched());
    assert!(traffic.destinations.lock().unwrap().is_empty());
    assert_eq!(harness.cursor("e").await, None);
}

#[tokio::test]
async fn persistence_failure_is_hidden_from_the_caller() {
    let harness = Harness::build(
        Arc::new(MockVenueGenerator::new()),
        Arc::new(SelectiveTraffic::failing_on("\u{0}")),
        Arc::new(InMemoryRecordSink::failing()),
    );

    harness.send("f", "start").await;
    let mut last = None;
    for answer in ANSWERS {
        last = Some(harness.send("f", answer).await);
    }

    assert_eq!(last.unwrap().kind, ReplyKind::Venues);
    assert_eq!(harness.cursor("f").await, None);
}

#[tokio::test]
async fn finished_record_is_appended_to_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = Arc::new(JsonLinesRecordLog::new(dir.path().join("event_data.json")));
    let harness = Harness::build(
        Arc::new(MockVenueGenerator::new()),
        Arc::new(SelectiveTraffic::failing_on("\u{0}")),
        log.clone(),
    );

    harness.send("g", "start").await;
    for answer in ANSWERS {
        harness.send("g", answer).await;
    }

    let records = log.list().await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.event_type, "conference");
    assert_eq!(record.location, "Boston");
    assert_eq!(record.date, "2024-06-02");
    assert_eq!(record.time, "14:30");
    assert_eq!(record.budget, "1200");
    assert_eq!(record.attendees, "80");
}

// =============================================================================
// Identifiers
// =============================================================================

#[tokio::test]
async fn missing_identifier_shares_the_default_conversation() {
    let harness = Harness::standard();

    harness
        .orchestrator
        .handle(HandleMessageCommand::new(None, "start"))
        .await
        .unwrap();
    harness
        .orchestrator
        .handle(HandleMessageCommand::new(Some("  ".into()), "Wedding"))
        .await
        .unwrap();

    assert_eq!(harness.cursor("default_user").await, Some(1));
}

#[tokio::test]
async fn concurrent_conversations_stay_isolated() {
    let harness = Arc::new(Harness::standard());
    let ids: Vec<String> = (0..16).map(|i| format!("user-{}", i)).collect();

    let tasks: Vec<_> = ids
        .iter()
        .cloned()
        .map(|id| {
            let harness = Arc::clone(&harness);
            tokio::spawn(async move {
                harness.send(&id, "start").await;
                let mut kinds = HashSet::new();
                for answer in ANSWERS {
                    kinds.insert(harness.send(&id, answer).await.kind);
                }
                kinds
            })
        })
        .collect();

    for task in tasks {
        let kinds = task.await.unwrap();
        assert!(kinds.contains(&ReplyKind::Venues));
        assert!(!kinds.contains(&ReplyKind::Error));
    }
    assert_eq!(harness.registry.len().await.unwrap(), 0);
}
