use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain events raised by the Organizer aggregate
///
/// Events carry enough data for downstream consumers to react without
/// reloading the aggregate.
///
/// # Example
/// ```
/// use tournament_organizer::domain::organizer::OrganizerEvent;
/// use uuid::Uuid;
///
/// let organizer_id = Uuid::new_v4();
/// let event = OrganizerEvent::OrganizerCreated {
///     organizer_id,
///     full_name: "Ada Lovelace".to_string(),
///     email: "ada@example.com".to_string(),
/// };
///
/// assert_eq!(event.organizer_id(), organizer_id);
/// assert_eq!(event.event_type(), "organizer_created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrganizerEvent {
    /// Fired when an organizer is created
    OrganizerCreated {
        organizer_id: Uuid,
        full_name: String,
        email: String,
    },
    /// Fired when an organizer finishes its tournament
    TournamentFinished {
        organizer_id: Uuid,
        tournament_id: Uuid,
        tournament_name: String,
        /// Teams detached from the tournament when it finished
        released_team_ids: Vec<Uuid>,
    },
}

impl OrganizerEvent {
    /// Returns the organizer_id for this event
    pub fn organizer_id(&self) -> Uuid {
        match self {
            OrganizerEvent::OrganizerCreated { organizer_id, .. } => *organizer_id,
            OrganizerEvent::TournamentFinished { organizer_id, .. } => *organizer_id,
        }
    }

    /// Stable name used to route the event
    pub fn event_type(&self) -> &'static str {
        match self {
            OrganizerEvent::OrganizerCreated { .. } => "organizer_created",
            OrganizerEvent::TournamentFinished { .. } => "tournament_finished",
        }
    }
}

/// Event plus the metadata recorded when the aggregate raised it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: Uuid,
    /// Position within the raising aggregate instance, starting at 1
    pub sequence: u64,
    pub occurred_at: DateTime<Utc>,
    pub event: OrganizerEvent,
}

impl EventEnvelope {
    pub(crate) fn new(sequence: u64, event: OrganizerEvent) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            sequence,
            occurred_at: Utc::now(),
            event,
        }
    }

    /// Serializes the envelope to a JSON payload for publishing
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "event_id": self.event_id,
            "event_type": self.event.event_type(),
            "organizer_id": self.event.organizer_id(),
            "sequence": self.sequence,
            "occurred_at": self.occurred_at,
            "data": self.event,
        })
    }
}
