use async_trait::async_trait;

use crate::domain::organizer::EventEnvelope;

/// Port for delivering domain events after a successful commit
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, events: &[EventEnvelope]);
}

/// Publishes events as structured log records
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, events: &[EventEnvelope]) {
        for envelope in events {
            tracing::info!(
                event_id = %envelope.event_id,
                event_type = envelope.event.event_type(),
                organizer_id = %envelope.event.organizer_id(),
                sequence = envelope.sequence,
                payload = %envelope.to_payload(),
                "Domain event published"
            );
        }
    }
}
