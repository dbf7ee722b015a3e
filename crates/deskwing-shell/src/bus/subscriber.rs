use std::sync::Arc;

use anyhow::Result;
use deskwing_protocol::EventName;

use super::store::EventStore;
use super::types::EventEnvelope;

/// Event Subscriber
///
/// Cursor-based access to stored events. For real-time delivery use
/// `EventPublisher::subscribe()`; the usual pattern is to poll from the last
/// seen cursor on window reload, then switch to the broadcast channel.
pub struct EventSubscriber {
    store: Arc<dyn EventStore>,
}

impl EventSubscriber {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Poll events since last cursor.
    ///
    /// Returns all retained events with cursor > from_cursor, up to limit.
    pub async fn poll(
        &self,
        from_cursor: i64,
        names: Option<&[EventName]>,
        limit: Option<usize>,
    ) -> Result<Vec<EventEnvelope>> {
        self.store.query(from_cursor, None, names, limit).await
    }

    /// Get latest cursor (for initialization)
    pub async fn latest_cursor(&self) -> Result<i64> {
        self.store.latest_cursor().await
    }

    /// Replay events between two cursors (for debugging and analysis)
    pub async fn replay(
        &self,
        from_cursor: i64,
        to_cursor: i64,
        names: Option<&[EventName]>,
    ) -> Result<Vec<EventEnvelope>> {
        self.store.query(from_cursor, Some(to_cursor), names, None).await
    }
}

#[cfg(test)]
mod tests {
    use deskwing_protocol::WindowLabel;
    use serde_json::json;

    use super::super::store::MemoryEventStore;
    use super::*;

    async fn seeded_store() -> Arc<MemoryEventStore> {
        let store = Arc::new(MemoryEventStore::new(64));
        for name in [
            EventName::TaskExecutionStarted,
            EventName::TaskStatusChanged,
            EventName::TaskExecutionCompleted,
        ] {
            let mut envelope = EventEnvelope::new(name, Some(WindowLabel::Main), json!({}));
            store.append(&mut envelope).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn poll_resumes_from_cursor() {
        let subscriber = EventSubscriber::new(seeded_store().await);

        assert_eq!(subscriber.latest_cursor().await.unwrap(), 3);

        let fresh = subscriber.poll(0, None, None).await.unwrap();
        assert_eq!(fresh.len(), 3);

        let resumed = subscriber.poll(2, None, None).await.unwrap();
        assert_eq!(resumed.len(), 1);
        assert_eq!(resumed[0].name, EventName::TaskExecutionCompleted);
    }

    #[tokio::test]
    async fn replay_respects_bounds_and_names() {
        let subscriber = EventSubscriber::new(seeded_store().await);

        let window = subscriber.replay(1, 3, None).await.unwrap();
        assert_eq!(window.len(), 2);

        let only_status = subscriber
            .replay(0, 3, Some(&[EventName::TaskStatusChanged]))
            .await
            .unwrap();
        assert_eq!(only_status.len(), 1);
        assert_eq!(only_status[0].cursor, 2);
    }
}
