use std::collections::VecDeque;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deskwing_protocol::EventName;
use tokio::sync::RwLock;

use super::types::EventEnvelope;

/// Event store for polling and replay.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append a new envelope (returns assigned cursor)
    async fn append(&self, envelope: &mut EventEnvelope) -> Result<i64>;

    /// Query envelopes by cursor range, ascending
    async fn query(
        &self,
        from_cursor: i64,
        to_cursor: Option<i64>,
        names: Option<&[EventName]>,
        limit: Option<usize>,
    ) -> Result<Vec<EventEnvelope>>;

    /// Get latest cursor
    async fn latest_cursor(&self) -> Result<i64>;

    /// Delete envelopes older than timestamp (for retention policy)
    async fn prune_before(&self, before: DateTime<Utc>) -> Result<u64>;
}

struct StoreInner {
    next_cursor: i64,
    records: VecDeque<EventEnvelope>,
}

/// Bounded in-memory implementation of [`EventStore`].
///
/// A desktop process has no durability requirement, so the store is a ring
/// buffer: once `capacity` is exceeded the oldest records are evicted.
/// Cursors keep increasing across eviction, so a subscriber polling from an
/// evicted cursor simply resumes at the oldest retained record.
pub struct MemoryEventStore {
    capacity: usize,
    inner: RwLock<StoreInner>,
}

impl MemoryEventStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(StoreInner {
                next_cursor: 1,
                records: VecDeque::new(),
            }),
        }
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn append(&self, envelope: &mut EventEnvelope) -> Result<i64> {
        let mut inner = self.inner.write().await;

        let cursor = inner.next_cursor;
        inner.next_cursor += 1;
        envelope.cursor = cursor;

        inner.records.push_back(envelope.clone());
        while inner.records.len() > self.capacity {
            inner.records.pop_front();
        }

        Ok(cursor)
    }

    async fn query(
        &self,
        from_cursor: i64,
        to_cursor: Option<i64>,
        names: Option<&[EventName]>,
        limit: Option<usize>,
    ) -> Result<Vec<EventEnvelope>> {
        let inner = self.inner.read().await;
        let limit = limit.unwrap_or(1000).min(10000);

        let records = inner
            .records
            .iter()
            .filter(|record| record.cursor > from_cursor)
            .filter(|record| to_cursor.is_none_or(|to| record.cursor <= to))
            .filter(|record| names.is_none_or(|names| names.contains(&record.name)))
            .take(limit)
            .cloned()
            .collect();

        Ok(records)
    }

    async fn latest_cursor(&self) -> Result<i64> {
        let inner = self.inner.read().await;
        Ok(inner.next_cursor - 1)
    }

    async fn prune_before(&self, before: DateTime<Utc>) -> Result<u64> {
        let mut inner = self.inner.write().await;
        let len_before = inner.records.len();
        inner.records.retain(|record| record.time >= before);
        Ok((len_before - inner.records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use deskwing_protocol::WindowLabel;
    use serde_json::json;

    use super::*;

    fn envelope(name: EventName) -> EventEnvelope {
        EventEnvelope::new(name, Some(WindowLabel::Main), json!({}))
    }

    #[tokio::test]
    async fn append_assigns_increasing_cursors() {
        let store = MemoryEventStore::new(16);

        let mut first = envelope(EventName::ThemeChanged);
        let mut second = envelope(EventName::Notify);
        assert_eq!(store.append(&mut first).await.unwrap(), 1);
        assert_eq!(store.append(&mut second).await.unwrap(), 2);
        assert_eq!(first.cursor, 1);
        assert_eq!(second.cursor, 2);
        assert_eq!(store.latest_cursor().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn query_filters_by_cursor_and_name() {
        let store = MemoryEventStore::new(16);
        for name in [
            EventName::ThemeChanged,
            EventName::Notify,
            EventName::ThemeChanged,
            EventName::TaskStatusChanged,
        ] {
            store.append(&mut envelope(name)).await.unwrap();
        }

        let all = store.query(0, None, None, None).await.unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].cursor < w[1].cursor));

        let after_two = store.query(2, None, None, None).await.unwrap();
        assert_eq!(after_two.len(), 2);

        let themes = store
            .query(0, None, Some(&[EventName::ThemeChanged]), None)
            .await
            .unwrap();
        assert_eq!(themes.len(), 2);
        assert!(themes.iter().all(|r| r.name == EventName::ThemeChanged));

        let bounded = store.query(1, Some(3), None, None).await.unwrap();
        assert_eq!(bounded.len(), 2);
        assert_eq!(bounded.last().unwrap().cursor, 3);

        let limited = store.query(0, None, None, Some(1)).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].cursor, 1);
    }

    #[tokio::test]
    async fn eviction_keeps_cursors_monotonic() {
        let store = MemoryEventStore::new(2);
        for _ in 0..5 {
            store.append(&mut envelope(EventName::Notify)).await.unwrap();
        }

        assert_eq!(store.latest_cursor().await.unwrap(), 5);
        let retained = store.query(0, None, None, None).await.unwrap();
        assert_eq!(retained.len(), 2);
        assert_eq!(retained[0].cursor, 4);
        assert_eq!(retained[1].cursor, 5);
    }

    #[tokio::test]
    async fn prune_before_drops_old_records() {
        let store = MemoryEventStore::new(16);
        store.append(&mut envelope(EventName::Notify)).await.unwrap();
        store.append(&mut envelope(EventName::Notify)).await.unwrap();

        let pruned = store.prune_before(Utc::now()).await.unwrap();
        assert_eq!(pruned, 2);
        assert!(store.query(0, None, None, None).await.unwrap().is_empty());
        // Cursor is not reset by pruning
        assert_eq!(store.latest_cursor().await.unwrap(), 2);
    }
}
