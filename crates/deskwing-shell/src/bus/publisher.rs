use std::sync::Arc;

use anyhow::Result;
use deskwing_protocol::WindowLabel;
use deskwing_protocol::events::ShellEvent;
use tokio::sync::broadcast;

use super::store::EventStore;
use super::types::EventEnvelope;

/// Event Publisher
///
/// Publishes events to both:
/// 1. The in-memory store (assigns cursors, serves polling/replay)
/// 2. A broadcast channel (for real-time subscribers)
pub struct EventPublisher {
    store: Arc<dyn EventStore>,
    broadcaster: broadcast::Sender<EventEnvelope>,
}

impl EventPublisher {
    /// Lagged subscribers are notified via `RecvError::Lagged`.
    pub fn new(store: Arc<dyn EventStore>, channel_capacity: usize) -> Self {
        let (broadcaster, _) = broadcast::channel(channel_capacity.max(1));
        Self { store, broadcaster }
    }

    /// Emit a pre-built envelope.
    ///
    /// Appends to the store (assigns the cursor), then broadcasts to
    /// real-time subscribers best-effort. Returns the assigned cursor.
    pub async fn emit(&self, mut envelope: EventEnvelope) -> Result<i64> {
        let cursor = self.store.append(&mut envelope).await?;

        tracing::debug!(
            name = %envelope.name,
            cursor = cursor,
            window = envelope.window.map(|w| w.as_str()),
            "event emitted"
        );

        // No receivers is not an error
        let _ = self.broadcaster.send(envelope);

        Ok(cursor)
    }

    /// Emit a typed event raised by one of the shell windows.
    pub async fn emit_event(&self, event: ShellEvent, window: WindowLabel) -> Result<i64> {
        self.emit(EventEnvelope::from_event(event, Some(window))).await
    }

    /// Subscribe to real-time events.
    ///
    /// The receiver only sees events emitted after this call. Use
    /// [`super::EventSubscriber`] to catch up on history first.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.broadcaster.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use deskwing_protocol::EventName;
    use deskwing_protocol::events::{Theme, ThemeChangedPayload};

    use super::super::store::MemoryEventStore;
    use super::*;

    fn publisher() -> EventPublisher {
        EventPublisher::new(Arc::new(MemoryEventStore::new(64)), 16)
    }

    #[tokio::test]
    async fn emit_assigns_cursor_and_broadcasts() {
        let publisher = publisher();
        let mut rx = publisher.subscribe();

        let cursor = publisher
            .emit_event(
                ShellEvent::ThemeChanged(ThemeChangedPayload { theme: Theme::Light }),
                WindowLabel::Settings,
            )
            .await
            .unwrap();
        assert_eq!(cursor, 1);

        let received = rx.recv().await.unwrap();
        assert_eq!(received.cursor, 1);
        assert_eq!(received.name, EventName::ThemeChanged);
        assert_eq!(received.window, Some(WindowLabel::Settings));
        assert_eq!(received.payload["theme"], "light");
    }

    #[tokio::test]
    async fn emit_without_subscribers_still_stores() {
        let publisher = publisher();

        let first = publisher
            .emit_event(ShellEvent::MouseEnterFloating, WindowLabel::Floating)
            .await
            .unwrap();
        let second = publisher
            .emit_event(ShellEvent::MouseLeaveFloating, WindowLabel::Floating)
            .await
            .unwrap();
        assert_eq!((first, second), (1, 2));
    }
}
