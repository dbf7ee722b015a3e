use chrono::{DateTime, Utc};
use deskwing_protocol::events::ShellEvent;
use deskwing_protocol::{EventName, WindowLabel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single record on the event bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Monotonic sequence number (cursor), assigned by the store.
    /// Used for incremental consumption and replay.
    pub cursor: i64,

    /// Unique id of this emission.
    pub id: Uuid,

    /// Registry name the event was published under.
    pub name: EventName,

    /// Emission timestamp.
    pub time: DateTime<Utc>,

    /// Window that raised the event. `None` for events originating in the
    /// native shell itself (e.g. capability signals).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowLabel>,

    /// Event payload as defined by the protocol crate. `Null` for
    /// payload-less events.
    pub payload: serde_json::Value,
}

impl EventEnvelope {
    /// Create a new envelope (cursor will be assigned by the store).
    pub fn new(name: EventName, window: Option<WindowLabel>, payload: serde_json::Value) -> Self {
        Self {
            cursor: 0, // assigned by store
            id: Uuid::new_v4(),
            name,
            time: Utc::now(),
            window,
            payload,
        }
    }

    /// Create an envelope from a typed event.
    pub fn from_event(event: ShellEvent, window: Option<WindowLabel>) -> Self {
        let (name, payload) = event.into_parts();
        Self::new(name, window, payload)
    }
}

#[cfg(test)]
mod tests {
    use deskwing_protocol::events::{NotifyLevel, NotifyPayload};

    use super::*;

    #[test]
    fn from_event_carries_name_and_payload() {
        let envelope = EventEnvelope::from_event(
            ShellEvent::Notify(NotifyPayload {
                level: NotifyLevel::Info,
                message: "ready".to_string(),
            }),
            Some(WindowLabel::Main),
        );
        assert_eq!(envelope.cursor, 0);
        assert_eq!(envelope.name, EventName::Notify);
        assert_eq!(envelope.window, Some(WindowLabel::Main));
        assert_eq!(envelope.payload["message"], "ready");
    }

    #[test]
    fn envelope_serializes_wire_name() {
        let envelope = EventEnvelope::new(EventName::MouseEnterFloating, None, serde_json::Value::Null);
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains(r#""name":"mouse-enter-floating""#));
        assert!(!json.contains("window"));
    }
}
