// Event Bus
//
// In-process publish/subscribe for the shell. Events are appended to a
// bounded in-memory store (cursor-ordered, for polling and replay) and
// broadcast to real-time subscribers.

pub mod publisher;
pub mod store;
pub mod subscriber;
pub mod types;

pub use publisher::EventPublisher;
pub use store::{EventStore, MemoryEventStore};
pub use subscriber::EventSubscriber;
pub use types::EventEnvelope;
