//! Runtime services of the deskwing shell: the in-process event bus, the
//! capability relay bridging native-shell signals onto it, configuration
//! loading, and logging setup.
//!
//! Event names and payload shapes come from `deskwing-protocol`; nothing in
//! this crate hand-types an event string.

pub mod bus;
pub mod capability;
pub mod config;
pub mod logging;

pub use bus::{EventEnvelope, EventPublisher, EventStore, EventSubscriber, MemoryEventStore};
pub use capability::{CapabilityRelay, CapabilityState};
pub use config::Settings;
