//! Capability relay
//!
//! The native shell reports whether the assistant can operate the machine
//! (accessibility permission granted, automation engine ready). This module
//! watches that signal and republishes transitions on the event bus as
//! `can-work-changed`, so UI components never talk to the shell directly.

use std::sync::Arc;

use anyhow::Result;
use deskwing_protocol::events::{CanWorkChangedPayload, ShellEvent};
use tokio::sync::{RwLock, watch};
use tracing::{info, warn};

use crate::bus::{EventEnvelope, EventPublisher};

/// Current capability of the native shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapabilityState {
    pub can_work: bool,
    /// Explanation when `can_work` is false.
    pub reason: Option<String>,
}

impl CapabilityState {
    pub fn ready() -> Self {
        Self {
            can_work: true,
            reason: None,
        }
    }

    pub fn blocked(reason: impl Into<String>) -> Self {
        Self {
            can_work: false,
            reason: Some(reason.into()),
        }
    }
}

/// Background service relaying capability transitions onto the bus.
///
/// Only transitions are published: if the shell re-reports an unchanged
/// state, nothing is emitted.
pub struct CapabilityRelay {
    publisher: Arc<EventPublisher>,
    signal: watch::Receiver<CapabilityState>,
    active: Arc<RwLock<bool>>,
}

impl CapabilityRelay {
    pub fn new(publisher: Arc<EventPublisher>, signal: watch::Receiver<CapabilityState>) -> Self {
        Self {
            publisher,
            signal,
            active: Arc::new(RwLock::new(false)),
        }
    }

    /// Start the relay (spawns background task)
    pub async fn start(&self) -> Result<()> {
        if *self.active.read().await {
            warn!("capability relay already running");
            return Ok(());
        }

        *self.active.write().await = true;

        let publisher = self.publisher.clone();
        let mut signal = self.signal.clone();
        let active = self.active.clone();

        // Baseline is captured before the task runs, so a transition sent
        // right after start() is always observed as a change.
        let mut last = signal.borrow().clone();

        tokio::spawn(async move {
            info!("capability relay started");

            while *active.read().await {
                if signal.changed().await.is_err() {
                    // Shell side dropped the sender
                    break;
                }

                let state = signal.borrow_and_update().clone();
                if state == last {
                    continue;
                }
                last = state.clone();

                info!(can_work = state.can_work, reason = ?state.reason, "capability changed");

                let event = ShellEvent::CanWorkChanged(CanWorkChangedPayload {
                    can_work: state.can_work,
                    reason: state.reason,
                });
                if let Err(e) = publisher.emit(EventEnvelope::from_event(event, None)).await {
                    warn!(error = %e, "failed to publish capability change");
                }
            }

            info!("capability relay stopped");
        });

        Ok(())
    }

    /// Stop the relay
    pub async fn stop(&self) {
        *self.active.write().await = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_state_constructors() {
        let ready = CapabilityState::ready();
        assert!(ready.can_work);
        assert!(ready.reason.is_none());

        let blocked = CapabilityState::blocked("accessibility permission missing");
        assert!(!blocked.can_work);
        assert_eq!(
            blocked.reason.as_deref(),
            Some("accessibility permission missing")
        );
    }
}
