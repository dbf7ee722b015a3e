//! Shared definitions for the deskwing desktop shell: the closed event-name
//! registry, typed event payloads, and the declarative navigation route table.
//!
//! Everything in this crate is pure data. The publish/subscribe runtime lives
//! in `deskwing-shell`.

pub mod events;
pub mod routes;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use events::{EventName, ShellEvent};
pub use routes::{Route, RouteMeta, RouteTable};

/// Raised when a string outside the closed event enumeration is parsed.
///
/// This is a programmer-facing error: event names are fixed at build time,
/// so hitting this means a call site hand-typed a literal instead of going
/// through [`EventName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event name: {0}")]
pub struct UnknownEventName(pub String);

/// Window labels of the shell (from the window manager's registry).
///
/// Events carried on the bus are tagged with the window that raised them;
/// routes declare which window renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowLabel {
    Main,
    Floating,
    Settings,
}

impl WindowLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowLabel::Main => "main",
            WindowLabel::Floating => "floating",
            WindowLabel::Settings => "settings",
        }
    }
}
