//! The event-name registry and typed payload definitions.
//!
//! Every event exchanged between shell windows goes through the closed
//! [`EventName`] enumeration, so publishers and subscribers can never drift
//! apart on a hand-typed string. Payload shapes are defined next to their
//! names and tied together by [`ShellEvent`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::UnknownEventName;

// ============================================================================
// Event Name Registry
// ============================================================================

/// Canonical event names, one variant per event the shell can raise.
///
/// The set is closed: adding an event means adding a variant here, and
/// removing one (or changing a wire value) is a breaking change requiring a
/// major version bump. There is no runtime registration.
///
/// Categories:
/// - UI/presentation: theme, sticky side, floating-window hover
/// - Capability: whether the shell can operate the machine
/// - Task lifecycle: execution started/completed, status changes
/// - Messaging: responses, failures, generic notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventName {
    // UI / presentation
    #[serde(rename = "theme-changed")]
    ThemeChanged,
    #[serde(rename = "sticky-side-changed")]
    StickySideChanged,
    #[serde(rename = "mouse-enter-floating")]
    MouseEnterFloating,
    #[serde(rename = "mouse-leave-floating")]
    MouseLeaveFloating,

    // Capability
    #[serde(rename = "can-work-changed")]
    CanWorkChanged,

    // Messaging
    #[serde(rename = "message-responsed")]
    MessageResponded,
    #[serde(rename = "operate-failed")]
    OperateFailed,
    #[serde(rename = "notify")]
    Notify,

    // Task lifecycle
    #[serde(rename = "task-status-changed")]
    TaskStatusChanged,
    #[serde(rename = "task-execution-started")]
    TaskExecutionStarted,
    #[serde(rename = "task-execution-completed")]
    TaskExecutionCompleted,
}

impl EventName {
    /// The full enumeration, for snapshot tests and exhaustive listings.
    pub const ALL: [EventName; 11] = [
        EventName::ThemeChanged,
        EventName::StickySideChanged,
        EventName::MouseEnterFloating,
        EventName::MouseLeaveFloating,
        EventName::CanWorkChanged,
        EventName::MessageResponded,
        EventName::OperateFailed,
        EventName::Notify,
        EventName::TaskStatusChanged,
        EventName::TaskExecutionStarted,
        EventName::TaskExecutionCompleted,
    ];

    /// Canonical wire value for this event name.
    ///
    /// Note: `message-responsed` keeps its historical spelling; renaming a
    /// wire value would break every existing subscriber.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::ThemeChanged => "theme-changed",
            EventName::StickySideChanged => "sticky-side-changed",
            EventName::MouseEnterFloating => "mouse-enter-floating",
            EventName::MouseLeaveFloating => "mouse-leave-floating",
            EventName::CanWorkChanged => "can-work-changed",
            EventName::MessageResponded => "message-responsed",
            EventName::OperateFailed => "operate-failed",
            EventName::Notify => "notify",
            EventName::TaskStatusChanged => "task-status-changed",
            EventName::TaskExecutionStarted => "task-execution-started",
            EventName::TaskExecutionCompleted => "task-execution-completed",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|name| name.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownEventName(s.to_string()))
    }
}

// ============================================================================
// UI / Presentation Payloads
// ============================================================================

/// Color scheme selected in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Screen edge the floating window is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StickySide {
    Left,
    #[default]
    Right,
}

/// Payload for `theme-changed` - emitted when the user switches color scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeChangedPayload {
    /// The newly selected theme.
    pub theme: Theme,
}

/// Payload for `sticky-side-changed` - emitted when the floating window is
/// dragged to the other screen edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickySideChangedPayload {
    /// The edge the floating window now docks to.
    pub side: StickySide,
}

// ============================================================================
// Capability Payloads
// ============================================================================

/// Payload for `can-work-changed` - emitted when the native shell's ability
/// to operate the machine changes (accessibility permission granted/revoked,
/// automation engine ready, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanWorkChangedPayload {
    /// Whether the shell can currently execute operations.
    pub can_work: bool,
    /// Human-readable explanation when `can_work` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// ============================================================================
// Task Step Payloads
// ============================================================================

/// What a step within a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Message,
    Action,
    Screenshot,
    Analysis,
}

/// Execution state of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Kind of input operation an action step performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Click,
    Type,
    Key,
    Scroll,
    Wait,
}

/// A single step of task execution, as surfaced to the UI.
///
/// Used as the payload of both `message-responsed` (the assistant answered)
/// and `operate-failed` (an operation step went wrong).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// The task this step belongs to.
    pub task_id: u64,
    /// Content shown to the user.
    pub content: String,
    /// What this step represents.
    pub step_type: StepType,
    /// Execution state of the step.
    pub status: StepStatus,
    /// Input operation performed, for action steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,
    /// Operation coordinates as "x,y", for click/scroll actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    /// Operation data (typed text, key chord, scroll delta).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_data: Option<String>,
    /// Screenshot path or base64 content, for screenshot steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    /// Result of executing the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Error message when the step failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl Step {
    /// A plain message step, the common case for `message-responsed`.
    pub fn message(task_id: u64, content: impl Into<String>) -> Self {
        Self {
            task_id,
            content: content.into(),
            step_type: StepType::Message,
            status: StepStatus::Completed,
            action_type: None,
            coordinates: None,
            action_data: None,
            screenshot: None,
            result: None,
            error_msg: None,
        }
    }

    /// A failed action step, the common case for `operate-failed`.
    pub fn failed_action(task_id: u64, action_type: ActionType, error: impl Into<String>) -> Self {
        Self {
            task_id,
            content: String::new(),
            step_type: StepType::Action,
            status: StepStatus::Failed,
            action_type: Some(action_type),
            coordinates: None,
            action_data: None,
            screenshot: None,
            result: None,
            error_msg: Some(error.into()),
        }
    }
}

// ============================================================================
// Task Lifecycle Payloads
// ============================================================================

/// Payload for `task-status-changed` - emitted when a task's status
/// transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatusChangedPayload {
    /// The task whose status changed.
    pub task_id: u64,
    /// The previous status (e.g. "pending", "running").
    pub old_status: String,
    /// The new status after the transition.
    pub new_status: String,
}

/// Payload for `task-execution-started` - emitted when the execution engine
/// picks up a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskExecutionStartedPayload {
    /// The task that started executing.
    pub task_id: u64,
    /// Title shown in the floating window while the task runs.
    pub title: String,
}

/// Payload for `task-execution-completed` - emitted when execution finishes,
/// successfully or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskExecutionCompletedPayload {
    /// The task that finished.
    pub task_id: u64,
    /// Whether execution succeeded.
    pub success: bool,
    /// Error message when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Notification Payloads
// ============================================================================

/// Severity of a generic notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}

/// Payload for `notify` - a generic toast-style notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyPayload {
    /// Severity, used by the UI to pick icon and color.
    pub level: NotifyLevel,
    /// Message shown to the user.
    pub message: String,
}

// ============================================================================
// Shell Event Enum
// ============================================================================

/// All shell events with their structured payloads.
///
/// Serialized with `#[serde(tag = "name", content = "payload")]`, producing
/// JSON like: `{"name": "theme-changed", "payload": {...}}`. Because the
/// registry is closed there is no untyped variant; an unknown name fails
/// deserialization outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "payload")]
pub enum ShellEvent {
    // UI / presentation
    #[serde(rename = "theme-changed")]
    ThemeChanged(ThemeChangedPayload),
    #[serde(rename = "sticky-side-changed")]
    StickySideChanged(StickySideChangedPayload),
    #[serde(rename = "mouse-enter-floating")]
    MouseEnterFloating,
    #[serde(rename = "mouse-leave-floating")]
    MouseLeaveFloating,

    // Capability
    #[serde(rename = "can-work-changed")]
    CanWorkChanged(CanWorkChangedPayload),

    // Messaging
    #[serde(rename = "message-responsed")]
    MessageResponded(Step),
    #[serde(rename = "operate-failed")]
    OperateFailed(Step),
    #[serde(rename = "notify")]
    Notify(NotifyPayload),

    // Task lifecycle
    #[serde(rename = "task-status-changed")]
    TaskStatusChanged(TaskStatusChangedPayload),
    #[serde(rename = "task-execution-started")]
    TaskExecutionStarted(TaskExecutionStartedPayload),
    #[serde(rename = "task-execution-completed")]
    TaskExecutionCompleted(TaskExecutionCompletedPayload),
}

impl ShellEvent {
    /// The registry name this event is published under.
    pub fn name(&self) -> EventName {
        match self {
            ShellEvent::ThemeChanged(_) => EventName::ThemeChanged,
            ShellEvent::StickySideChanged(_) => EventName::StickySideChanged,
            ShellEvent::MouseEnterFloating => EventName::MouseEnterFloating,
            ShellEvent::MouseLeaveFloating => EventName::MouseLeaveFloating,
            ShellEvent::CanWorkChanged(_) => EventName::CanWorkChanged,
            ShellEvent::MessageResponded(_) => EventName::MessageResponded,
            ShellEvent::OperateFailed(_) => EventName::OperateFailed,
            ShellEvent::Notify(_) => EventName::Notify,
            ShellEvent::TaskStatusChanged(_) => EventName::TaskStatusChanged,
            ShellEvent::TaskExecutionStarted(_) => EventName::TaskExecutionStarted,
            ShellEvent::TaskExecutionCompleted(_) => EventName::TaskExecutionCompleted,
        }
    }

    /// Split into `(name, payload)` for the bus.
    ///
    /// Payload-less events (floating-window hover) yield `Value::Null`.
    pub fn into_parts(self) -> (EventName, Value) {
        let name = self.name();
        let value = serde_json::to_value(&self).unwrap_or_default();
        let payload = value.get("payload").cloned().unwrap_or(Value::Null);
        (name, payload)
    }
}

// ============================================================================
// Tests
// ============================================================================
