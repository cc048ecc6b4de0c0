use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dates::format_relative;
use crate::models::{Priority, PriorityFilter, Task, Theme};
use crate::stats::Stats;

pub const EVENT_STATE_UPDATED: &str = "state_updated";
pub const EVENT_NOTIFICATION: &str = "notification";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Transient status message for the presentation layer to display and
/// auto-dismiss. The core attaches no timing behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Render-ready projection of a task: everything the presentation layer
/// needs, with the relative date and priority tag already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: String,
    pub text: String,
    pub priority: Priority,
    pub priority_label: &'static str,
    pub completed: bool,
    pub recurring: bool,
    pub created_label: String,
}

impl TaskView {
    pub fn new(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
            priority: task.priority,
            priority_label: task.priority.label(),
            completed: task.completed,
            recurring: task.recurring,
            created_label: format_relative(task.created_at, now),
        }
    }
}

/// Emitted after every state change: the filtered view plus aggregate stats
/// and the current view settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatePayload {
    pub tasks: Vec<TaskView>,
    pub stats: Stats,
    pub filter: PriorityFilter,
    pub search: String,
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Severity::Success).unwrap(), "success");
        assert_eq!(serde_json::to_value(Severity::Warning).unwrap(), "warning");
    }

    #[test]
    fn task_view_carries_labels() {
        let now: DateTime<Utc> = "2026-08-29T12:00:00Z".parse().unwrap();
        let task = Task {
            id: "a-1".to_string(),
            text: "Weekly team meeting".to_string(),
            priority: Priority::High,
            completed: false,
            recurring: true,
            created_at: now - chrono::Duration::hours(6),
        };

        let view = TaskView::new(&task, now);
        assert_eq!(view.id, "a-1");
        assert_eq!(view.priority_label, Priority::High.label());
        assert_eq!(view.created_label, "Today");
        assert!(view.recurring);
        assert!(!view.completed);
    }
}
