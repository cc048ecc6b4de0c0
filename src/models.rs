use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Short display tag shown next to the task text.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "\u{1F7E2} Low",
            Priority::Medium => "\u{1F7E1} Medium",
            Priority::High => "\u{1F534} High",
        }
    }
}

/// The active priority filter. `All` disables priority matching entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Literal value stored under the theme key.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Field names and the `createdAt` ISO-8601 string are the compatibility
/// contract for reading data persisted by earlier builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    pub recurring: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        text: String,
        priority: Priority,
        recurring: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: next_task_id(),
            text,
            priority,
            completed: false,
            recurring,
            created_at,
        }
    }
}

/// Earlier builds persisted numeric millisecond ids; accept both shapes.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value.to_string(),
        Raw::Text(value) => value,
    })
}

static TASK_SEQ: AtomicU64 = AtomicU64::new(0);

/// Millisecond timestamp plus a process-local counter. The counter keeps ids
/// unique even when several tasks are created within the same millisecond.
pub fn next_task_id() -> String {
    let seq = TASK_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Utc::now().timestamp_millis(), seq)
}

/// Illustrative tasks written on first run (or when the stored task data is
/// unreadable). Priorities span the enumeration and the timestamps are
/// staggered so the relative-date labels differ.
pub fn seed_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let documentation = Task::new(
        "Complete project documentation".to_string(),
        Priority::High,
        false,
        now - Duration::hours(24),
    );
    let mut review = Task::new(
        "Review code changes".to_string(),
        Priority::Medium,
        false,
        now - Duration::hours(12),
    );
    review.completed = true;
    let meeting = Task::new(
        "Weekly team meeting".to_string(),
        Priority::Low,
        true,
        now - Duration::hours(6),
    );
    vec![documentation, review, meeting]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn priority_defaults_to_low_and_serializes_lowercase() {
        assert_eq!(Priority::default(), Priority::Low);
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), "high");
        let back: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, Priority::Medium);
    }

    #[test]
    fn priority_filter_matching() {
        assert!(PriorityFilter::All.matches(Priority::Low));
        assert!(PriorityFilter::All.matches(Priority::High));
        assert!(PriorityFilter::High.matches(Priority::High));
        assert!(!PriorityFilter::High.matches(Priority::Medium));
        assert!(!PriorityFilter::Low.matches(Priority::High));
    }

    #[test]
    fn theme_flip_and_literal_round_trip() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light "), Some(Theme::Light));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn task_serializes_with_camel_case_fields_and_iso_timestamp() {
        let created_at: DateTime<Utc> = "2026-08-20T10:30:00Z".parse().unwrap();
        let task = Task {
            id: "1756100000000-0".to_string(),
            text: "Buy milk".to_string(),
            priority: Priority::Medium,
            completed: false,
            recurring: false,
            created_at,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], "1756100000000-0");
        assert_eq!(value["text"], "Buy milk");
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["completed"], false);
        assert_eq!(value["recurring"], false);
        let created = value["createdAt"].as_str().expect("createdAt is a string");
        assert!(created.starts_with("2026-08-20T10:30:00"));
    }

    #[test]
    fn task_id_deserializes_from_number_or_string() {
        let json = r#"
        {
          "id": 1756100000000,
          "text": "Weekly team meeting",
          "priority": "low",
          "completed": false,
          "recurring": true,
          "createdAt": "2026-08-28T08:00:00.000Z"
        }
        "#;
        let task: Task = serde_json::from_str(json).expect("numeric id should deserialize");
        assert_eq!(task.id, "1756100000000");
        assert!(task.recurring);

        let json = json.replace("1756100000000", "\"abc-1\"");
        let task: Task = serde_json::from_str(&json).expect("string id should deserialize");
        assert_eq!(task.id, "abc-1");
    }

    #[test]
    fn next_task_id_is_unique_across_rapid_calls() {
        let ids: HashSet<String> = (0..1000).map(|_| next_task_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn seed_tasks_span_priorities_and_completion_states() {
        let now = Utc::now();
        let tasks = seed_tasks(now);
        assert_eq!(tasks.len(), 3);

        let priorities: Vec<Priority> = tasks.iter().map(|t| t.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low]
        );
        let completed: Vec<bool> = tasks.iter().map(|t| t.completed).collect();
        assert_eq!(completed, vec![false, true, false]);
        assert_eq!(tasks[2].text, "Weekly team meeting");
        assert!(tasks[2].recurring);

        // Staggered historical timestamps, all in the past.
        assert!(tasks[0].created_at < tasks[1].created_at);
        assert!(tasks[1].created_at < tasks[2].created_at);
        assert!(tasks[2].created_at < now);

        let ids: HashSet<&String> = tasks.iter().map(|t| &t.id).collect();
        assert_eq!(ids.len(), 3);
    }
}
