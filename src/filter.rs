use crate::models::{PriorityFilter, Task};

/// Derives the visible subset of the collection: the priority predicate and
/// the case-insensitive substring search are ANDed together, and surviving
/// tasks keep their relative order. Pure; the caller passes a snapshot.
pub fn filter_tasks(tasks: &[Task], filter: PriorityFilter, query: &str) -> Vec<Task> {
    let query = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| filter.matches(task.priority))
        .filter(|task| query.is_empty() || task.text.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::Priority;

    fn make_task(id: &str, text: &str, priority: Priority) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            priority,
            completed: false,
            recurring: false,
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task("1", "Complete project documentation", Priority::High),
            make_task("2", "Review code changes", Priority::Medium),
            make_task("3", "Weekly team meeting", Priority::Low),
            make_task("4", "Prepare team offsite agenda", Priority::High),
        ]
    }

    #[test]
    fn all_filter_with_empty_query_returns_everything() {
        let tasks = sample();
        let visible = filter_tasks(&tasks, PriorityFilter::All, "");
        assert_eq!(visible, tasks);
    }

    #[test]
    fn priority_filter_keeps_only_matching_tasks_in_order() {
        let tasks = sample();
        let visible = filter_tasks(&tasks, PriorityFilter::High, "");
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert!(visible.iter().all(|t| t.priority == Priority::High));
    }

    #[test]
    fn search_matches_case_insensitively() {
        let tasks = sample();
        let visible = filter_tasks(&tasks, PriorityFilter::All, "TEAM");
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let tasks = sample();
        let visible = filter_tasks(&tasks, PriorityFilter::High, "team");
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);
    }

    #[test]
    fn no_match_yields_empty_without_touching_input() {
        let tasks = sample();
        let visible = filter_tasks(&tasks, PriorityFilter::Medium, "nonexistent");
        assert!(visible.is_empty());
        assert_eq!(tasks.len(), 4);
    }
}
