use serde::Serialize;

use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Aggregates display counts over a snapshot of the collection.
pub fn task_stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    Stats {
        total,
        completed,
        pending: total - completed,
    }
}
