use std::sync::{Arc, Mutex};

use crate::models::{PriorityFilter, Task, Theme};

/// Owns the in-memory task collection and the current view state. All
/// mutations go through here; the filter and stats helpers only ever see
/// snapshots returned by `tasks()`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, theme: Theme) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AppData {
                tasks,
                filter: PriorityFilter::default(),
                search: String::new(),
                theme,
            })),
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        let guard = self.inner.lock().expect("state poisoned");
        guard.tasks.clone()
    }

    /// New tasks go to the front; the collection is kept newest-first.
    pub fn insert_task(&self, task: Task) {
        let mut guard = self.inner.lock().expect("state poisoned");
        guard.tasks.insert(0, task);
    }

    pub fn replace_tasks(&self, tasks: Vec<Task>) {
        let mut guard = self.inner.lock().expect("state poisoned");
        guard.tasks = tasks;
    }

    /// Flips the completed flag and returns the updated task, or `None` when
    /// no task with that id exists.
    pub fn toggle_task(&self, task_id: &str) -> Option<Task> {
        let mut guard = self.inner.lock().expect("state poisoned");
        let task = guard.tasks.iter_mut().find(|t| t.id == task_id)?;
        task.completed = !task.completed;
        Some(task.clone())
    }

    /// Replaces the task text. Callers validate and trim first; this only
    /// fails when the id is unknown.
    pub fn edit_task(&self, task_id: &str, text: String) -> Option<Task> {
        let mut guard = self.inner.lock().expect("state poisoned");
        let task = guard.tasks.iter_mut().find(|t| t.id == task_id)?;
        task.text = text;
        Some(task.clone())
    }

    /// Returns whether a task was actually removed.
    pub fn remove_task(&self, task_id: &str) -> bool {
        let mut guard = self.inner.lock().expect("state poisoned");
        let before = guard.tasks.len();
        guard.tasks.retain(|task| task.id != task_id);
        guard.tasks.len() != before
    }

    pub fn filter(&self) -> PriorityFilter {
        let guard = self.inner.lock().expect("state poisoned");
        guard.filter
    }

    pub fn set_filter(&self, filter: PriorityFilter) {
        let mut guard = self.inner.lock().expect("state poisoned");
        guard.filter = filter;
    }

    pub fn search(&self) -> String {
        let guard = self.inner.lock().expect("state poisoned");
        guard.search.clone()
    }

    pub fn set_search(&self, query: String) {
        let mut guard = self.inner.lock().expect("state poisoned");
        guard.search = query;
    }

    pub fn theme(&self) -> Theme {
        let guard = self.inner.lock().expect("state poisoned");
        guard.theme
    }

    pub fn set_theme(&self, theme: Theme) {
        let mut guard = self.inner.lock().expect("state poisoned");
        guard.theme = theme;
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&self) -> Theme {
        let mut guard = self.inner.lock().expect("state poisoned");
        guard.theme = guard.theme.flipped();
        guard.theme
    }
}

#[derive(Debug)]
struct AppData {
    tasks: Vec<Task>,
    filter: PriorityFilter,
    search: String,
    theme: Theme,
}
