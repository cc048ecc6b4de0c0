use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::events::{Notification, Severity, StatePayload, TaskView};
use crate::filter::filter_tasks;
use crate::models::{seed_tasks, Priority, PriorityFilter, Task, Theme};
use crate::state::AppState;
use crate::stats::task_stats;
use crate::storage::{Storage, StorageError};

#[derive(Debug, serde::Serialize)]
pub struct CommandResult<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Host side of the command layer. The presentation shell supplies the data
/// directory and receives state payloads and transient notifications back.
pub trait CommandCtx {
    fn data_dir(&self) -> Result<PathBuf, StorageError>;
    fn emit_state_updated(&self, payload: StatePayload);
    fn notify(&self, notification: Notification);
}

fn ok<T>(data: T) -> CommandResult<T> {
    CommandResult {
        ok: true,
        data: Some(data),
        error: None,
    }
}

fn err<T>(message: &str) -> CommandResult<T> {
    CommandResult {
        ok: false,
        data: None,
        error: Some(message.to_string()),
    }
}

/// Recomputes the render view: filtered task projections plus aggregate
/// stats over the whole collection.
pub fn state_payload(state: &AppState, now: DateTime<Utc>) -> StatePayload {
    let tasks = state.tasks();
    let filter = state.filter();
    let search = state.search();
    let visible = filter_tasks(&tasks, filter, &search);
    StatePayload {
        tasks: visible.iter().map(|task| TaskView::new(task, now)).collect(),
        stats: task_stats(&tasks),
        filter,
        search,
        theme: state.theme(),
    }
}

/// Write-through persistence: the full collection and the theme are saved
/// after every mutation, then the refreshed view is pushed to the shell.
fn persist(ctx: &impl CommandCtx, state: &AppState) -> Result<(), StorageError> {
    let storage = Storage::new(ctx.data_dir()?);
    storage.ensure_dirs()?;
    storage.save_tasks(&state.tasks())?;
    storage.save_theme(state.theme())?;
    ctx.emit_state_updated(state_payload(state, Utc::now()));
    Ok(())
}

/// Loads persisted tasks and theme into the state. A missing task blob is
/// the first-run case; an unreadable one is recovered the same way (logged,
/// since it can also mask real corruption) and both seed the sample tasks.
pub fn load_state(ctx: &impl CommandCtx, state: &AppState) -> CommandResult<StatePayload> {
    let root = match ctx.data_dir() {
        Ok(path) => path,
        Err(e) => return err(&format!("data dir error: {e}")),
    };
    let storage = Storage::new(root);
    if let Err(error) = storage.ensure_dirs() {
        return err(&format!("storage error: {error:?}"));
    }

    match storage.load_theme() {
        Ok(Some(theme)) => state.set_theme(theme),
        Ok(None) => state.set_theme(Theme::default()),
        Err(error) => {
            log::warn!("stored theme unreadable, using default: {error}");
            state.set_theme(Theme::default());
        }
    }

    let stored = match storage.load_tasks() {
        Ok(stored) => stored,
        Err(error) => {
            log::warn!("stored task data unreadable, falling back to sample tasks: {error}");
            None
        }
    };

    match stored {
        Some(tasks) => {
            state.replace_tasks(tasks);
            let payload = state_payload(state, Utc::now());
            ctx.emit_state_updated(payload.clone());
            ok(payload)
        }
        None => {
            log::info!("seeding sample tasks");
            state.replace_tasks(seed_tasks(Utc::now()));
            if let Err(error) = persist(ctx, state) {
                return err(&format!("storage error: {error:?}"));
            }
            ok(state_payload(state, Utc::now()))
        }
    }
}

/// Creates a task from trimmed input. Empty text is refused without touching
/// the collection, the storage, or the event stream.
pub fn create_task(
    ctx: &impl CommandCtx,
    state: &AppState,
    text: String,
    priority: Priority,
    recurring: bool,
) -> CommandResult<Task> {
    let text = text.trim();
    if text.is_empty() {
        return err("task text is empty");
    }

    let task = Task::new(text.to_string(), priority, recurring, Utc::now());
    state.insert_task(task.clone());
    if let Err(error) = persist(ctx, state) {
        return err(&format!("storage error: {error:?}"));
    }
    ctx.notify(Notification::new(
        "Task added successfully!",
        Severity::Success,
    ));
    ok(task)
}

pub fn toggle_task(
    ctx: &impl CommandCtx,
    state: &AppState,
    task_id: String,
) -> CommandResult<Task> {
    let task = match state.toggle_task(&task_id) {
        Some(task) => task,
        None => return err("task not found"),
    };
    if let Err(error) = persist(ctx, state) {
        return err(&format!("storage error: {error:?}"));
    }

    let notification = if task.completed {
        Notification::new("Task completed!", Severity::Success)
    } else {
        Notification::new("Task marked as pending", Severity::Info)
    };
    ctx.notify(notification);
    ok(task)
}

/// Replaces the task text with the trimmed input. A whitespace-only
/// replacement is refused and the original text stays in place.
pub fn edit_task(
    ctx: &impl CommandCtx,
    state: &AppState,
    task_id: String,
    text: String,
) -> CommandResult<Task> {
    let text = text.trim();
    if text.is_empty() {
        return err("task text is empty");
    }

    let task = match state.edit_task(&task_id, text.to_string()) {
        Some(task) => task,
        None => return err("task not found"),
    };
    if let Err(error) = persist(ctx, state) {
        return err(&format!("storage error: {error:?}"));
    }
    ctx.notify(Notification::new(
        "Task updated successfully!",
        Severity::Success,
    ));
    ok(task)
}

/// The confirmation step belongs to the presentation layer; this runs only
/// after the user has already confirmed. Returns whether a task was removed;
/// an unknown id is a quiet no-op.
pub fn delete_task(
    ctx: &impl CommandCtx,
    state: &AppState,
    task_id: String,
) -> CommandResult<bool> {
    if !state.remove_task(&task_id) {
        return ok(false);
    }
    if let Err(error) = persist(ctx, state) {
        return err(&format!("storage error: {error:?}"));
    }
    ctx.notify(Notification::new(
        "Task deleted successfully!",
        Severity::Info,
    ));
    ok(true)
}

/// View-state only; the active filter is not persisted.
pub fn set_filter(
    ctx: &impl CommandCtx,
    state: &AppState,
    filter: PriorityFilter,
) -> CommandResult<StatePayload> {
    state.set_filter(filter);
    let payload = state_payload(state, Utc::now());
    ctx.emit_state_updated(payload.clone());
    ok(payload)
}

/// View-state only; the search query is not persisted.
pub fn set_search(
    ctx: &impl CommandCtx,
    state: &AppState,
    query: String,
) -> CommandResult<StatePayload> {
    state.set_search(query);
    let payload = state_payload(state, Utc::now());
    ctx.emit_state_updated(payload.clone());
    ok(payload)
}

/// Flips the two-valued theme and persists the new value.
pub fn toggle_theme(ctx: &impl CommandCtx, state: &AppState) -> CommandResult<Theme> {
    let theme = state.toggle_theme();
    if let Err(error) = persist(ctx, state) {
        return err(&format!("storage error: {error:?}"));
    }
    ok(theme)
}
