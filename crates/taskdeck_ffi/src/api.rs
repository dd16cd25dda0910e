//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level task and theme functions to Dart via FRB.
//! - Keep error semantics simple: no-ops, not exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Malformed ids from the host degrade to the same benign no-op as an
//!   unknown id.
//! - All task mutations go through one process-global store behind a single
//!   mutex; UI-scale call volume needs nothing finer.

use std::sync::{Mutex, MutexGuard, OnceLock};
use taskdeck_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    resolve_theme, Task, TaskId, TaskStore,
};
use uuid::Uuid;

static STORE: OnceLock<Mutex<TaskStore>> = OnceLock::new();

fn store() -> MutexGuard<'static, TaskStore> {
    STORE
        .get_or_init(|| Mutex::new(TaskStore::new()))
        .lock()
        // A panic while holding the lock poisons it; the store data itself
        // stays consistent, so keep serving instead of propagating the panic.
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn parse_task_id(id: &str) -> Option<TaskId> {
    Uuid::parse_str(id).ok()
}

/// Task record shape handed to Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Stable task ID in string form.
    pub id: String,
    /// Display title, already trimmed by the core.
    pub title: String,
    /// Optional detail text; `None` when the task has no description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

/// Derived totals shape handed to Dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCountsView {
    pub total: u32,
    pub completed: u32,
}

/// Color palette shape handed to Dart, `#RRGGBB` hex per token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeView {
    pub background: String,
    pub surface: String,
    pub primary: String,
    pub primary_disabled: String,
    pub text: String,
    pub text_secondary: String,
    pub text_disabled: String,
    pub border: String,
    pub success: String,
    pub danger: String,
    pub shadow: String,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Adds a task from the input bar.
///
/// # FFI contract
/// - Sync call, UI-thread safe at to-do-list scale.
/// - Returns the created task, or `None` when the trimmed title is blank
///   (the UI disables submit in that case; this is the matching backstop).
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(title: String, description: Option<String>) -> Option<TaskView> {
    store()
        .add(title.as_str(), description.as_deref())
        .map(|task| TaskView::from(&task))
}

/// Replaces title/description of an existing task from the edit modal.
///
/// # FFI contract
/// - Sync call; returns `true` only when a task was actually updated.
/// - Unknown or malformed ids and blank titles return `false` without
///   changing any state.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_task(id: String, title: String, description: Option<String>) -> bool {
    match parse_task_id(&id) {
        Some(task_id) => store().edit(task_id, title.as_str(), description.as_deref()),
        None => false,
    }
}

/// Flips a task's completion flag.
///
/// # FFI contract
/// - Sync call; `false` for unknown or malformed ids, no state change.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(id: String) -> bool {
    match parse_task_id(&id) {
        Some(task_id) => store().toggle(task_id),
        None => false,
    }
}

/// Deletes a task. Confirmation UX belongs to the caller.
///
/// # FFI contract
/// - Sync call; `false` for unknown or malformed ids, no state change.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_task(id: String) -> bool {
    match parse_task_id(&id) {
        Some(task_id) => store().delete(task_id),
        None => false,
    }
}

/// Returns the current task list, newest-first, for re-rendering.
///
/// # FFI contract
/// - Sync call; returns a snapshot copy the host may hold freely.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks() -> Vec<TaskView> {
    store().list().iter().map(TaskView::from).collect()
}

/// Returns derived totals for the header subtitle.
///
/// # FFI contract
/// - Sync call; counts are consistent with the latest mutation.
#[flutter_rust_bridge::frb(sync)]
pub fn task_counts() -> TaskCountsView {
    let counts = store().counts();
    TaskCountsView {
        total: u32::try_from(counts.total).unwrap_or(u32::MAX),
        completed: u32::try_from(counts.completed).unwrap_or(u32::MAX),
    }
}

/// Resolves the color palette for the host's dark-mode flag.
///
/// # FFI contract
/// - Sync call, pure: same flag, same palette, every time.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_colors(is_dark: bool) -> ThemeView {
    let theme = resolve_theme(is_dark);
    ThemeView {
        background: theme.background.to_owned(),
        surface: theme.surface.to_owned(),
        primary: theme.primary.to_owned(),
        primary_disabled: theme.primary_disabled.to_owned(),
        text: theme.text.to_owned(),
        text_secondary: theme.text_secondary.to_owned(),
        text_disabled: theme.text_disabled.to_owned(),
        border: theme.border.to_owned(),
        success: theme.success.to_owned(),
        danger: theme.danger.to_owned(),
        shadow: theme.shadow.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{add_task, delete_task, edit_task, list_tasks, task_counts, theme_colors, toggle_task};

    // All cases share the process-global store, so they run as one test body.
    #[test]
    fn global_store_flow_add_toggle_edit_delete() {
        assert!(add_task("   ".to_string(), None).is_none());

        let created = add_task("Buy milk".to_string(), Some(" 2 liters ".to_string()))
            .expect("non-blank title creates a task");
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.description.as_deref(), Some("2 liters"));
        assert!(!created.completed);

        assert!(!toggle_task("not-a-uuid".to_string()));
        assert!(toggle_task(created.id.clone()));
        assert!(list_tasks()[0].completed);

        assert!(edit_task(created.id.clone(), "Buy oat milk".to_string(), None));
        let listed = list_tasks();
        assert_eq!(listed[0].title, "Buy oat milk");
        assert_eq!(listed[0].description, None);

        let counts = task_counts();
        assert_eq!(counts.total, 1);
        assert_eq!(counts.completed, 1);

        assert!(!delete_task("not-a-uuid".to_string()));
        assert!(delete_task(created.id));
        assert!(list_tasks().is_empty());
    }

    #[test]
    fn theme_colors_matches_core_palettes() {
        let light = theme_colors(false);
        let dark = theme_colors(true);
        assert_eq!(light.background, "#F9FAFB");
        assert_eq!(dark.background, "#0F172A");
        assert_eq!(light.primary, dark.primary);
    }
}
