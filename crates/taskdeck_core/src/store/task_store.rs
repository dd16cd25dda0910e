//! Authoritative in-memory task store.
//!
//! # Responsibility
//! - Own the ordered task collection for the lifetime of the process.
//! - Enforce the trimming policy for titles and descriptions.
//!
//! # Invariants
//! - Every held task has a unique `id` and a non-empty trimmed `title`.
//! - Order is newest-first: the most recent successful `add` is index 0.
//! - Blank titles are silently discarded on `add`/`edit` (disabled-submit
//!   UX policy), signalled through `None`/`false`, never an error.

use crate::model::task::{Task, TaskId};
use log::debug;
use serde::Serialize;

/// Derived totals over the current task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    /// Number of tasks currently held.
    pub total: usize,
    /// Number of tasks with `completed == true`.
    pub completed: usize,
}

impl TaskCounts {
    /// Fraction of tasks completed, in `0.0..=1.0`. `0.0` for an empty store.
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }
}

/// Owner of the in-memory task collection and its mutation operations.
///
/// Explicitly instantiated and passed by reference to whatever presentation
/// code needs it; the core keeps no process-global state.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task with a trimmed title and optional trimmed description.
    ///
    /// Returns a clone of the created task, or `None` when the trimmed title
    /// is empty. The blank-title case is a deliberate silent no-op mirroring
    /// a disabled submit button, not a validation failure.
    pub fn add(&mut self, title: &str, description: Option<&str>) -> Option<Task> {
        let title = normalize_title(title)?;
        let task = Task::new(title, normalize_description(description));
        debug!(
            "event=task_added module=store status=ok id={} total={}",
            task.id,
            self.tasks.len() + 1
        );
        self.tasks.insert(0, task.clone());
        Some(task)
    }

    /// Replaces title and description of the task with the given id.
    ///
    /// `id`, `completed` and `created_at` are never modified. Returns `false`
    /// without changing anything when the id is unknown or the trimmed title
    /// is empty.
    pub fn edit(&mut self, id: TaskId, title: &str, description: Option<&str>) -> bool {
        let Some(new_title) = normalize_title(title) else {
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_edit_skipped module=store status=not_found id={id}");
            return false;
        };
        task.title = new_title;
        task.description = normalize_description(description);
        debug!("event=task_edited module=store status=ok id={id}");
        true
    }

    /// Flips the completion flag on the task with the given id.
    ///
    /// Returns `false` when the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_toggle_skipped module=store status=not_found id={id}");
            return false;
        };
        task.toggle_completed();
        debug!(
            "event=task_toggled module=store status=ok id={id} completed={}",
            task.completed
        );
        true
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` when the id is unknown.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            debug!(
                "event=task_deleted module=store status=ok id={id} total={}",
                self.tasks.len()
            );
        } else {
            debug!("event=task_delete_skipped module=store status=not_found id={id}");
        }
        removed
    }

    /// Returns the task with the given id, if present.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Read-only view of the current list, newest-first.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Derived totals over the current list.
    pub fn counts(&self) -> TaskCounts {
        TaskCounts {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.completed).count(),
        }
    }
}

fn normalize_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    let trimmed = description?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{normalize_description, normalize_title};

    #[test]
    fn normalize_title_trims_and_rejects_blank() {
        assert_eq!(normalize_title("  Buy milk  ").as_deref(), Some("Buy milk"));
        assert_eq!(normalize_title("   "), None);
        assert_eq!(normalize_title(""), None);
    }

    #[test]
    fn normalize_description_maps_blank_to_absent() {
        assert_eq!(normalize_description(None), None);
        assert_eq!(normalize_description(Some("   ")), None);
        assert_eq!(
            normalize_description(Some(" details ")).as_deref(),
            Some("details")
        );
    }
}
