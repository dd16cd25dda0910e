//! Task domain model.
//!
//! # Responsibility
//! - Define the single to-do record rendered by the task list UI.
//! - Provide completion-state helpers used by the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty after trimming for every task held by a store.
//! - `created_at` is set once at creation (Unix epoch milliseconds).

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Maximum title length input layers should allow, in characters.
///
/// The store itself does not cap lengths; the limit lives here so that every
/// input surface (text field `maxLength`, FFI validation) agrees on one value.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum description length input layers should allow, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// A single to-do item.
///
/// Descriptions are optional and stored as `None` rather than an empty
/// string, so "no description" has exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for toggle/edit/delete addressing.
    pub id: TaskId,
    /// Display title. Non-empty after trimming.
    pub title: String,
    /// Optional free-form detail text.
    pub description: Option<String>,
    /// Completion flag. The only task status that exists.
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds. Immutable.
    pub created_at: i64,
}

impl Task {
    /// Creates a new incomplete task with a generated stable ID and the
    /// current wall-clock creation time.
    ///
    /// Callers are expected to pass already-trimmed text; the store owns the
    /// trimming policy.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, now_epoch_ms())
    }

    /// Creates a task with caller-provided identity and creation time.
    ///
    /// Used by tests and import-like paths where identity already exists.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: Option<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description,
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag in place.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// Returns the current wall-clock time in Unix epoch milliseconds.
///
/// Clamps to 0 for clocks set before the epoch instead of failing; the value
/// is display metadata, not an ordering key.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
