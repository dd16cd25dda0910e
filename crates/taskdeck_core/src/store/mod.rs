//! In-memory task collection ownership.
//!
//! # Responsibility
//! - Provide the only mutation path for the task list.
//! - Keep derived projections (counts, ratio) consistent with the list.
//!
//! # Invariants
//! - The list is ordered newest-first; new tasks prepend.
//! - Unknown ids degrade to benign no-ops, never errors.

pub mod task_store;
