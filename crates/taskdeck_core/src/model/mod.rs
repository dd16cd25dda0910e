//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, CLI and FFI layers.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - `id` and `created_at` are assigned once at creation and never rewritten.

pub mod task;
