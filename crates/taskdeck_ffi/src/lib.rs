//! Flutter-facing FFI crate for Taskdeck.
//! Business rules live in `taskdeck_core`; this crate only adapts them.

pub mod api;
