//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Walk the add/toggle/delete flow and theme resolution without any UI
//!   runtime, keeping output stable for quick local sanity checks.

use taskdeck_core::{now_epoch_ms, resolve_theme, truncate, TaskStore};

fn main() {
    println!("taskdeck_core ping={}", taskdeck_core::ping());
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    let mut store = TaskStore::new();
    if let Some(milk) = store.add("Buy milk", Some("2 liters, lactose free")) {
        store.toggle(milk.id);
    }
    store.add("Water the plants", None);
    // Blank titles are ignored by policy; this one never shows up below.
    store.add("   ", None);

    let now_ms = now_epoch_ms();
    for task in store.list() {
        let marker = if task.completed { "x" } else { " " };
        let detail = task
            .description
            .as_deref()
            .map(|text| truncate(text, 40))
            .unwrap_or_default();
        println!(
            "[{marker}] {title} {detail} ({age})",
            title = task.title,
            age = taskdeck_core::format_relative(task.created_at, now_ms),
        );
    }

    let counts = store.counts();
    println!(
        "counts total={} completed={} ratio={:.2}",
        counts.total,
        counts.completed,
        counts.completion_ratio()
    );

    for is_dark in [false, true] {
        let theme = resolve_theme(is_dark);
        println!(
            "theme dark={is_dark} background={} text={}",
            theme.background, theme.text
        );
    }
}
