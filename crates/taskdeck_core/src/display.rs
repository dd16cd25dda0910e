//! Text projections for list rendering.
//!
//! # Responsibility
//! - Format task creation times as short relative labels.
//! - Truncate preview text to a display budget.
//!
//! # Invariants
//! - Formatting is pure over its inputs; "now" is always passed in so
//!   callers and tests control the clock.

use chrono::DateTime;

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Formats a creation time relative to `now_ms`.
///
/// Buckets: "Just now" (< 1 minute), "Nm ago", "Nh ago", "Nd ago" (< 7
/// days), then the calendar date as `YYYY-MM-DD`. Future timestamps fall
/// into the "Just now" bucket; a skewed device clock is not worth a
/// negative age label.
pub fn format_relative(created_at_ms: i64, now_ms: i64) -> String {
    let elapsed_ms = now_ms.saturating_sub(created_at_ms).max(0);
    let minutes = elapsed_ms / MS_PER_MINUTE;
    let hours = elapsed_ms / MS_PER_HOUR;
    let days = elapsed_ms / MS_PER_DAY;

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    if days < 7 {
        return format!("{days}d ago");
    }

    DateTime::from_timestamp_millis(created_at_ms)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Truncates `text` to at most `max_chars` characters, replacing the tail
/// with `...` when anything was cut. Counts characters, not bytes, so
/// multi-byte input never splits a code point.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}
