//! Theme palettes and dark-mode resolution.
//!
//! # Responsibility
//! - Define the two constant color palettes the UI styles itself from.
//! - Map a dark-mode flag to one of them, statelessly.
//!
//! # Invariants
//! - Palettes are immutable constants; `resolve` never mutates or caches.
//! - Light and dark differ in at least `background`, `surface` and `text`.

use serde::Serialize;

/// A named palette of semantic color tokens, as `#RRGGBB` hex strings.
///
/// The token set is fixed; callers pick tokens by role rather than by raw
/// color so both palettes stay interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub surface: &'static str,
    pub primary: &'static str,
    pub primary_disabled: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_disabled: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub danger: &'static str,
    pub shadow: &'static str,
}

/// Palette used when dark mode is off.
pub const LIGHT: Theme = Theme {
    background: "#F9FAFB",
    surface: "#FFFFFF",
    primary: "#3B82F6",
    primary_disabled: "#E5E7EB",
    text: "#111827",
    text_secondary: "#6B7280",
    text_disabled: "#9CA3AF",
    border: "#E5E7EB",
    success: "#10B981",
    danger: "#EF4444",
    shadow: "#000000",
};

/// Palette used when dark mode is on.
pub const DARK: Theme = Theme {
    background: "#0F172A",
    surface: "#1E293B",
    primary: "#3B82F6",
    primary_disabled: "#374151",
    text: "#F8FAFC",
    text_secondary: "#94A3B8",
    text_disabled: "#64748B",
    border: "#334155",
    success: "#10B981",
    danger: "#EF4444",
    shadow: "#000000",
};

/// Selects the palette for the given dark-mode flag.
///
/// Pure and total: no side effects, no memory of previous calls. Sourcing
/// the initial flag (system preference) and any later toggle belongs to the
/// caller.
pub const fn resolve(is_dark: bool) -> &'static Theme {
    if is_dark {
        &DARK
    } else {
        &LIGHT
    }
}
