use taskdeck_core::theme::{resolve, DARK, LIGHT};

#[test]
fn resolve_selects_palette_by_flag() {
    assert_eq!(resolve(false), &LIGHT);
    assert_eq!(resolve(true), &DARK);
}

#[test]
fn resolve_is_pure_across_repeated_calls() {
    assert_eq!(resolve(true), resolve(true));
    assert_eq!(resolve(false), resolve(false));
}

#[test]
fn palettes_differ_in_core_surface_tokens() {
    assert_ne!(LIGHT.background, DARK.background);
    assert_ne!(LIGHT.surface, DARK.surface);
    assert_ne!(LIGHT.text, DARK.text);
}

#[test]
fn accent_tokens_are_shared_between_palettes() {
    // Brand accents stay identical so toggling the theme does not recolor
    // primary actions.
    assert_eq!(LIGHT.primary, DARK.primary);
    assert_eq!(LIGHT.success, DARK.success);
    assert_eq!(LIGHT.danger, DARK.danger);
}

#[test]
fn all_tokens_are_hex_colors() {
    for theme in [&LIGHT, &DARK] {
        for token in [
            theme.background,
            theme.surface,
            theme.primary,
            theme.primary_disabled,
            theme.text,
            theme.text_secondary,
            theme.text_disabled,
            theme.border,
            theme.success,
            theme.danger,
            theme.shadow,
        ] {
            assert!(token.starts_with('#'), "token `{token}` is not hex");
            assert_eq!(token.len(), 7, "token `{token}` is not #RRGGBB");
        }
    }
}

#[test]
fn theme_serializes_with_snake_case_token_names() {
    let json = serde_json::to_value(LIGHT).unwrap();
    assert_eq!(json["background"], "#F9FAFB");
    assert_eq!(json["primary_disabled"], "#E5E7EB");
    assert_eq!(json["text_secondary"], "#6B7280");
}
