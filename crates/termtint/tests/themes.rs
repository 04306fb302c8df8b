//! Integration tests for theme management.
//!
//! These cover the theme lifecycle end to end: creating and switching themes,
//! coloring text, and persisting character tables to disk.

use std::collections::HashSet;
use std::fs;

use termtint::{MapTarget, ThemeError, ThemeManager, DEFAULT_THEME};

const GREEN: &str = "\x1b[38;5;34m";

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn bracket_theme_colors_each_bracket() {
    let themes = ThemeManager::new();
    themes.insert("bracket", "[]", GREEN, MapTarget::Chars);

    assert_eq!(
        themes.apply("[x]"),
        "\x1b[38;5;34m[\x1b[0mx\x1b[38;5;34m]\x1b[0m"
    );
}

#[test]
fn three_created_themes_plus_default_list_four_names() {
    let themes = ThemeManager::new();
    themes.create("dark").unwrap();
    themes.create("light").unwrap();
    themes.create("json").unwrap();

    let names: HashSet<String> = themes.list().into_iter().collect();
    assert_eq!(names.len(), 4);
    for name in [DEFAULT_THEME, "dark", "light", "json"] {
        assert!(names.contains(name), "missing {}", name);
    }
}

#[test]
fn duplicate_create_leaves_first_theme_untouched() {
    let themes = ThemeManager::new();
    themes.create("dark").unwrap();
    themes.set("dark").unwrap();
    themes.insert("p", "()", GREEN, MapTarget::Chars);
    let before = themes.theme("dark").unwrap();

    assert!(matches!(
        themes.create("dark"),
        Err(ThemeError::AlreadyExists(_))
    ));
    assert_eq!(themes.theme("dark").unwrap(), before);
}

#[test]
fn failed_switch_keeps_current_theme() {
    let themes = ThemeManager::new();
    themes.create("dark").unwrap();
    themes.set("dark").unwrap();
    themes.insert("b", "[", GREEN, MapTarget::Chars);

    assert!(matches!(themes.set("nope"), Err(ThemeError::NotFound(_))));
    assert_eq!(themes.current(), "dark");
    assert_eq!(themes.apply("["), format!("{GREEN}[\x1b[0m"));
}

#[test]
fn switching_themes_changes_coloring() {
    let themes = ThemeManager::new();
    themes.create("a").unwrap();
    themes.create("b").unwrap();

    themes.set("a").unwrap();
    themes.insert("x", "x", "\x1b[31m", MapTarget::Chars);
    themes.set("b").unwrap();
    themes.insert("x", "x", "\x1b[32m", MapTarget::Chars);

    assert_eq!(themes.apply("x"), "\x1b[32mx\x1b[0m");
    themes.set("a").unwrap();
    assert_eq!(themes.apply("x"), "\x1b[31mx\x1b[0m");
    themes.set_default();
    assert_eq!(themes.apply("x"), "x");
}

// ============================================================================
// Key and value tables
// ============================================================================

#[test]
fn key_insert_is_stored_under_name() {
    let themes = ThemeManager::new();
    themes.insert("k", "name", "\x1b[38;5;208m", MapTarget::Key);

    assert_eq!(
        themes.inspect_key_color("k"),
        Some("\x1b[38;5;208m".to_string())
    );
    assert_eq!(themes.inspect_key_color("name"), None);
    assert_eq!(themes.apply("k:v"), "\x1b[38;5;208mk\x1b[0m:v");
}

#[test]
fn multi_character_key_never_matches() {
    let themes = ThemeManager::new();
    themes.insert("name", "name", "\x1b[38;5;208m", MapTarget::Key);
    themes.insert("Alice", "Alice", "\x1b[38;5;75m", MapTarget::Value);

    assert_eq!(themes.apply("name: Alice"), "name: Alice");
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn save_then_load_round_trips_char_table_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.theme");

    let themes = ThemeManager::new();
    themes.create("t").unwrap();
    themes.set("t").unwrap();
    themes.insert("bracket", "[]", GREEN, MapTarget::Chars);
    themes.insert("colon", ":", "\x1b[1m", MapTarget::Chars);
    themes.insert("k", "", "\x1b[34m", MapTarget::Key);
    themes.insert("v", "", "\x1b[35m", MapTarget::Value);

    themes.save("t", &path).unwrap();
    themes.load("t2", &path).unwrap();

    let original = themes.theme("t").unwrap();
    let loaded = themes.theme("t2").unwrap();
    assert_eq!(loaded.chars(), original.chars());
    assert!(loaded.keys().is_empty());
    assert!(loaded.values().is_empty());
}

#[test]
fn saved_file_uses_char_colon_code_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brackets.theme");

    let themes = ThemeManager::new();
    themes.insert("bracket", "[]", GREEN, MapTarget::Chars);
    themes.save(DEFAULT_THEME, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "[:\x1b[38;5;34m\n]:\x1b[38;5;34m\n");
}

#[test]
fn load_into_existing_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.theme");
    fs::write(&path, "a:\x1b[31m\n").unwrap();

    let themes = ThemeManager::new();
    themes.create("x").unwrap();
    assert!(matches!(
        themes.load("x", &path),
        Err(ThemeError::AlreadyExists(_))
    ));
    assert!(themes.theme("x").unwrap().is_empty());
}

#[test]
fn load_missing_file_is_io_error_and_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let themes = ThemeManager::new();

    let err = themes
        .load("ghost", dir.path().join("missing.theme"))
        .unwrap_err();
    assert!(matches!(err, ThemeError::Io { .. }));
    assert!(themes.theme("ghost").is_none());
}

#[test]
fn load_skips_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messy.theme");
    fs::write(&path, "a:\x1b[31m\n\ngarbage\nb:\x1b[32m\n").unwrap();

    let themes = ThemeManager::new();
    themes.load("messy", &path).unwrap();

    let theme = themes.theme("messy").unwrap();
    assert_eq!(theme.chars().len(), 2);
    assert_eq!(theme.inspect_color('b'), Some("\x1b[32m"));
}

#[test]
fn load_skips_lines_that_are_not_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.theme");
    fs::write(&path, b"a:\x1b[31m\n\xff\xfe:\x1b[32m\nb:\x1b[34m\n").unwrap();

    let themes = ThemeManager::new();
    themes.load("mixed", &path).unwrap();

    let theme = themes.theme("mixed").unwrap();
    assert_eq!(theme.chars().len(), 2);
    assert_eq!(theme.inspect_color('a'), Some("\x1b[31m"));
    assert_eq!(theme.inspect_color('b'), Some("\x1b[34m"));
}

#[test]
fn failed_read_registers_nothing_and_name_stays_usable() {
    let dir = tempfile::tempdir().unwrap();
    let themes = ThemeManager::new();

    // Opening a directory succeeds on unix but reading it fails.
    let err = themes.load("t", dir.path()).unwrap_err();
    assert!(matches!(err, ThemeError::Io { .. }));
    assert!(themes.theme("t").is_none());

    let path = dir.path().join("good.theme");
    fs::write(&path, "a:\x1b[31m\n").unwrap();
    themes.load("t", &path).unwrap();
    assert_eq!(themes.theme("t").unwrap().inspect_color('a'), Some("\x1b[31m"));
}

#[test]
fn save_to_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("t.theme");

    let themes = ThemeManager::new();
    assert!(matches!(
        themes.save(DEFAULT_THEME, &path),
        Err(ThemeError::Io { .. })
    ));
}

#[test]
fn save_unknown_theme_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.theme");

    let themes = ThemeManager::new();
    assert!(matches!(
        themes.save("ghost", &path),
        Err(ThemeError::NotFound(_))
    ));
    assert!(!path.exists());
}

// ============================================================================
// Dump
// ============================================================================

#[test]
fn list_all_theme_maps_shows_escaped_codes() {
    let themes = ThemeManager::new();
    themes.create("dark").unwrap();
    themes.set("dark").unwrap();
    themes.insert("bracket", "[", GREEN, MapTarget::Chars);

    let dump = themes.list_all_theme_maps();
    assert!(dump.starts_with("\nAll Themes and Their Mappings:\n"));
    assert!(dump.contains("Theme: dark\nCharacter: [, Color Code: \\033[38;5;34m\n"));
    assert!(dump.contains("Theme: default\n"));
    assert!(!dump.contains('\x1b'));
}
