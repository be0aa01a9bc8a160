//! Configuration parsing and loading from files.

use autoselect::app::{Host, Interest, Subscription};
use autoselect::{initialize, AutoselectError, Config, ControlState, MatchMode, Rect, ValueMode};
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug)]
struct Fixed;

impl Host for Fixed {
    fn anchor_rect(&self) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 40.0, 3.0))
    }

    fn listen(&self, interest: Interest) -> Subscription {
        Subscription::detached(interest)
    }
}

fn config(entries: &[(&str, &str)]) -> Config {
    let map: BTreeMap<String, String> = entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_zellij(&map)
}

#[test]
fn empty_map_yields_defaults() {
    assert_eq!(config(&[]), Config::default());
    assert_eq!(
        Config::default().value_mode(),
        ValueMode::Uncontrolled { default: None }
    );
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let parsed = config(&[
        ("row_height", "-2"),
        ("max_visible_rows", "0"),
        ("panel_offset", "NaN"),
        ("match_mode", "regex"),
    ]);
    let defaults = Config::default();
    assert!((parsed.row_height - defaults.row_height).abs() < f32::EPSILON);
    assert_eq!(parsed.max_visible_rows, defaults.max_visible_rows);
    assert_eq!(parsed.panel_offset, None);
    assert_eq!(parsed.match_mode, MatchMode::Substring);
}

#[test]
fn value_key_selects_controlled_mode() {
    assert_eq!(
        config(&[("value", "c")]).value_mode(),
        ValueMode::Controlled(Some("c".into()))
    );
    assert_eq!(config(&[("value", "")]).value_mode(), ValueMode::Controlled(None));
    assert_eq!(
        config(&[("default_value", "a")]).value_mode(),
        ValueMode::Uncontrolled {
            default: Some("a".into())
        }
    );
}

#[test]
fn inline_and_file_options_are_concatenated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("more.toml");
    fs::write(
        &path,
        r#"
[[options]]
value = "d"
label = "Date"
description = "Sweet and sticky"

[[options]]
value = "e"
label = "Elderberry"
disabled = true
"#,
    )
    .unwrap();

    let parsed = config(&[
        ("options", "a=Apple, c=Cherry"),
        ("options_file", path.to_str().unwrap()),
    ]);
    let options = parsed.load_options().unwrap();

    let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["a", "c", "d", "e"]);
    assert_eq!(
        options.find("d").unwrap().description.as_deref(),
        Some("Sweet and sticky")
    );
    assert!(options.find("e").unwrap().disabled);
}

#[test]
fn json_option_files_are_supported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fruit.json");
    fs::write(
        &path,
        r#"[{"value": "a", "label": "Apple", "icon": "A"}, {"value": "b", "label": "Banana"}]"#,
    )
    .unwrap();

    let options = config(&[("options_file", path.to_str().unwrap())])
        .load_options()
        .unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options.get(0).unwrap().icon.as_deref(), Some("A"));
}

#[test]
fn duplicates_across_sources_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    fs::write(&path, r#"[{"value": "a", "label": "Avocado"}]"#).unwrap();

    let err = config(&[
        ("options", "a=Apple"),
        ("options_file", path.to_str().unwrap()),
    ])
    .load_options()
    .unwrap_err();
    assert!(matches!(err, AutoselectError::DuplicateValue(ref v) if v == "a"));
}

#[test]
fn malformed_option_file_fails_initialization() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[options]]\nvalue = ").unwrap();

    let parsed = config(&[("options_file", path.to_str().unwrap())]);
    let err = initialize(&parsed, Fixed).unwrap_err();
    assert!(matches!(err, AutoselectError::Options(_)));
}

#[test]
fn missing_option_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = config(&[("options_file", path.to_str().unwrap())])
        .load_options()
        .unwrap_err();
    assert!(matches!(err, AutoselectError::Io(_)));
}

#[test]
fn theme_file_takes_precedence_and_bad_files_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    let custom = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/themes/catppuccin-latte.toml"
    ))
    .unwrap()
    .replace("catppuccin-latte", "custom");
    fs::write(&path, custom).unwrap();

    let theme = config(&[
        ("theme", "catppuccin-mocha"),
        ("theme_file", path.to_str().unwrap()),
    ])
    .load_theme();
    assert_eq!(theme.name, "custom");

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "name = 42").unwrap();
    let theme = config(&[("theme_file", broken.to_str().unwrap())]).load_theme();
    assert_eq!(theme.name, "catppuccin-mocha");

    let theme = config(&[("theme", "no-such-theme")]).load_theme();
    assert_eq!(theme.name, "catppuccin-mocha");
}

#[test]
fn initialize_applies_flags_and_layout() {
    let parsed = config(&[
        ("options", "a=Apple, b=Banana"),
        ("default_value", "b"),
        ("disabled", "true"),
        ("invalid", "yes"),
        ("placeholder", "Pick one"),
        ("max_visible_rows", "1"),
        ("panel_offset", "2"),
    ]);
    let selector = initialize(&parsed, Fixed).unwrap();

    assert!(selector.controller().is_disabled());
    assert_eq!(selector.controller().display_text(), "Banana");
    assert_eq!(selector.control_state(), ControlState::Disabled);
    assert_eq!(selector.layout().max_visible_rows, 1);
    assert!((selector.positioner().offset() - 2.0).abs() < f32::EPSILON);

    let view = selector.compute_viewmodel();
    assert_eq!(view.placeholder, "Pick one");
    assert!(view.panel.is_none());
}
