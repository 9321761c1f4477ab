use quizcards::config::{Config, ConfigError, LabelOverrides, Locale};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.labels, LabelOverrides::default());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("quizcards/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_config_parses() {
    let (_dir, path) = write_config(
        r#"
locale = "de"

[labels]
save = "Sichern"

[logging]
level = "debug"
file = "/tmp/quizcards-test.log"
"#,
    );

    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.locale, Locale::De);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file_path(),
        PathBuf::from("/tmp/quizcards-test.log")
    );

    let labels = config.labels();
    assert_eq!(labels.save, "Sichern");
    assert_eq!(labels.question_caption, "Frage");
    assert_eq!(labels.rating_caption, "Bewertung: ");
    assert_eq!(labels.hint_quit, "Beenden");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let (_dir, path) = write_config("theme = \"dark\"\nlocale = \"de\"\n");
    let config = Config::load_from(&path).expect("unknown keys are ignored");
    assert_eq!(config.locale, Locale::De);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let (_dir, path) = write_config("[labels]\ntitle = \"Deck\"\n");
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.labels().title, "Deck");
    assert_eq!(config.labels().save, "Save");
}

#[test]
fn test_unknown_locale_is_parse_error() {
    let (_dir, path) = write_config("locale = \"fr\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_blank_button_label_fails_validation() {
    let (_dir, path) = write_config("[labels]\ngood = \"  \"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("'good'"), "message: {}", message);
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_blank_caption_is_allowed() {
    let (_dir, path) = write_config("[labels]\nrating_caption = \"\"\n");
    let config = Config::load_from(&path).expect("captions may be empty");
    assert_eq!(config.labels().rating_caption, "");
}
