// tests/config_test.rs
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use update_changelog::config::{load_config, Config, PROJECT_CONFIG_FILE};

#[test]
fn test_default_config_matches_platformio_layout() {
    let config = Config::default();
    assert_eq!(config.version_file, "platformio.ini");
    assert_eq!(config.changelog_file, "CHANGELOG.md");
    assert_eq!(config.tags.prerelease_markers, vec!["-beta".to_string()]);
    assert_eq!(config.commits.release_marker, "docs:");
    assert!(config
        .commits
        .breaking_markers
        .contains(&"refactor!".to_string()));
    assert!(config.commits.added_keywords.contains(&"new".to_string()));
    assert!(config.commits.fixed_keywords.contains(&"bug".to_string()));
}

#[test]
fn test_load_from_explicit_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
version_file = "Cargo.toml"

[commits]
added_keywords = ["feat", "add"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let root = tempfile::tempdir().unwrap();
    let config = load_config(Some(temp_file.path()), root.path()).unwrap();
    assert_eq!(config.version_file, "Cargo.toml");
    assert_eq!(config.changelog_file, "CHANGELOG.md");
    assert_eq!(
        config.commits.added_keywords,
        vec!["feat".to_string(), "add".to_string()]
    );
}

#[test]
fn test_load_from_fixture() {
    let config = load_config(
        Some(Path::new("tests/fixtures/changelog_overrides.toml")),
        Path::new("."),
    )
    .expect("Failed to load test config");
    assert_eq!(config.version_file, "library.json");
    assert_eq!(
        config.changelog_path(Path::new("/work")),
        Path::new("/work/docs/CHANGES.md")
    );
    assert_eq!(config.tags.prerelease_markers.len(), 2);
    assert!(config.commits.fixed_keywords.contains(&"hotfix".to_string()));
}

#[test]
fn test_project_config_is_picked_up() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(
        root.path().join(PROJECT_CONFIG_FILE),
        "changelog_file = \"HISTORY.md\"\n",
    )
    .unwrap();

    let config = load_config(None, root.path()).unwrap();
    assert_eq!(config.changelog_file, "HISTORY.md");
}

#[test]
fn test_invalid_file_reports_path() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"version_file = [").unwrap();
    temp_file.flush().unwrap();

    let root = tempfile::tempdir().unwrap();
    let err = load_config(Some(temp_file.path()), root.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Configuration error"), "got: {}", msg);
    assert!(msg.contains(&temp_file.path().display().to_string()));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("nope.toml");
    assert!(load_config(Some(&missing), root.path()).is_err());
}
