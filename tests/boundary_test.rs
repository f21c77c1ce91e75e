use update_changelog::boundary::BoundaryWarning;

#[test]
fn test_version_not_found_display() {
    let warning = BoundaryWarning::VersionNotFound {
        path: "/project/platformio.ini".to_string(),
    };
    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No version found"),
        "Message should mention missing version, got: {}",
        display_msg
    );
    assert!(display_msg.contains("/project/platformio.ini"));
}

#[test]
fn test_no_stable_tags_display() {
    let warning = BoundaryWarning::NoStableTags {
        newest: "v2.0.0-beta3".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "No stable tags found, using newest tag 'v2.0.0-beta3'"
    );
}

#[test]
fn test_no_tags_display() {
    assert!(BoundaryWarning::NoTags
        .to_string()
        .contains("complete commit history"));
}

#[test]
fn test_missing_title_display() {
    let warning = BoundaryWarning::MissingTitle {
        path: "CHANGELOG.md".to_string(),
    };
    let display_msg = warning.to_string();
    assert!(display_msg.contains("CHANGELOG.md"));
    assert!(display_msg.contains("# Changelog"));
}

#[test]
fn test_warnings_compare_by_content() {
    let a = BoundaryWarning::NoStableTags {
        newest: "v1.0.0-beta1".to_string(),
    };
    assert_eq!(a.clone(), a);
    assert_ne!(a, BoundaryWarning::NoTags);
}
