use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

/// Name of the per-project configuration file looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "changelog.toml";

/// Represents the complete configuration for update-changelog.
///
/// Every key is optional; the defaults describe a PlatformIO project with
/// `platformio.ini` and `CHANGELOG.md` side by side in the project root.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_changelog_file")]
    pub changelog_file: String,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub commits: CommitsConfig,
}

fn default_version_file() -> String {
    "platformio.ini".to_string()
}

fn default_changelog_file() -> String {
    "CHANGELOG.md".to_string()
}

/// Returns the default substrings that mark a tag as a prerelease.
fn default_prerelease_markers() -> Vec<String> {
    vec!["-beta".to_string()]
}

/// Returns the default marker that every self-generated release commit carries.
fn default_release_marker() -> String {
    "docs:".to_string()
}

/// Returns the default phrases identifying self-generated release commits.
fn default_release_phrases() -> Vec<String> {
    vec![
        "update changelog and header for version".to_string(),
        "update platformio.ini for".to_string(),
    ]
}

/// Returns the default list of breaking change indicators.
fn default_breaking_markers() -> Vec<String> {
    vec![
        "feat!".to_string(),
        "fix!".to_string(),
        "chore!".to_string(),
        "refactor!".to_string(),
        "breaking change".to_string(),
        "breaking:".to_string(),
    ]
}

/// Returns the default keywords that put a commit under "Added".
fn default_added_keywords() -> Vec<String> {
    vec!["feat".to_string(), "add".to_string(), "new".to_string()]
}

/// Returns the default keywords that put a commit under "Fixed".
fn default_fixed_keywords() -> Vec<String> {
    vec!["fix".to_string(), "bug".to_string()]
}

/// Configuration for stable tag selection.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_prerelease_markers")]
    pub prerelease_markers: Vec<String>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prerelease_markers: default_prerelease_markers(),
        }
    }
}

/// Configuration for commit classification.
///
/// Matching is case-insensitive substring search on the commit subject.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommitsConfig {
    #[serde(default = "default_release_marker")]
    pub release_marker: String,

    #[serde(default = "default_release_phrases")]
    pub release_phrases: Vec<String>,

    #[serde(default = "default_breaking_markers")]
    pub breaking_markers: Vec<String>,

    #[serde(default = "default_added_keywords")]
    pub added_keywords: Vec<String>,

    #[serde(default = "default_fixed_keywords")]
    pub fixed_keywords: Vec<String>,
}

impl Default for CommitsConfig {
    fn default() -> Self {
        CommitsConfig {
            release_marker: default_release_marker(),
            release_phrases: default_release_phrases(),
            breaking_markers: default_breaking_markers(),
            added_keywords: default_added_keywords(),
            fixed_keywords: default_fixed_keywords(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            changelog_file: default_changelog_file(),
            tags: TagsConfig::default(),
            commits: CommitsConfig::default(),
        }
    }
}

impl Config {
    /// Path of the file holding the project version, resolved against `root`.
    pub fn version_path(&self, root: &Path) -> PathBuf {
        root.join(&self.version_file)
    }

    /// Path of the changelog document, resolved against `root`.
    pub fn changelog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.changelog_file)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in the project root
/// 3. `~/.config/.changelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `project_root` - Directory searched for `changelog.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, project_root: &Path) -> Result<Config> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);

    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else if project_config.exists() {
        project_config
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(".changelog.toml");
        if user_config.exists() {
            user_config
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %config_file.display(), "loading configuration");
    let config_str = fs::read_to_string(&config_file)?;
    parse_config(&config_str)
        .map_err(|e| ChangelogError::config(format!("{}: {}", config_file.display(), e)))
}

/// Parses configuration from a TOML string.
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_commits_table_keeps_other_defaults() {
        let config = parse_config(
            r#"
[commits]
fixed_keywords = ["fix", "bug", "patch"]
"#,
        )
        .unwrap();
        assert_eq!(config.commits.fixed_keywords.len(), 3);
        assert_eq!(config.commits.release_marker, "docs:");
        assert_eq!(config.commits.added_keywords, default_added_keywords());
        assert_eq!(config.tags.prerelease_markers, vec!["-beta".to_string()]);
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let config = Config::default();
        let root = Path::new("/tmp/project");
        assert_eq!(
            config.version_path(root),
            PathBuf::from("/tmp/project/platformio.ini")
        );
        assert_eq!(
            config.changelog_path(root),
            PathBuf::from("/tmp/project/CHANGELOG.md")
        );
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(parse_config("version_file = [").is_err());
    }
}
