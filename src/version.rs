use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};

/// Extracts the first `version = "..."` assignment from configuration text.
///
/// The value is returned verbatim; no semantic-version validation is done.
///
/// # Example
/// ```ignore
/// assert_eq!(extract_version("version = \"1.2.0\""), Some("1.2.0".to_string()));
/// assert_eq!(extract_version("name = \"x\""), None);
/// ```
pub fn extract_version(content: &str) -> Option<String> {
    let re = Regex::new(r#"version\s*=\s*"([^"]+)""#).ok()?;
    re.captures(content)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Reads the project version from a configuration file.
///
/// # Arguments
/// * `path` - Configuration file to scan (e.g. `platformio.ini`)
///
/// # Returns
/// * `Ok(Some(version))` - The captured version string
/// * `Ok(None)` - If the file has no `version = "..."` assignment
/// * `Err` - If the file cannot be read
pub fn read_version(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| ChangelogError::version(format!("{}: {}", path.display(), e)))?;
    let version = extract_version(&content);
    tracing::debug!(path = %path.display(), ?version, "read project version");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_platformio_ini() {
        let ini = "[env:esp32c3]\nplatform = espressif32\n\n[common]\nversion = \"1.4.2\"\n";
        assert_eq!(extract_version(ini), Some("1.4.2".to_string()));
    }

    #[test]
    fn test_extract_tolerates_spacing() {
        assert_eq!(
            extract_version("version=\"2.0.0-beta3\""),
            Some("2.0.0-beta3".to_string())
        );
        assert_eq!(
            extract_version("version   =   \"0.9\""),
            Some("0.9".to_string())
        );
    }

    #[test]
    fn test_extract_takes_first_match() {
        let content = "version = \"1.0.0\"\nversion = \"2.0.0\"\n";
        assert_eq!(extract_version(content), Some("1.0.0".to_string()));
    }

    #[test]
    fn test_extract_missing_or_empty() {
        assert_eq!(extract_version("[env]\nboard = esp32\n"), None);
        assert_eq!(extract_version("version = \"\""), None);
        assert_eq!(extract_version("version = 1.2.0"), None);
    }

    #[test]
    fn test_read_version_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_version(&dir.path().join("platformio.ini")).unwrap_err();
        assert!(matches!(err, ChangelogError::Version(_)));
        assert!(err.to_string().contains("platformio.ini"));
    }

    #[test]
    fn test_read_version_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("platformio.ini");
        fs::write(&path, "[common]\nversion = \"3.1.0\"\n").unwrap();
        assert_eq!(read_version(&path).unwrap(), Some("3.1.0".to_string()));
    }
}
